//! Breadth-first ladder search
//!
//! The frontier of partial ladders, the per-search visited marks, and
//! the expansion loop that ties them together.

mod engine;
mod frontier;
mod ladder;
mod visited;

pub use engine::{SearchError, find_shortest_ladder};
pub use frontier::Frontier;
pub use ladder::Ladder;
pub use visited::VisitedSet;
