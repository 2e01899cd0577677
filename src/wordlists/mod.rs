//! Word lists for ladder building
//!
//! Provides the embedded dictionary compiled into the binary plus the
//! file loader.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
