//! Export functionality for sharing summaries.

mod summary;

pub use summary::*;
