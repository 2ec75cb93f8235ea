//! Domain models for the plainmed system.

mod report;
mod summary;

pub use report::*;
pub use summary::*;
