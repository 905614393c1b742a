//! Conti extraction and data structures module
//!
//! This module turns loosely structured storyboard source text into an
//! ordered `Document` of scenes and cuts.

pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;
pub mod query;

// Re-export all models and query functions
pub use loader::{load_conti, parse_conti};
pub use models::*;
pub use query::*;
