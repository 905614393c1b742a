//! contix: line conti (storyboard) to .docx converter
//!
//! This library extracts scenes and cuts from loosely structured storyboard
//! source text and renders them as a styled, landscape table document with
//! blank image placeholders for sketches added by hand later.

pub mod document;
pub mod error;
pub mod render;
pub mod theme;

// Re-export commonly used types
pub use document::{load_conti, parse_conti, Cut, Document, Scene};
pub use error::{ContixError, Result};
pub use render::{build_docx, write_docx, RenderSummary};
