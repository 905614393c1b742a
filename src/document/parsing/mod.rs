//! Source text scanning utilities
//!
//! This module contains the pattern-matching pieces of the extractor:
//! marker scanning that splits text into scene and cut spans, and field
//! matchers that pull quoted values out of a span.

pub(crate) mod fields;
pub(crate) mod spans;
