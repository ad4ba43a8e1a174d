//! Line- and byte-windowing engine behind the `head` and `tail`
//! binaries: flag classification, content slicing, and multi-file
//! output assembly over a pluggable file source.

pub mod args;
pub mod content;
pub mod error;
pub mod file_loader;
pub mod file_source;
pub mod window;
