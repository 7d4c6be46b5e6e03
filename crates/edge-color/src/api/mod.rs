//! Public API for the edge-color crate.
//!
//! This module provides the pipeline entry points ([`process`] and its
//! stages) and the [`EdgeError`] / [`FormatError`] error types.

mod error;
mod pipeline;

pub use error::{EdgeError, FormatError};
pub use pipeline::{colorize, process, read_source, write_output, SourceImage};
