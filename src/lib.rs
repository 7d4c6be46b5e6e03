//! Edgehue - edge colorization for ASCII PPM images
//!
//! File-level wrapper around the `edge-color` crate: configuration,
//! output file handling and error reporting for the `edgehue` binary.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
