//! Plain-text PPM (`P3`) reading and writing.
//!
//! - [`LineReader`]: line-buffered tokenizer that hides comment lines
//! - [`parse_header`]: tolerant header parsing into [`HeaderInfo`]
//! - [`write_raster`] / [`write_colorized`]: payload serialization

mod header;
mod reader;
mod writer;

pub use header::{parse_header, HeaderInfo, HeaderLayout, ASCII_RGB_TAG};
pub use reader::LineReader;
pub use writer::{write_colorized, write_raster};
