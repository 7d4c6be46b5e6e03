//! edge-color: directional edge colorization for ASCII PPM images
//!
//! This library reads a plain-text `P3` raster, measures the Sobel gradient
//! at every pixel and writes a new `P3` raster in which brightness follows
//! edge strength and hue follows edge direction.
//!
//! # Quick Start
//!
//! [`process`] runs the whole pipeline between any buffered reader and any
//! writer:
//!
//! ```
//! let input = "\
//! P3
//! 3 3
//! 255
//! 0 0 0  255 255 255  255 255 255
//! 0 0 0  255 255 255  255 255 255
//! 0 0 0  255 255 255  255 255 255
//! ";
//! let mut output = Vec::new();
//! edge_color::process(input.as_bytes(), &mut output).unwrap();
//!
//! // Left column black, the rest white: a rightward gradient, mapped to blue.
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("0 0 176 0 0 176 0 0 176 \n"));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! P3 text
//!     |
//!     v
//! parse_header            (comment lines skipped, compact or inline layout)
//!     |
//!     v
//! load_luminance          (trunc(0.2126 R + 0.7152 G + 0.0722 B))
//!     |
//!     v
//! ╔═════════════════════════════════════════╗
//! ║  per pixel (row-major)                  ║
//! ║                                         ║
//! ║  clamp (x, y) into the interior         ║
//! ║      |                                  ║
//! ║  3x3 Sobel pair  ->  (gx, gy)           ║
//! ║      |                                  ║
//! ║  EdgeGradient    ->  magnitude, angle   ║
//! ║      |                                  ║
//! ║  ColorWeights    ->  (r, g, b)          ║
//! ╚═════════════════════════════════════════╝
//!     |
//!     v
//! write_colorized         (header keeps the source width and height)
//! ```
//!
//! # Output Framing
//!
//! The regenerated header reports the source width, height and max
//! intensity. Each payload row holds `3 * width` values, one RGB triplet per
//! source pixel, each followed by a space.
//!
//! # Border Policy
//!
//! Border pixels use the gradient of the nearest interior pixel
//! (see [`GradientComputer`]). Images smaller than 3x3 have no interior and
//! are rejected with [`FormatError::ImageTooSmall`].

pub mod api;
pub mod color;
pub mod gradient;
pub mod netpbm;
pub mod raster;


pub use api::{colorize, process, read_source, write_output, EdgeError, FormatError, SourceImage};
pub use color::ColorWeights;
pub use gradient::{EdgeGradient, GradientComputer};
pub use netpbm::{HeaderInfo, HeaderLayout, LineReader};
pub use raster::Raster;
