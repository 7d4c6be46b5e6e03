//! Sample grids and grayscale loading.

mod buffer;
mod luminance;

pub use buffer::Raster;
pub use luminance::{load_luminance, load_rgb, luminance, LUMA_WEIGHTS, PREALLOCATE_LIMIT};
