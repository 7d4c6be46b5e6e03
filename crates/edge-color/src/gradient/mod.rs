//! Sobel gradients and their polar form.
//!
//! [`GradientComputer`] convolves the fixed [`SOBEL_HORIZONTAL`] and
//! [`SOBEL_VERTICAL`] kernels at a pixel; [`EdgeGradient`] turns the two
//! responses into a normalized magnitude and a direction in `[0, 2π)`.

mod edge;
mod kernel;
mod sobel;

pub use edge::{EdgeGradient, MAGNITUDE_NORMALIZATION, MAGNITUDE_SCALE};
pub use kernel::{convolve, Kernel3, SOBEL_HORIZONTAL, SOBEL_VERTICAL};
pub use sobel::{check_dimensions, GradientComputer, MIN_DIMENSION};
