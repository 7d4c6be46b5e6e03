//! Per-pixel Sobel gradients with a clamp-to-interior border policy.
//!
//! Interior pixels are convolved with their own 3x3 neighborhood. Border
//! pixels are not padded: their coordinate is clamped into
//! `1..=width-2` x `1..=height-2` and the interior neighborhood at the
//! clamped position is used, so every border and corner pixel repeats the
//! gradient of the nearest interior pixel.

use super::edge::EdgeGradient;
use super::kernel::{convolve, Kernel3, SOBEL_HORIZONTAL, SOBEL_VERTICAL};
use crate::api::FormatError;
use crate::raster::Raster;

/// Smallest width and height the border policy is defined for.
pub const MIN_DIMENSION: usize = 3;

/// Check that a `width x height` image has an interior to clamp into.
pub fn check_dimensions(width: usize, height: usize) -> Result<(), FormatError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(FormatError::ImageTooSmall { width, height });
    }
    Ok(())
}

/// Computes [`EdgeGradient`]s over a single-channel luminance raster.
pub struct GradientComputer<'a> {
    luminance: &'a Raster<i32>,
}

impl<'a> GradientComputer<'a> {
    /// Borrow a luminance raster.
    ///
    /// Fails with [`FormatError::ImageTooSmall`] if either dimension is
    /// below [`MIN_DIMENSION`].
    pub fn new(luminance: &'a Raster<i32>) -> Result<Self, FormatError> {
        debug_assert_eq!(luminance.channels(), 1, "luminance must be single-channel");
        check_dimensions(luminance.width(), luminance.height())?;
        Ok(Self { luminance })
    }

    /// Clamp `(x, y)` into the interior.
    #[inline]
    pub fn clamp_to_interior(&self, x: usize, y: usize) -> (usize, usize) {
        (
            x.clamp(1, self.luminance.width() - 2),
            y.clamp(1, self.luminance.height() - 2),
        )
    }

    /// The 3x3 neighborhood around an interior pixel, `[row][column]`.
    fn neighborhood(&self, x: usize, y: usize) -> Kernel3 {
        let mut window = [[0; 3]; 3];
        for (dy, row) in window.iter_mut().enumerate() {
            for (dx, value) in row.iter_mut().enumerate() {
                *value = self.luminance.get(x + dx - 1, y + dy - 1, 0);
            }
        }
        window
    }

    /// Gradient at column `x`, row `y`.
    pub fn gradient_at(&self, x: usize, y: usize) -> EdgeGradient {
        let (x, y) = self.clamp_to_interior(x, y);
        let window = self.neighborhood(x, y);
        EdgeGradient::new(
            convolve(&SOBEL_HORIZONTAL, &window),
            convolve(&SOBEL_VERTICAL, &window),
        )
    }
}
