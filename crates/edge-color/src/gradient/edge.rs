//! Polar form of a gradient vector.

use std::f64::consts::TAU;

/// Raw magnitude that maps to 255. Larger responses scale past 255; they
/// are not clipped.
pub const MAGNITUDE_NORMALIZATION: f64 = 1275.0;

/// Upper end of the normalized magnitude scale.
pub const MAGNITUDE_SCALE: f64 = 255.0;

/// Gradient at one pixel: the two kernel responses plus their normalized
/// magnitude and direction.
///
/// Built once by [`EdgeGradient::new`] and never modified.
///
/// # Example
///
/// ```
/// use edge_color::EdgeGradient;
/// use std::f64::consts::PI;
///
/// let edge = EdgeGradient::new(-1020, 0);
/// assert_eq!(edge.magnitude(), 204.0);
/// assert_eq!(edge.angle(), PI);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGradient {
    gx: i64,
    gy: i64,
    magnitude: f64,
    angle: f64,
}

impl EdgeGradient {
    /// Derive magnitude and angle from the horizontal and vertical responses.
    ///
    /// - `magnitude = sqrt(gx² + gy²) / 1275 * 255`
    /// - `angle` is `atan2` of the unit vector, shifted into `[0, 2π)`, and
    ///   exactly `0.0` when both components are zero.
    pub fn new(gx: i64, gy: i64) -> Self {
        let (x, y) = (gx as f64, gy as f64);
        let raw = (x * x + y * y).sqrt();

        let angle = if raw == 0.0 {
            0.0
        } else {
            let angle = (y / raw).atan2(x / raw);
            if angle < 0.0 {
                angle + TAU
            } else {
                angle
            }
        };

        Self {
            gx,
            gy,
            magnitude: raw / MAGNITUDE_NORMALIZATION * MAGNITUDE_SCALE,
            angle,
        }
    }

    /// Horizontal kernel response.
    #[inline]
    pub fn gx(&self) -> i64 {
        self.gx
    }

    /// Vertical kernel response.
    #[inline]
    pub fn gy(&self) -> i64 {
        self.gy
    }

    /// Normalized magnitude, `0..=255` for raw magnitudes up to 1275.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Direction in radians, `[0, 2π)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// `true` when both kernel responses are zero.
    #[inline]
    pub fn is_flat(&self) -> bool {
        self.gx == 0 && self.gy == 0
    }
}
