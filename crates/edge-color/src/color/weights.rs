//! Direction-to-color projection.
//!
//! Each channel owns a reference direction. A pixel's channel intensity is
//! its magnitude scaled by the cosine between the edge direction and that
//! reference, rounded and clipped at zero:
//!
//! ```text
//!                red (π/2)
//!                  |
//!                  +
//!                /   \
//!   green (7π/6)       blue (11π/6)
//! ```

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::gradient::EdgeGradient;

/// Reference direction of the red channel.
pub const RED_REFERENCE: f64 = FRAC_PI_2;
/// Reference direction of the green channel.
pub const GREEN_REFERENCE: f64 = 7.0 / 6.0 * PI;
/// Reference direction of the blue channel.
pub const BLUE_REFERENCE: f64 = TAU - PI / 6.0;

/// Per-channel intensities for one pixel. Always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorWeights {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl ColorWeights {
    /// Project a direction (radians) of strength `magnitude` onto the three
    /// reference directions.
    ///
    /// ```
    /// use edge_color::ColorWeights;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let weights = ColorWeights::from_direction(FRAC_PI_2, 200.0);
    /// assert_eq!(weights, ColorWeights { red: 200, green: 0, blue: 0 });
    /// ```
    pub fn from_direction(angle: f64, magnitude: f64) -> Self {
        Self {
            red: channel_weight(RED_REFERENCE, angle, magnitude),
            green: channel_weight(GREEN_REFERENCE, angle, magnitude),
            blue: channel_weight(BLUE_REFERENCE, angle, magnitude),
        }
    }

    /// `[red, green, blue]`
    #[inline]
    pub fn to_array(self) -> [u32; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<&EdgeGradient> for ColorWeights {
    fn from(edge: &EdgeGradient) -> Self {
        Self::from_direction(edge.angle(), edge.magnitude())
    }
}

#[inline]
fn channel_weight(reference: f64, angle: f64, magnitude: f64) -> u32 {
    let weight = (magnitude * (reference - angle).abs().cos()).round();
    // negative projections clip to zero; `as` saturates
    weight.max(0.0) as u32
}
