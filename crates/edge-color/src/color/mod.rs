//! Mapping of edge directions to RGB intensities.
//!
//! See [`ColorWeights::from_direction`] for the projection.

mod weights;

pub use weights::{ColorWeights, BLUE_REFERENCE, GREEN_REFERENCE, RED_REFERENCE};
