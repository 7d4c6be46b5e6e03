//! RGB payload loading and grayscale reduction.

use std::io::BufRead;

use super::Raster;
use crate::api::EdgeError;
use crate::netpbm::{HeaderInfo, LineReader};

/// Rec. 709 luma weights for red, green and blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Luminance of one RGB triplet, truncated toward zero.
///
/// Channels are not range checked.
///
/// ```
/// use edge_color::raster::luminance;
///
/// assert_eq!(luminance(128, 128, 128), 128);
/// assert_eq!(luminance(0, 255, 0), 182);
/// ```
#[inline]
pub fn luminance(red: i32, green: i32, blue: i32) -> i32 {
    let value = LUMA_WEIGHTS[0] * f64::from(red)
        + LUMA_WEIGHTS[1] * f64::from(green)
        + LUMA_WEIGHTS[2] * f64::from(blue);
    value as i32
}

/// Samples reserved up front, however large the header claims the image is.
pub const PREALLOCATE_LIMIT: usize = 1 << 20;

/// Read `width * height` RGB triplets, row by row, into a 3-channel raster.
pub fn load_rgb<R: BufRead>(
    reader: &mut LineReader<R>,
    header: &HeaderInfo,
) -> Result<Raster<i32>, EdgeError> {
    let mut samples = sample_buffer(header, 3)?;
    for _ in 0..header.height {
        for _ in 0..header.width {
            let (red, green, blue) = read_triplet(reader)?;
            samples.extend([red, green, blue]);
        }
    }
    Ok(Raster::from_vec(samples, header.width, header.height, 3))
}

/// Read `width * height` RGB triplets, row by row, reducing each to its
/// [`luminance`].
pub fn load_luminance<R: BufRead>(
    reader: &mut LineReader<R>,
    header: &HeaderInfo,
) -> Result<Raster<i32>, EdgeError> {
    let mut samples = sample_buffer(header, 1)?;
    for _ in 0..header.height {
        for _ in 0..header.width {
            let (red, green, blue) = read_triplet(reader)?;
            samples.push(luminance(red, green, blue));
        }
    }
    tracing::debug!(
        pixels = samples.len(),
        offset = reader.offset(),
        "Loaded luminance"
    );
    Ok(Raster::from_vec(samples, header.width, header.height, 1))
}

/// Empty buffer for the payload; grows as tokens arrive.
fn sample_buffer(header: &HeaderInfo, channels: usize) -> Result<Vec<i32>, EdgeError> {
    let count = header.sample_count(channels)?;
    Ok(Vec::with_capacity(count.min(PREALLOCATE_LIMIT)))
}

fn read_triplet<R: BufRead>(reader: &mut LineReader<R>) -> Result<(i32, i32, i32), EdgeError> {
    let red = reader.parse_next("red sample")?;
    let green = reader.parse_next("green sample")?;
    let blue = reader.parse_next("blue sample")?;
    Ok((red, green, blue))
}
