//! End-to-end pipeline: read, colorize, write.

use std::io::{BufRead, Write};

use super::EdgeError;
use crate::color::ColorWeights;
use crate::gradient::{check_dimensions, GradientComputer};
use crate::netpbm::{parse_header, write_colorized, HeaderInfo, LineReader};
use crate::raster::{load_luminance, Raster};

/// A parsed input image reduced to luminance.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub header: HeaderInfo,
    pub luminance: Raster<i32>,
}

/// Parse the header and load the luminance raster.
///
/// Images smaller than 3x3, or too large to address, are rejected right
/// after the header, before any pixel data is read.
pub fn read_source<R: BufRead>(input: R) -> Result<SourceImage, EdgeError> {
    let mut reader = LineReader::new(input);
    let header = parse_header(&mut reader)?;
    check_dimensions(header.width, header.height)?;
    header.sample_count(3)?;
    let luminance = load_luminance(&mut reader, &header)?;
    Ok(SourceImage { header, luminance })
}

/// Map every pixel's gradient direction and strength to an RGB triplet.
///
/// The result has the luminance raster's dimensions and three channels.
pub fn colorize(luminance: &Raster<i32>) -> Result<Raster<u32>, EdgeError> {
    let computer = GradientComputer::new(luminance)?;
    let mut output = Raster::new(luminance.width(), luminance.height(), 3);

    let mut lit = 0usize;
    for y in 0..luminance.height() {
        for x in 0..luminance.width() {
            let edge = computer.gradient_at(x, y);
            let weights = ColorWeights::from(&edge);
            if weights != ColorWeights::default() {
                lit += 1;
            }
            for (channel, value) in weights.to_array().into_iter().enumerate() {
                output.set(x, y, channel, value);
            }
        }
    }

    tracing::debug!(
        width = luminance.width(),
        height = luminance.height(),
        lit,
        "Colorized edges"
    );
    Ok(output)
}

/// Write a colorized raster under a header regenerated from `source`.
pub fn write_output<W: Write>(
    mut output: W,
    source: &HeaderInfo,
    colorized: &Raster<u32>,
) -> Result<(), EdgeError> {
    write_colorized(&mut output, source, colorized)?;
    output.flush()?;
    Ok(())
}

/// Run the whole pipeline from `input` to `output`.
///
/// Nothing is written to `output` unless the input was read and colorized
/// successfully.
///
/// # Example
///
/// ```
/// let input = "P3\n3 3\n255\n".to_string() + &"128 128 128 ".repeat(9);
/// let mut output = Vec::new();
///
/// let header = edge_color::process(input.as_bytes(), &mut output).unwrap();
/// assert_eq!(header.width, 3);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.starts_with("P3\n3 3\n255\n0 0 0 0 0 0 0 0 0 \n"));
/// ```
pub fn process<R: BufRead, W: Write>(input: R, output: W) -> Result<HeaderInfo, EdgeError> {
    let source = read_source(input)?;
    let colorized = colorize(&source.luminance)?;
    write_output(output, &source.header, &colorized)?;
    Ok(source.header)
}
