//! P3 serialization.
//!
//! The payload layout is fixed: every value is followed by one space and
//! every row ends with `\n`, so a row of `3 * width` values reads
//! `"r g b r g b \n"`. The header is written verbatim.

use std::fmt::Display;
use std::io::{self, Write};

use super::HeaderInfo;
use crate::raster::Raster;

/// Write `header` verbatim, then one text line per raster row.
///
/// Values are not range checked against the header's max intensity.
pub fn write_raster<W: Write, T: Copy + Display>(
    out: &mut W,
    header: &str,
    raster: &Raster<T>,
) -> io::Result<()> {
    out.write_all(header.as_bytes())?;
    for row in raster.rows() {
        for value in row {
            write!(out, "{value} ")?;
        }
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the colorized raster under a header regenerated from the source.
///
/// The header keeps the source width and height even though each row holds
/// `3 * width` values.
pub fn write_colorized<W: Write>(
    out: &mut W,
    source: &HeaderInfo,
    raster: &Raster<u32>,
) -> io::Result<()> {
    write_raster(out, &source.encode(), raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netpbm::{HeaderLayout, LineReader};
    use crate::raster::load_rgb;
    use pretty_assertions::assert_eq;

    fn header(width: usize, height: usize) -> HeaderInfo {
        HeaderInfo {
            format_tag: '3',
            width,
            height,
            max_intensity: 255,
            layout: HeaderLayout::Compact,
        }
    }

    #[test]
    fn test_exact_byte_layout() {
        let raster = Raster::from_vec(vec![1u32, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12], 2, 2, 3);
        let mut out = Vec::new();
        write_colorized(&mut out, &header(2, 2), &raster).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "P3\n2 2\n255\n1 2 3 4 5 6 \n7 8 9 10 11 12 \n"
        );
    }

    #[test]
    fn test_header_written_verbatim() {
        let raster = Raster::from_vec(vec![0i32], 1, 1, 1);
        let mut out = Vec::new();
        write_raster(&mut out, "anything\n", &raster).unwrap();
        assert_eq!(out, b"anything\n0 \n");
    }

    #[test]
    fn test_reread_reproduces_values() {
        let samples: Vec<i32> = vec![
            0, 17, 255, 3, 99, 128, 1000, 42, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16,
        ];
        let raster = Raster::from_vec(samples, 3, 2, 3);
        let source = header(3, 2);

        let mut out = Vec::new();
        write_raster(&mut out, &source.encode(), &raster).unwrap();

        let mut reader = LineReader::new(out.as_slice());
        let reread_header = crate::netpbm::parse_header(&mut reader).unwrap();
        assert_eq!(reread_header, source);
        let reread = load_rgb(&mut reader, &reread_header).unwrap();
        assert_eq!(reread, raster);
    }
}
