//! Row-major sample grid.

/// A `width x height` grid of samples with `channels` interleaved values per
/// pixel, stored row-major.
///
/// Luminance rasters use one channel; the colorized output uses three.
///
/// # Example
///
/// ```
/// use edge_color::Raster;
///
/// let mut raster = Raster::<i32>::new(2, 2, 3);
/// raster.set(1, 0, 2, 99);
/// assert_eq!(raster.get(1, 0, 2), 99);
/// assert_eq!(raster.row(0), &[0, 0, 0, 0, 0, 99]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster<T> {
    samples: Vec<T>,
    width: usize,
    height: usize,
    channels: usize,
}

fn sample_len(width: usize, height: usize, channels: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(channels)
}

impl<T: Copy + Default> Raster<T> {
    /// Create a raster with every sample set to `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * channels` overflows `usize`.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        let len = sample_len(width, height, channels);
        Self {
            samples: vec![T::default(); len.expect("raster size overflows usize")],
            width,
            height,
            channels,
        }
    }
}

impl<T: Copy> Raster<T> {
    /// Wrap existing samples.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len() != width * height * channels`.
    pub fn from_vec(samples: Vec<T>, width: usize, height: usize, channels: usize) -> Self {
        assert_eq!(
            Some(samples.len()),
            sample_len(width, height, channels),
            "sample count ({}) must match {}x{}x{}",
            samples.len(),
            width,
            height,
            channels,
        );
        Self {
            samples,
            width,
            height,
            channels,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Values per row (`width * channels`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.width * self.channels
    }

    #[inline]
    fn index(&self, x: usize, y: usize, channel: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && channel < self.channels);
        y * self.stride() + x * self.channels + channel
    }

    /// Sample at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> T {
        self.samples[self.index(x, y, channel)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: T) {
        let index = self.index(x, y, channel);
        self.samples[index] = value;
    }

    /// All samples of row `y`.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let stride = self.stride();
        &self.samples[y * stride..(y + 1) * stride]
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact panics on a zero chunk size
        self.samples.chunks_exact(self.stride().max(1))
    }

    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let raster = Raster::<u32>::new(3, 2, 3);
        assert_eq!(raster.samples().len(), 18);
        assert!(raster.samples().iter().all(|&v| v == 0));
        assert_eq!(raster.stride(), 9);
    }

    #[test]
    fn test_row_major_layout() {
        let raster = Raster::from_vec((0..6).collect::<Vec<i32>>(), 3, 2, 1);
        assert_eq!(raster.get(0, 0, 0), 0);
        assert_eq!(raster.get(2, 0, 0), 2);
        assert_eq!(raster.get(0, 1, 0), 3);
        assert_eq!(raster.row(1), &[3, 4, 5]);
    }

    #[test]
    fn test_interleaved_channels() {
        let mut raster = Raster::<u32>::new(2, 1, 3);
        raster.set(1, 0, 0, 7);
        raster.set(1, 0, 2, 9);
        assert_eq!(raster.row(0), &[0, 0, 0, 7, 0, 9]);
    }

    #[test]
    fn test_rows_iterator() {
        let raster = Raster::from_vec(vec![1, 2, 3, 4], 2, 2, 1);
        let rows: Vec<&[i32]> = raster.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..]]);
    }

    #[test]
    fn test_rows_of_empty_raster() {
        let raster = Raster::<i32>::new(0, 0, 1);
        assert_eq!(raster.rows().count(), 0);
    }

    #[test]
    #[should_panic(expected = "sample count")]
    fn test_from_vec_length_mismatch() {
        let _ = Raster::from_vec(vec![1, 2, 3], 2, 2, 1);
    }
}
