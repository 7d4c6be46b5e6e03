//! Fixed 3x3 Sobel kernels.

/// A 3x3 integer kernel or neighborhood, indexed `[row][column]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal derivative; responds to vertical edges.
///
/// ```text
///   -1  0  1
///   -2  0  2
///   -1  0  1
/// ```
pub const SOBEL_HORIZONTAL: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical derivative; responds to horizontal edges. Positive when the
/// row above is brighter than the row below.
///
/// ```text
///    1  2  1
///    0  0  0
///   -1 -2 -1
/// ```
pub const SOBEL_VERTICAL: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Sum of the elementwise products of `kernel` and `neighborhood`.
///
/// Accumulates in `i64`, so any `i32` neighborhood is exact.
#[inline]
pub fn convolve(kernel: &Kernel3, neighborhood: &Kernel3) -> i64 {
    kernel
        .iter()
        .flatten()
        .zip(neighborhood.iter().flatten())
        .map(|(&k, &v)| i64::from(k) * i64::from(v))
        .sum()
}
