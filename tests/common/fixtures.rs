//! Sample images and their expected edge output.

/// 3x3 mid-gray, every pixel identical
pub const UNIFORM_GRAY: &str = "P3\n3 3\n255\n\
128 128 128 128 128 128 128 128 128\n\
128 128 128 128 128 128 128 128 128\n\
128 128 128 128 128 128 128 128 128\n";

pub const UNIFORM_GRAY_EDGES: &str = "P3\n3 3\n255\n\
0 0 0 0 0 0 0 0 0 \n\
0 0 0 0 0 0 0 0 0 \n\
0 0 0 0 0 0 0 0 0 \n";

/// 3x3 with a black left column, inline header and comments
pub const VERTICAL_EDGE: &str = "# left column is black\n\
P3 3 3\n\
# the rest is white\n\
255\n\
0 0 0 255 255 255 255 255 255\n\
0 0 0 255 255 255 255 255 255\n\
0 0 0 255 255 255 255 255 255\n";

pub const VERTICAL_EDGE_EDGES: &str = "P3\n3 3\n255\n\
0 0 176 0 0 176 0 0 176 \n\
0 0 176 0 0 176 0 0 176 \n\
0 0 176 0 0 176 0 0 176 \n";

/// Binary PPM tag, rejected before any pixel is read
pub const BINARY_PPM: &str = "P6\n3 3\n255\n";

/// Header promises 3x3 but the payload stops after one pixel
pub const TRUNCATED: &str = "P3\n3 3\n255\n1 2 3\n";

/// Too small for a 3x3 neighborhood
pub const TOO_SMALL: &str = "P3\n2 2\n255\n1 1 1 1 1 1 1 1 1 1 1 1\n";

/// Non-numeric sample in the payload
pub const BAD_SAMPLE: &str = "P3\n3 3\n255\n1 2 x\n";
