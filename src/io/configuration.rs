//! Compile-time defaults and limits for collage composition

/// Default number of cells along each grid axis
pub const DEFAULT_GRID_SIZE: u32 = 3;

/// Default side length of each grid cell in pixels
pub const DEFAULT_CELL_SIZE: u32 = 300;

/// Default filename designating the center image inside an input folder
pub const DEFAULT_CENTER_FILE: &str = "pfp.jpg";

/// Default output filename for the composed collage
pub const DEFAULT_OUTPUT_FILE: &str = "grid_output.png";

/// Extensions accepted by the folder scanner, lowercase
///
/// Fixed allow-list rather than open-ended extension sniffing; anything
/// outside it is a typed `UnsupportedFormat` error.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

// Safety limit to prevent excessive memory allocation
/// Maximum allowed canvas side length in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 20_000;

/// Width of the loading progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
