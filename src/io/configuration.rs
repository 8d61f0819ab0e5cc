//! Generation constants and runtime configuration defaults

/// Number of sides of a square cell
pub const SQUARE_SIDES: usize = 4;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width and height in cells
pub const DEFAULT_DIMENSION: usize = 30;

/// Default number of generation attempts before giving up on contradictions
pub const DEFAULT_ATTEMPTS: usize = 1;

/// Default weight for tiles that do not specify one
pub const DEFAULT_TILE_WEIGHT: f64 = 1.0;

// Rendering settings
/// Edge length in pixels of a rendered tile
pub const DEFAULT_TILE_PIXELS: u32 = 12;
/// Background colour for undecided cells
pub const UNDECIDED_COLOR: [u8; 4] = [51, 51, 51, 255];
/// Fill colour for contradicted cells
pub const CONTRADICTION_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Candidate thumbnails per row in the candidate view
pub const CANDIDATE_COLUMNS: u32 = 3;

// Output settings
/// Default output path for the rendered grid
pub const DEFAULT_OUTPUT: &str = "wavetile.png";
/// Suffix added to the output stem for the animation
pub const VISUALIZATION_SUFFIX: &str = "_visualization";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
