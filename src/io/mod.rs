/// Command-line parsing and the generation runner
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// Swatch painting, grid rendering and PNG export
pub mod image;
/// Progress bars for generation attempts
pub mod progress;
/// Built-in tilesets
pub mod tilesets;
/// Animated GIF capture of generation runs
pub mod visualization;
