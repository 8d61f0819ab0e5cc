//! Spatial data structures and grid topologies
//!
//! This module contains spatial-related functionality including:
//! - Edges and the rotation and reflection capabilities of tile parts
//! - Tiles and the tilesets that index them
//! - The grid engine and its square topology

/// Edge compatibility and reflection
pub mod edge;
/// Topology-agnostic grid engine
pub mod grid;
/// Image handles with deferred transforms
pub mod handle;
/// Rectangular 4-connected grid
pub mod square;
/// Tiles, transforms and tilesets
pub mod tiles;

pub use grid::Grid;
pub use square::SquareGrid;
