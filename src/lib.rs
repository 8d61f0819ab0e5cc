//! Edge-matched tile generation by incremental support withdrawal
//!
//! A grid starts with every tile possible in every cell. Each step removes a
//! single tile from one of the least-constrained cells, favouring rare tiles,
//! and withdraws the support it gave its neighbours until the grid is arc
//! consistent again. Cells collapse gradually rather than being assigned.

#![forbid(unsafe_code)]

/// Support records, propagation, selection policy and the generation driver
pub mod algorithm;
/// Command line, built-in tilesets, rendering and error handling
pub mod io;
/// Probability helpers for inverse-weight elimination
pub mod math;
/// Edges, tiles, tilesets and grid topologies
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
