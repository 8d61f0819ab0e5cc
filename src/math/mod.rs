//! Mathematical utilities for the algorithm

/// Inverse-weight probabilities and cumulative draws
pub mod probability;
