/// Fixed-size bitsets over tile indices
pub mod bitset;
/// Generation driver and seeded random selection
pub mod executor;
/// Support records and deletion propagation
pub mod propagation;
/// Minimum-entropy cell choice and inverse-weight tile choice
pub mod selection;
