//! Border descriptors and the capabilities tiles rely on
//!
//! An edge only has to answer whether it fits against the opposing edge of a
//! neighbouring tile. Each grid is instantiated with a single edge type, so
//! compatibility is never asked across different kinds of edge.

use std::fmt;

/// Index of one side of a cell or tile, in `[0, sides)`
pub type EdgeId = usize;

/// Comparable border descriptor
pub trait Edge: Clone + fmt::Debug {
    /// Whether this edge can sit against `other` across a shared seam
    fn compatible(&self, other: &Self) -> bool;
}

/// Reflection capability shared by edges and image handles
///
/// The axis passes through the midpoint of side `axis` and of its opposite.
pub trait Mirror: Sized {
    /// Mirror image of this value about the given axis
    #[must_use]
    fn mirrored_across(&self, axis: EdgeId, sides: usize) -> Self;
}

/// Edge described by a short border pattern read clockwise around the tile
///
/// Two tiles meeting at a seam read the same border in opposite directions,
/// so patterns are compatible when one is the reversal of the other.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ReflexiveStringEdge {
    pattern: String,
}

impl ReflexiveStringEdge {
    /// Create an edge from its clockwise pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The clockwise pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Build a list of edges from patterns, one per side
    pub fn from_patterns(patterns: &[&str]) -> Vec<Self> {
        patterns.iter().map(|&p| Self::new(p)).collect()
    }
}

impl Edge for ReflexiveStringEdge {
    fn compatible(&self, other: &Self) -> bool {
        self.pattern.chars().eq(other.pattern.chars().rev())
    }
}

impl Mirror for ReflexiveStringEdge {
    // Reflection reverses the reading direction of every border
    fn mirrored_across(&self, _axis: EdgeId, _sides: usize) -> Self {
        Self {
            pattern: self.pattern.chars().rev().collect(),
        }
    }
}

impl fmt::Display for ReflexiveStringEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}
