//! Error types and context management for grid and generation operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all algorithm operations
///
/// Contradictions are not errors: an empty domain is a normal terminal state
/// reported through the grid itself. Everything here is misuse or I/O.
#[derive(Debug)]
pub enum AlgorithmError {
    /// Raw domains were edited, or support records built, after sealing
    AlreadySealed {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Support records were required before the grid was sealed
    NotSealed {
        /// Operation that was attempted
        operation: &'static str,
    },

    /// Edge count of a tile disagrees with the side count in use
    SideMismatch {
        /// Side count expected by the caller or the grid
        expected: usize,
        /// Side count actually found
        found: usize,
    },

    /// Edge index outside `[0, sides)`
    InvalidEdge {
        /// The invalid edge index
        edge: usize,
        /// Number of sides of the tile
        sides: usize,
    },

    /// Cell coordinates outside the grid
    InvalidCell {
        /// Rendered cell identifier
        cell: String,
    },

    /// Tile index exceeds available tile set
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the set
        max_tiles: usize,
    },

    /// Algorithm parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A recorded image transform cannot be applied to raster data
    Transform {
        /// Description of the transform
        reason: String,
    },

    /// Failed to save a rendered image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySealed { operation } => {
                write!(f, "Cannot {operation}: support records already constructed")
            }
            Self::NotSealed { operation } => {
                write!(f, "Cannot {operation}: support records not yet constructed")
            }
            Self::SideMismatch { expected, found } => {
                write!(f, "Expected {expected} sides but found {found}")
            }
            Self::InvalidEdge { edge, sides } => {
                write!(f, "Edge {edge} is out of bounds for a {sides}-sided tile")
            }
            Self::InvalidCell { cell } => {
                write!(f, "Cell {cell} is outside the grid")
            }
            Self::InvalidTileIndex { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (tiles: {max_tiles})")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Transform { reason } => {
                write!(f, "Cannot apply image transform: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Cell where the error occurred, already rendered
    pub cell: Option<String>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with grid state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<AlgorithmError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                AlgorithmError::InvalidCell { cell } => {
                    if let Some(rendered) = context.cell {
                        *cell = rendered;
                    }
                }
                AlgorithmError::AlreadySealed { operation }
                | AlgorithmError::NotSealed { operation } => {
                    if let Some(op) = context.operation {
                        *operation = op;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
            ..Default::default()
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out of bounds cell error from any debuggable cell identifier
pub fn invalid_cell(cell: &impl fmt::Debug) -> AlgorithmError {
    AlgorithmError::InvalidCell {
        cell: format!("{cell:?}"),
    }
}
