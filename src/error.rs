//! Error types for polygon construction, subdivision and rasterisation.

use thiserror::Error;

/// Errors that can occur while building or subdividing a polygon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KochError {
    /// Polygon has no vertices.
    #[error("Polygon has no vertices")]
    EmptyPolygon,

    /// A vertex has a NaN or infinite coordinate.
    #[error("Vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },

    /// A signed depth below zero, or too large to count passes with, was supplied.
    #[error("Invalid depth: {0} (must be >= 0)")]
    InvalidDepth(i64),

    /// An edge has zero length and its normal is undefined.
    #[error("Edge {index} has zero length")]
    DegenerateEdge {
        /// Index of the edge's start vertex.
        index: usize,
    },

    /// Subdivision would exceed the vertex ceiling.
    #[error("Subdivision would exceed maximum polygon size ({current} -> {projected} vertices, max {max})")]
    PolygonTooLarge {
        /// Current vertex count.
        current: usize,
        /// Projected vertex count, saturated at `usize::MAX`.
        projected: usize,
        /// Maximum allowed vertex count.
        max: usize,
    },

    /// A vertex does not fit into integer device coordinates.
    #[error("Vertex {index} is out of range for device coordinates")]
    CoordinateOutOfRange {
        /// Index of the offending vertex.
        index: usize,
    },
}

/// Result type for polygon operations.
pub type KochResult<T> = std::result::Result<T, KochError>;
