//! Result type of a full subdivision run.

// Vertex counts don't overflow f64's mantissa in practice
#![allow(clippy::cast_precision_loss)]

use nalgebra::RealField;

use crate::polygon::Polygon;

/// Result of [`subdivide_with`](crate::koch::subdivide_with).
#[derive(Debug, Clone)]
pub struct SubdivisionResult<T: RealField> {
    /// The subdivided polygon.
    pub polygon: Polygon<T>,

    /// Number of vertices in the input polygon.
    pub original_vertices: usize,

    /// Number of vertices in the subdivided polygon.
    pub final_vertices: usize,

    /// Number of passes performed.
    pub depth: u32,
}

impl<T: RealField> SubdivisionResult<T> {
    /// Get the vertex multiplication factor.
    #[must_use]
    pub fn vertex_ratio(&self) -> f64 {
        self.final_vertices as f64 / self.original_vertices as f64
    }

    /// Check if any subdivision occurred.
    #[must_use]
    pub const fn was_subdivided(&self) -> bool {
        self.depth > 0
    }

    /// Unwrap the subdivided polygon.
    #[must_use]
    pub fn into_polygon(self) -> Polygon<T> {
        self.polygon
    }
}

impl<T: RealField> std::fmt::Display for SubdivisionResult<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Koch subdivision: {} -> {} vertices ({:.0}x), depth {}",
            self.original_vertices,
            self.final_vertices,
            self.vertex_ratio(),
            self.depth
        )
    }
}
