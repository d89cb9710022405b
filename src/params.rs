//! Subdivision parameters.

use crate::error::{KochError, KochResult};

/// Largest depth the command line accepts.
pub const MAX_DEPTH: u32 = 5;

/// Depth the command line falls back to.
pub const DEFAULT_DEPTH: u32 = 4;

/// What to do with an edge whose start and end coincide.
///
/// The bump's direction is undefined for such an edge, its height however is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegenerateEdgePolicy {
    /// Use the zero vector as normal, so all four points of the edge equal its start.
    #[default]
    Collapse,

    /// Fail the whole subdivision with [`KochError::DegenerateEdge`].
    Reject,
}

/// Parameters for Koch subdivision.
#[derive(Debug, Clone)]
pub struct KochParams {
    /// Number of subdivision passes.
    pub depth: u32,

    /// Maximum vertices allowed in the result.
    pub max_vertices: usize,

    /// Handling of zero-length edges.
    pub degenerate_edges: DegenerateEdgePolicy,
}

impl Default for KochParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            max_vertices: 1 << 22,
            degenerate_edges: DegenerateEdgePolicy::default(),
        }
    }
}

impl KochParams {
    /// Create new parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of passes.
    #[must_use]
    pub const fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set maximum vertices allowed.
    #[must_use]
    pub const fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices;
        self
    }

    /// Set the zero-length edge handling.
    #[must_use]
    pub const fn with_degenerate_edges(mut self, policy: DegenerateEdgePolicy) -> Self {
        self.degenerate_edges = policy;
        self
    }

    /// Vertex count after `depth` passes, `None` on overflow.
    ///
    /// Each pass multiplies the vertex count by 4.
    #[must_use]
    pub fn expected_vertices(&self, current_vertices: usize) -> Option<usize> {
        4usize
            .checked_pow(self.depth)
            .and_then(|factor| current_vertices.checked_mul(factor))
    }
}

/// Converts a signed depth into a pass count.
///
/// # Errors
///
/// Returns [`KochError::InvalidDepth`] for `depth < 0` and for depths beyond `u32::MAX`.
pub fn checked_depth(depth: i64) -> KochResult<u32> {
    u32::try_from(depth).map_err(|_| KochError::InvalidDepth(depth))
}
