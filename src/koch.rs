//! Koch subdivision of closed polygons.
//!
//! Every pass replaces each edge `A -> E` by four edges: two flat thirds and an
//! equilateral bump over the middle third, pointing to the edge's
//! [perpendicular](crate::vector::Vector2D::perpendicular) side.
//! The start vertex is kept, so a polygon with `N` vertices grows to `4N`.

use log::{debug, trace};
use nalgebra::{Matrix2xX, RealField, Vector2};

use crate::error::{KochError, KochResult};
use crate::params::{DegenerateEdgePolicy, KochParams};
use crate::polygon::Polygon;
use crate::result::SubdivisionResult;
use crate::vector::Vector2D;

/// Replaces every edge of `polygon` by the four edges of a Koch bump.
///
/// Zero-length edges collapse onto their start vertex,
/// see [`DegenerateEdgePolicy::Collapse`].
///
/// ```
/// use nkoch::{subdivide_once, Polygon};
///
/// let triangle = Polygon::from_tuples(&[(250.0, 50.0), (400.0, 350.0), (100.0, 350.0)])?;
/// let koched = subdivide_once(&triangle);
/// assert_eq!(koched.len(), 12);
/// assert_eq!(koched.vertex(4), triangle.vertex(1));
/// # Ok::<(), nkoch::KochError>(())
/// ```
pub fn subdivide_once<T: RealField>(polygon: &Polygon<T>) -> Polygon<T> {
    let mut matrix = Matrix2xX::zeros(4 * polygon.len());
    for (i, (a, e)) in polygon.edges().enumerate() {
        let bump = koch_edge(&a, &e).unwrap_or_else(|| {
            trace!("Collapsing zero-length edge {}", i);
            [a.clone(), a.clone(), a.clone(), a.clone()]
        });
        for (j, point) in bump.iter().enumerate() {
            matrix.set_column(4 * i + j, point);
        }
    }
    Polygon::from_matrix_unchecked(matrix)
}

/// Same as [`subdivide_once`] with an explicit policy for zero-length edges.
///
/// # Errors
///
/// Returns [`KochError::DegenerateEdge`] for the first zero-length edge
/// if `policy` is [`DegenerateEdgePolicy::Reject`].
pub fn subdivide_once_with<T: RealField>(
    polygon: &Polygon<T>,
    policy: DegenerateEdgePolicy,
) -> KochResult<Polygon<T>> {
    if policy == DegenerateEdgePolicy::Reject {
        if let Some(index) = polygon
            .edges()
            .position(|(a, e)| (e - a).normalized().is_none())
        {
            return Err(KochError::DegenerateEdge { index });
        }
    }
    Ok(subdivide_once(polygon))
}

/// Applies [`subdivide_once`] `depth` times.
///
/// `depth = 0` returns a copy of `polygon`.
///
/// The result is capped at the default `max_vertices` of [`KochParams`] (`1 << 22`)
/// to guard the allocation, which a triangle exceeds from depth 11 on.
/// Use [`subdivide_with`] to raise the ceiling.
///
/// # Errors
///
/// Returns [`KochError::PolygonTooLarge`] if the result would exceed that ceiling.
pub fn subdivide<T: RealField>(polygon: &Polygon<T>, depth: u32) -> KochResult<Polygon<T>> {
    let params = KochParams::new().with_depth(depth);
    subdivide_with(polygon, &params).map(SubdivisionResult::into_polygon)
}

/// Subdivide a polygon using the specified parameters.
///
/// # Errors
///
/// Returns an error if:
/// - the result would have more than `params.max_vertices` vertices
/// - an edge has zero length and `params.degenerate_edges` is [`DegenerateEdgePolicy::Reject`]
pub fn subdivide_with<T: RealField>(
    polygon: &Polygon<T>,
    params: &KochParams,
) -> KochResult<SubdivisionResult<T>> {
    let original_vertices = polygon.len();

    // Check projected size
    let projected = params.expected_vertices(original_vertices);
    if projected.map_or(true, |projected| projected > params.max_vertices) {
        return Err(KochError::PolygonTooLarge {
            current: original_vertices,
            projected: projected.unwrap_or(usize::MAX),
            max: params.max_vertices,
        });
    }

    debug!(
        "Subdividing polygon: {} vertices, depth {}, {:?} degenerate edges",
        original_vertices, params.depth, params.degenerate_edges
    );

    let mut current = polygon.clone();
    for pass in 0..params.depth {
        current = subdivide_once_with(&current, params.degenerate_edges)?;
        debug!("Pass {}: {} vertices", pass + 1, current.len());
    }

    Ok(SubdivisionResult {
        final_vertices: current.len(),
        polygon: current,
        original_vertices,
        depth: params.depth,
    })
}

/// Computes the points `[A, B, C, D]` replacing the edge from `a` to `e`.
///
/// Returns `None` if the edge has no direction.
fn koch_edge<T: RealField>(a: &Vector2<T>, e: &Vector2<T>) -> Option<[Vector2<T>; 4]> {
    let one = T::one();
    let two = one.clone() + one.clone();
    let three = two.clone() + one.clone();
    let twelve = three.clone() * two.clone() * two.clone();

    let edge = e - a;
    let normal = edge.perpendicular().normalized()?;

    let b = e.interpolate(a, two.clone() / three.clone());
    let middle = a.interpolate(e, one.clone() / two);
    let length = edge.length();
    let height = length / twelve.sqrt();
    let c = middle + normal * height;
    let d = e.interpolate(a, one / three);

    Some([a.clone(), b, c, d])
}
