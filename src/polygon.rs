//! A wrapper around [`nalgebra::Matrix2xX`] interpreting it as a closed polygon.

use nalgebra::{Matrix2xX, RealField, Vector2};

use crate::bounding_box::BoundingBox;
use crate::error::{KochError, KochResult};

/// Closed polygon whose vertices are stored as the matrix' columns.
///
/// The edge from the last vertex back to the first one is implicit.
/// A polygon always has at least one vertex and only finite coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T: RealField>(Matrix2xX<T>);

impl<T: RealField> Polygon<T> {
    /// Builds a polygon from its vertices in order.
    ///
    /// # Errors
    ///
    /// Returns [`KochError::EmptyPolygon`] for an empty slice and
    /// [`KochError::NonFiniteVertex`] if any coordinate is NaN or infinite.
    pub fn from_points(points: &[Vector2<T>]) -> KochResult<Self> {
        if points.is_empty() {
            return Err(KochError::EmptyPolygon);
        }
        Self::from_matrix(Matrix2xX::from_columns(points))
    }

    /// Builds a polygon from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::from_points`].
    pub fn from_tuples(coords: &[(T, T)]) -> KochResult<Self> {
        let points: Vec<_> = coords
            .iter()
            .map(|(x, y)| Vector2::new(x.clone(), y.clone()))
            .collect();
        Self::from_points(&points)
    }

    /// Wraps a matrix whose columns are the polygon's vertices.
    ///
    /// # Errors
    ///
    /// Same as [`Polygon::from_points`].
    pub fn from_matrix(matrix: Matrix2xX<T>) -> KochResult<Self> {
        if matrix.ncols() == 0 {
            return Err(KochError::EmptyPolygon);
        }
        for (index, column) in matrix.column_iter().enumerate() {
            if !column.iter().all(|c| c.is_finite()) {
                return Err(KochError::NonFiniteVertex { index });
            }
        }
        Ok(Polygon(matrix))
    }

    /// Wraps output of the subdivision, which keeps both invariants by construction.
    pub(crate) fn from_matrix_unchecked(matrix: Matrix2xX<T>) -> Self {
        debug_assert!(matrix.ncols() > 0);
        Polygon(matrix)
    }

    /// Number of vertices, which equals the number of edges.
    pub fn len(&self) -> usize {
        self.0.ncols()
    }

    /// Always `false`, polygons can't be empty.
    pub fn is_empty(&self) -> bool {
        self.0.ncols() == 0
    }

    /// Get the vertex at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn vertex(&self, index: usize) -> Vector2<T> {
        self.0.column(index).clone_owned()
    }

    /// Iterates over the vertices in order.
    pub fn vertices(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.0.column_iter().map(|column| column.clone_owned())
    }

    /// Iterates over the edges as `(start, end)` pairs, including the closing edge
    /// from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let n = self.len();
        (0..n).map(move |i| (self.vertex(i), self.vertex((i + 1) % n)))
    }

    /// Borrow the underlying matrix.
    pub fn as_matrix(&self) -> &Matrix2xX<T> {
        &self.0
    }

    /// Unwrap the underlying matrix.
    pub fn into_matrix(self) -> Matrix2xX<T> {
        self.0
    }

    /// Vertices as `(x, y)` pairs.
    pub fn to_tuples(&self) -> Vec<(T, T)> {
        self.vertices().map(|p| (p.x.clone(), p.y.clone())).collect()
    }

    /// Returns a copy scaled by `factor` around the origin.
    pub fn scaled(&self, factor: T) -> Self {
        Polygon(&self.0 * factor)
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: &Vector2<T>) -> Self {
        let mut matrix = self.0.clone();
        for mut column in matrix.column_iter_mut() {
            column += offset;
        }
        Polygon(matrix)
    }

    /// Constructs an axis aligned bounding box containing all vertices.
    pub fn bounding_box(&self) -> BoundingBox<T> {
        BoundingBox::from_points(self.vertices())
            .unwrap_or_else(|| BoundingBox::from(self.vertex(0)))
    }
}

impl<T: RealField> TryFrom<Matrix2xX<T>> for Polygon<T> {
    type Error = KochError;

    fn try_from(matrix: Matrix2xX<T>) -> KochResult<Self> {
        Polygon::from_matrix(matrix)
    }
}

impl<T: RealField> From<Polygon<T>> for Matrix2xX<T> {
    fn from(polygon: Polygon<T>) -> Self {
        polygon.0
    }
}
