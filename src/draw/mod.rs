//! Defines and implements the helper method [`DrawPolygon::add_polygon`] on various drawing contexts.
//!
//! The geometry in this crate never touches a canvas.
//! Drawing contexts receive the finished polygon, either in floating point or
//! already snapped to device pixels (see [`crate::raster`]).
use nalgebra::{Scalar, Vector2};
use std::fmt::Display;
use std::ops::Sub;

/// Draw closed polygons on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw polygons using svg paths
pub trait DrawPolygon {
    /// Add a closed polygon, given by its vertices in order, to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the polygon to be drawn instead of actually drawing it.
    fn add_polygon<T, I>(&mut self, vertices: I)
    where
        T: Scalar + Display + Sub<Output = T>,
        I: IntoIterator<Item = Vector2<T>>;
}

#[cfg(feature = "draw-svg")]
pub mod svg;
