//! Conversion of polygons to integer device coordinates.
//!
//! Subdivision works in floating point throughout, rounding after every pass would
//! compound the error. Only the final polygon handed to a renderer is snapped to pixels.

use nalgebra::{RealField, Vector2};
use num::ToPrimitive;

use crate::error::{KochError, KochResult};
use crate::polygon::Polygon;

/// How floating point coordinates are mapped to pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PixelRounding {
    /// Drop the fractional part, i.e. round towards zero.
    #[default]
    Truncate,

    /// Round to the nearest pixel, halfway cases away from zero.
    Round,
}

/// Polygon in integer device coordinates, ready to be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePolygon(pub Vec<Vector2<i32>>);

impl DevicePolygon {
    /// Snap every vertex of `polygon` to a pixel.
    ///
    /// # Errors
    ///
    /// Returns [`KochError::CoordinateOutOfRange`] for the first vertex which doesn't fit an `i32`.
    pub fn from_polygon<T>(polygon: &Polygon<T>, rounding: PixelRounding) -> KochResult<Self>
    where
        T: RealField + ToPrimitive,
    {
        polygon
            .vertices()
            .enumerate()
            .map(|(index, p)| {
                let x = snap(p.x.clone(), rounding);
                let y = snap(p.y.clone(), rounding);
                match (x, y) {
                    (Some(x), Some(y)) => Ok(Vector2::new(x, y)),
                    _ => Err(KochError::CoordinateOutOfRange { index }),
                }
            })
            .collect::<KochResult<Vec<_>>>()
            .map(DevicePolygon)
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Is there no vertex at all?
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the vertices in order.
    pub fn vertices(&self) -> impl Iterator<Item = Vector2<i32>> + '_ {
        self.0.iter().copied()
    }

    /// Vertices split into separate x and y arrays, the layout most 2d canvas APIs expect.
    pub fn to_arrays(&self) -> (Vec<i32>, Vec<i32>) {
        self.0.iter().map(|p| (p.x, p.y)).unzip()
    }
}

fn snap<T: RealField + ToPrimitive>(coord: T, rounding: PixelRounding) -> Option<i32> {
    let coord = match rounding {
        PixelRounding::Truncate => coord.trunc(),
        PixelRounding::Round => coord.round(),
    };
    coord.to_i32()
}
