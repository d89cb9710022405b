//! Axis aligned bounding boxes

use nalgebra::{RealField, Vector2};

/// Axis aligned rectangle spanned by its two extreme corners
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox<T: RealField> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,

    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Smallest box containing all points, `None` if there are none.
    pub fn from_points<I: IntoIterator<Item = Vector2<T>>>(points: I) -> Option<BoundingBox<T>> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bb = BoundingBox::from(first);
        for p in points {
            if bb.min.x > p.x {
                bb.min.x = p.x.clone();
            }
            if bb.min.y > p.y {
                bb.min.y = p.y.clone();
            }
            if bb.max.x < p.x {
                bb.max.x = p.x.clone();
            }
            if bb.max.y < p.y {
                bb.max.y = p.y.clone();
            }
        }
        Some(bb)
    }

    /// Is `point` inside the box or on its boundary?
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min.x <= point.x
            && self.min.y <= point.y
            && point.x <= self.max.x
            && point.y <= self.max.y
    }

    /// Width and height
    pub fn extent(&self) -> Vector2<T> {
        &self.max - &self.min
    }

    /// Returns a box grown by `margin` on every side.
    pub fn padded(&self, margin: T) -> BoundingBox<T> {
        let margin = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &margin,
            max: &self.max + &margin,
        }
    }
}

impl<T: RealField> From<Vector2<T>> for BoundingBox<T> {
    /// Box around a single point
    fn from(point: Vector2<T>) -> Self {
        BoundingBox {
            min: point.clone(),
            max: point,
        }
    }
}
