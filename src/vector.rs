//! 2D vector operations needed by the Koch construction.
//!
//! Points and displacements share one representation: [`nalgebra::Vector2`].
//! Addition, subtraction and scaling are nalgebra's operators (`+`, `-`, `* s`);
//! this module adds the remaining primitives as the [`Vector2D`] trait.

use nalgebra::{RealField, Vector2};

/// A polygon vertex.
pub type Point<T> = Vector2<T>;

/// Geometric helpers on top of [`nalgebra::Vector2`].
pub trait Vector2D<T>: Sized {
    /// Euclidean norm `sqrt(x² + y²)`, without overflowing for large finite coordinates.
    fn length(&self) -> T;

    /// Scales `self` to unit length.
    ///
    /// Returns `None` for the zero vector and for vectors whose length is not finite,
    /// since their direction is undefined.
    fn normalized(&self) -> Option<Self>;

    /// Returns `(y, -x)`, i.e. `self` rotated by a quarter turn.
    ///
    /// In device coordinates (y growing downwards) this is the left hand side
    /// of the direction `self` points to.
    fn perpendicular(&self) -> Self;

    /// Returns `(1 - t) * self + t * other`.
    ///
    /// `t` is not clamped, values outside of `[0, 1]` extrapolate.
    fn interpolate(&self, other: &Self, t: T) -> Self;
}

impl<T: RealField> Vector2D<T> for Vector2<T> {
    fn length(&self) -> T {
        self.x.clone().hypot(self.y.clone())
    }

    fn normalized(&self) -> Option<Self> {
        let length = self.length();
        if length > T::zero() && length.is_finite() {
            Some(self / length)
        } else {
            None
        }
    }

    fn perpendicular(&self) -> Self {
        Vector2::new(self.y.clone(), T::zero() - self.x.clone())
    }

    fn interpolate(&self, other: &Self, t: T) -> Self {
        let t_inv = T::one() - t.clone();
        self * t_inv + other * t
    }
}
