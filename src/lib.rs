#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
#[cfg(feature = "draw-svg")]
pub mod draw;
pub mod error;
pub mod koch;
pub mod params;
pub mod polygon;
pub mod raster;
pub mod result;
pub mod vector;

pub use crate::error::{KochError, KochResult};
pub use crate::koch::{subdivide, subdivide_once, subdivide_once_with, subdivide_with};
pub use crate::params::{DegenerateEdgePolicy, KochParams};
pub use crate::polygon::Polygon;
pub use crate::result::SubdivisionResult;
pub use crate::vector::{Point, Vector2D};

#[cfg(test)]
mod tests {
    use crate::koch::{subdivide, subdivide_once};
    use crate::polygon::Polygon;
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    fn triangle() -> Polygon<f64> {
        Polygon::from_tuples(&[(250.0, 50.0), (400.0, 350.0), (100.0, 350.0)]).unwrap()
    }

    fn shapes() -> Vec<Polygon<f64>> {
        vec![
            Polygon::from_tuples(&[(7.0, -3.0)]).unwrap(),
            Polygon::from_tuples(&[(0.0, 0.0), (3.0, 0.0)]).unwrap(),
            triangle(),
            Polygon::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap(),
            Polygon::from_tuples(&[
                (0.0, 0.0),
                (-0.29734, 0.44984),
                (-0.52560, 0.42885),
                (1.42777, -0.02652),
                (1.98032, -0.67824),
            ])
            .unwrap(),
        ]
    }

    #[test]
    fn triangle_scenario() {
        assert_eq!(subdivide(&triangle(), 1).unwrap().len(), 12);
        assert_eq!(subdivide(&triangle(), 4).unwrap().len(), 768);
    }

    #[test]
    fn vertex_count_growth() {
        for polygon in shapes() {
            for depth in 0..5 {
                let result = subdivide(&polygon, depth).unwrap();
                assert_eq!(result.len(), polygon.len() * 4usize.pow(depth));
            }
        }
    }

    #[test]
    fn identity_at_depth_zero() {
        for polygon in shapes() {
            assert_eq!(subdivide(&polygon, 0).unwrap(), polygon);
        }
    }

    #[test]
    fn composition() {
        for polygon in shapes() {
            for (d1, d2) in [(0, 2), (1, 1), (2, 1), (1, 2)] {
                let direct = subdivide(&polygon, d1 + d2).unwrap();
                let staged = subdivide(&subdivide(&polygon, d1).unwrap(), d2).unwrap();
                assert_eq!(direct, staged);
            }
        }
    }

    #[test]
    fn vertex_preservation() {
        for polygon in shapes() {
            let koched = subdivide_once(&polygon);
            for (i, vertex) in polygon.vertices().enumerate() {
                assert_eq!(koched.vertex(4 * i), vertex);
            }
        }
    }

    #[test]
    fn bump_direction() {
        let koched = subdivide_once(&Polygon::from_tuples(&[(0.0, 0.0), (3.0, 0.0)]).unwrap());
        let height = (9.0f64 / 12.0).sqrt();
        assert_relative_eq!(height, 0.8660254037844386, epsilon = 1e-12);

        assert_eq!(koched.vertex(0), Vector2::new(0.0, 0.0));
        assert_relative_eq!(koched.vertex(1), Vector2::new(1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(koched.vertex(2), Vector2::new(1.5, -height), epsilon = 1e-12);
        assert_relative_eq!(koched.vertex(3), Vector2::new(2.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn bumps_point_outwards() {
        // The triangle is clockwise in device coordinates, every apex leaves its bounding box
        let koched = subdivide_once(&triangle());
        let bb = triangle().bounding_box();
        let apexes: Vec<_> = (0..3).map(|i| koched.vertex(4 * i + 2)).collect();
        assert!(apexes.iter().all(|apex| !bb.contains(apex)));
    }

    #[test]
    fn scale_invariance() {
        for polygon in shapes() {
            for k in [0.5, 3.0, -2.0] {
                let scaled_first = subdivide(&polygon.scaled(k), 3).unwrap();
                let scaled_after = subdivide(&polygon, 3).unwrap().scaled(k);
                assert_eq!(scaled_first.len(), scaled_after.len());
                for (p, q) in scaled_first.vertices().zip(scaled_after.vertices()) {
                    assert_relative_eq!(p, q, epsilon = 1e-9, max_relative = 1e-9);
                }
            }
        }
    }

    #[test]
    fn generic_over_f32() {
        let triangle =
            Polygon::<f32>::from_tuples(&[(250.0, 50.0), (400.0, 350.0), (100.0, 350.0)]).unwrap();
        let koched = subdivide(&triangle, 2).unwrap();
        assert_eq!(koched.len(), 48);
        assert_eq!(koched.vertex(16), triangle.vertex(1));
    }
}
