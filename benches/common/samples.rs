use nkoch::Polygon;
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"({(random()-0.5)*i}, {(random()-0.5)*i}),")
/// ```
pub static POINTS: [(f64, f64); 10] = [
    ( 0.0,      0.0    ),
    (-0.29734,  0.44984),
    (-0.52560,  0.42885),
    ( 1.42777, -0.02652),
    ( 1.98032, -0.67824),
    ( 0.44863, -0.91328),
    (-2.51139, -0.79100),
    (-3.10479, -0.59318),
    (-1.16022, -2.95591),
    (-1.07946,  0.78888),
];

pub static POLYGONS: Lazy<Polygons> = Lazy::new(Polygons::new);
#[allow(non_snake_case)]
pub struct Polygons {
    pub TRIANGLE: Polygon<f64>,
    pub SQUARE: Polygon<f64>,
    pub RANDOM: Polygon<f64>,
}
impl Polygons {
    pub fn new() -> Polygons {
        Polygons {
            TRIANGLE: Polygon::from_tuples(&[(250.0, 50.0), (400.0, 350.0), (100.0, 350.0)])
                .expect("valid triangle"),
            SQUARE:   Polygon::from_tuples(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
                .expect("valid square"),
            RANDOM:   Polygon::from_tuples(&POINTS).expect("valid points"),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item=&Polygon<f64>> {
        [&self.TRIANGLE, &self.SQUARE, &self.RANDOM].into_iter()
    }
}
