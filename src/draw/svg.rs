//! Draw a polygon in a svg

use crate::bounding_box::BoundingBox;
use crate::draw::DrawPolygon;
use nalgebra::{Scalar, Vector2};
use std::fmt::{self, Display, Formatter, Write};
use std::marker::PhantomData;
use std::ops::Sub;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
/// Every polygon starts with an absolute MoveTo in both cases.
pub trait CoordRepr {
    /// Character to use for the LineTo command
    const L: &'static str;

    /// Character to use for the ClosePath command
    const Z: &'static str;

    /// Are LineTo coordinates offsets to the previous point?
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const L: &'static str = "L";
    const Z: &'static str = "Z";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const L: &'static str = "l";
    const Z: &'static str = "z";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawPolygon`] on it.
/// The [`DrawPolygon::add_polygon`] writes the polygon to the string
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// # use nalgebra::Vector2;
/// use nkoch::draw::DrawPolygon;
/// use nkoch::draw::svg::SVGAbsolutePath;
///
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_polygon([
///     Vector2::new(0, 1),
///     Vector2::new(2, 3),
///     Vector2::new(4, 1),
/// ]);
/// assert_eq!(d, "M 0,1 L 2,3 L 4,1 Z");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a polygon to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a polygon to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> DrawPolygon for SVGPath<'s, R> {
    fn add_polygon<T, I>(&mut self, vertices: I)
    where
        T: Scalar + Display + Sub<Output = T>,
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut previous: Option<Vector2<T>> = None;
        for p in vertices {
            let separator = if self.0.is_empty() { "" } else { " " };
            let _ = match &previous {
                None => write!(self.0, "{}M {},{}", separator, p.x, p.y),
                Some(q) if R::RELATIVE => write!(
                    self.0,
                    "{}{} {},{}",
                    separator,
                    R::L,
                    p.x.clone() - q.x.clone(),
                    p.y.clone() - q.y.clone()
                ),
                Some(_) => write!(self.0, "{}{} {},{}", separator, R::L, p.x, p.y),
            };
            previous = Some(p);
        }
        if previous.is_some() {
            let _ = write!(self.0, " {}", R::Z);
        }
    }
}

/// Minimal svg document holding polygon paths.
pub struct SvgDocument {
    /// `min-x min-y width height` of the viewBox attribute
    pub view_box: (f64, f64, f64, f64),

    /// Optional `<title>` element
    pub title: Option<String>,

    /// Paths in drawing order
    pub paths: Vec<Path>,
}

impl SvgDocument {
    /// Empty document showing the rectangle `(0, 0)` to `(width, height)`.
    pub fn new(width: f64, height: f64) -> Self {
        SvgDocument {
            view_box: (0.0, 0.0, width, height),
            title: None,
            paths: Vec::new(),
        }
    }

    /// Empty document whose view box is `bb`.
    pub fn fitting(bb: &BoundingBox<f64>) -> Self {
        let size = bb.extent();
        SvgDocument {
            view_box: (bb.min.x, bb.min.y, size.x, size.y),
            title: None,
            paths: Vec::new(),
        }
    }

    /// Set the document's title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Append a polygon as a new path with default styling.
    pub fn add_polygon<T, I>(&mut self, vertices: I) -> &mut Path
    where
        T: Scalar + Display + Sub<Output = T>,
        I: IntoIterator<Item = Vector2<T>>,
    {
        let mut path = Path::default();
        SVGAbsolutePath::from(&mut path.d).add_polygon(vertices);
        self.paths.push(path);
        let last = self.paths.len() - 1;
        &mut self.paths[last]
    }
}

impl Display for SvgDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        if let Some(title) = &self.title {
            writeln!(f, "<title>{}</title>", escape(title))?;
        }
        for path in self.paths.iter() {
            path.fmt(f)?;
        }
        writeln!(f, "</svg>")
    }
}

/// A `<path>` element
pub struct Path {
    /// Stroke color
    pub stroke_color: &'static str,

    /// Fill color
    pub fill_color: &'static str,

    /// Stroke width
    pub width: f64,

    /// Path data, see [`SVGPath`]
    pub d: String,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            stroke_color: "black",
            fill_color: "none",
            width: 1.0,
            d: String::new(),
        }
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "<path stroke=\"{}\" fill=\"{}\" stroke-width=\"{}\" d=\"{}\"/>",
            self.stroke_color, self.fill_color, self.width, self.d
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
