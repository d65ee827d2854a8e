use num_traits::float::Float;

use super::cubic_bezier::CubicBezier;
use super::point::Point;

/// Width and height of the drawing surface, in the same units as the
/// arrow's coordinates. Not validated; non-positive dimensions produce
/// non-positive surfaces.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Size<F> {
    pub x: F,
    pub y: F,
}

impl<F> Size<F> {
    pub fn new(x: F, y: F) -> Self {
        Size { x, y }
    }
}

/// A curved arrow between two endpoints, drawn as a single cubic Bezier
/// segment whose control points are derived from the endpoints.
///
/// Each control point is displaced purely horizontally from its endpoint,
/// at a distance proportional to the endpoint separation (longer arrows
/// bulge more) but never less than `min_offset` (short arrows still show
/// visible curvature). `cp1` sits to the right of `start` and `cp2` to the
/// left of `end`, regardless of which endpoint is further right, so the
/// curve reads as an "S" or "C" depending on the endpoints' relative
/// vertical position.
///
/// `offset_mult` and `min_offset` are assumed non-negative; a negative
/// value inverts the bulge direction and is outside this type's contract.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arrow<F> {
    pub size: Size<F>,
    pub start: Point<F>,
    pub end: Point<F>,
    pub offset_mult: F,
    pub min_offset: F,
    pub show_control_points: bool,
}

impl<F> Arrow<F>
where
    F: Float,
{
    pub fn new(
        size: Size<F>,
        start: Point<F>,
        end: Point<F>,
        offset_mult: F,
        min_offset: F,
        show_control_points: bool,
    ) -> Self {
        Arrow {
            size,
            start,
            end,
            offset_mult,
            min_offset,
            show_control_points,
        }
    }

    /// The horizontal pull applied to both control points:
    /// the endpoint distance scaled by `offset_mult`, floored at `min_offset`.
    pub fn offset_x(&self) -> F {
        (self.start.distance(self.end) * self.offset_mult).max(self.min_offset)
    }

    /// Control point positions for the curve, recomputed from the endpoints
    /// on every call.
    pub fn control_points(&self) -> (Point<F>, Point<F>) {
        let offset_x = self.offset_x();
        let cp1 = Point::new(self.start.x + offset_x, self.start.y);
        let cp2 = Point::new(self.end.x - offset_x, self.end.y);
        (cp1, cp2)
    }

    /// The cubic Bezier segment the arrow is drawn with.
    pub fn curve(&self) -> CubicBezier<F> {
        let (cp1, cp2) = self.control_points();
        CubicBezier::new(self.start, cp1, cp2, self.end)
    }

    /// Render the arrow to SVG markup. See [`crate::render`].
    pub fn to_svg(&self) -> String
    where
        F: core::fmt::Display,
    {
        super::svg::render(self)
    }
}
