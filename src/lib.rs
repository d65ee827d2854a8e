//! fletch - a leaf presentational widget that draws a curved arrow as SVG.
//!
//! Given two endpoints and a pair of shape parameters, the [`Arrow`] type
//! derives two Bézier control points with a simple horizontal-offset formula
//! and renders a static vector graphic: the curve itself, a filled marker on
//! each endpoint and (optionally) dashed guide lines out to the control
//! points. Rendering is a pure function of the input; there is no state,
//! no interactivity and no I/O.
//!
//! ```
//! use fletch::{Arrow, Point, Size};
//!
//! let arrow = Arrow::new(
//!     Size::new(200.0, 100.0),
//!     Point::new(20.0, 20.0),
//!     Point::new(180.0, 80.0),
//!     0.5,  // control point offset as a fraction of the endpoint distance
//!     10.0, // minimum offset so short arrows still curve
//!     true, // draw the control point handles
//! );
//! let markup = arrow.to_svg();
//! assert!(markup.starts_with("<svg"));
//! ```

mod arrow;
mod cubic_bezier;
mod point;
mod style;
mod svg;

pub use arrow::{Arrow, Size};
pub use cubic_bezier::CubicBezier;
pub use point::Point;
pub use style::Style;
pub use svg::render;

/// The recommended concrete scalar type. All public geometry is generic
/// over [`num_traits::Float`], so callers can substitute f32.
pub type NativeFloat = f64;
