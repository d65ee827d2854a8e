use core::fmt::{Display, Write};

use num_traits::float::Float;

use super::arrow::Arrow;
use super::point::Point;
use super::style::Style;

/// Render an [`Arrow`] to SVG markup.
///
/// The markup is a complete `<svg>` element of the arrow's size with a
/// 1px solid border; its view box spans `0,0` to `size.x,size.y` and is
/// scaled uniformly to the surface with the remainder centered on both
/// axes (`preserveAspectRatio="xMidYMid meet"`). Children are emitted
/// back to front: the curve, the two endpoint markers, and then (only
/// when `show_control_points` is set) the dashed handle lines and the
/// control point markers.
///
/// Pure and deterministic; no inputs are rejected. NaN or negative
/// values pass straight through into the attribute text.
pub fn render<F>(arrow: &Arrow<F>) -> String
where
    F: Float + Display,
{
    // the lookup names are fixed element classes, so resolution can't fail
    let curve = Style::lookup("curve").unwrap();
    let handle = Style::lookup("handle").unwrap();
    let point = Style::lookup("point").unwrap();
    let control_point = Style::lookup("control_point").unwrap();

    let (cp1, cp2) = arrow.control_points();
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" \
         width=\"{x}\" height=\"{y}\" viewBox=\"0 0 {x} {y}\" \
         preserveAspectRatio=\"xMidYMid meet\" style=\"border:1px solid\">",
        x = arrow.size.x,
        y = arrow.size.y,
    );
    let _ = write!(
        out,
        "\n<path style=\"{}\" d=\"M{},{} C{},{} {},{} {},{}\"/>",
        curve.css(),
        arrow.start.x,
        arrow.start.y,
        cp1.x,
        cp1.y,
        cp2.x,
        cp2.y,
        arrow.end.x,
        arrow.end.y,
    );
    write_circle(&mut out, point, arrow.start, 6);
    write_circle(&mut out, point, arrow.end, 6);

    if arrow.show_control_points {
        write_line(&mut out, handle, arrow.start, cp1);
        write_line(&mut out, handle, arrow.end, cp2);
        write_circle(&mut out, control_point, cp1, 3);
        write_circle(&mut out, control_point, cp2, 3);
    }

    out.push_str("\n</svg>");
    out
}

fn write_circle<F: Display>(out: &mut String, style: &Style, center: Point<F>, radius: u32) {
    let _ = write!(
        out,
        "\n<circle style=\"{}\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
        style.css(),
        center.x,
        center.y,
        radius,
    );
}

fn write_line<F: Display>(out: &mut String, style: &Style, from: Point<F>, to: Point<F>) {
    let _ = write!(
        out,
        "\n<line style=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
        style.css(),
        from.x,
        from.y,
        to.x,
        to.y,
    );
}

#[cfg(test)]
mod tests {
    use super::super::arrow::Size;
    use super::*;

    fn sample(show_control_points: bool) -> Arrow<f64> {
        Arrow::new(
            Size::new(200.0, 100.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            0.5,
            10.0,
            show_control_points,
        )
    }

    #[test]
    fn surface_matches_requested_size() {
        let markup = sample(false).to_svg();
        assert!(markup.contains("width=\"200\" height=\"100\""));
        assert!(markup.contains("viewBox=\"0 0 200 100\""));
        assert!(markup.contains("preserveAspectRatio=\"xMidYMid meet\""));
        assert!(markup.contains("style=\"border:1px solid\""));
    }

    #[test]
    fn horizontal_arrow_path() {
        // offset_x = max(100 * 0.5, 10) = 50, both control points at the midpoint
        let markup = sample(false).to_svg();
        assert!(markup.contains("d=\"M0,0 C50,0 50,0 100,0\""));
    }

    #[test]
    fn endpoint_markers() {
        let markup = sample(false).to_svg();
        assert!(markup.contains("<circle style=\"fill:dodgerblue\" cx=\"0\" cy=\"0\" r=\"6\"/>"));
        assert!(markup.contains("<circle style=\"fill:dodgerblue\" cx=\"100\" cy=\"0\" r=\"6\"/>"));
    }

    #[test]
    fn back_to_front_order() {
        let markup = sample(true).to_svg();
        let path = markup.find("<path").unwrap();
        let first_marker = markup.find("<circle").unwrap();
        let first_handle = markup.find("<line").unwrap();
        let first_control_marker = markup.find("r=\"3\"").unwrap();
        assert!(path < first_marker);
        assert!(first_marker < first_handle);
        assert!(first_handle < first_control_marker);
    }

    #[test]
    fn hidden_control_points_omit_handle_markup() {
        let markup = sample(false).to_svg();
        assert!(!markup.contains("<line"));
        assert!(!markup.contains("stroke-dasharray"));
        assert!(!markup.contains("fill:#ccc"));
        assert!(!markup.contains("r=\"3\""));
    }

    #[test]
    fn handle_flag_leaves_curve_and_markers_unchanged() {
        let hidden = sample(false).to_svg();
        let shown = sample(true).to_svg();
        // the hidden rendering is a prefix of the shown one, up to the close tag
        let base = hidden.strip_suffix("\n</svg>").unwrap();
        assert!(shown.starts_with(base));
        assert!(shown.len() > hidden.len());
    }

    #[test]
    fn shown_control_points_render_handles_and_markers() {
        let markup = sample(true).to_svg();
        // guide lines from each endpoint to its control point
        assert!(markup.contains(
            "<line style=\"stroke-width:1;stroke:#ccc;stroke-linecap:round;stroke-dasharray:4,4\" \
             x1=\"0\" y1=\"0\" x2=\"50\" y2=\"0\"/>"
        ));
        assert!(markup.contains("x1=\"100\" y1=\"0\" x2=\"50\" y2=\"0\""));
        // control point markers, radius 3
        assert!(markup.contains("<circle style=\"fill:#ccc\" cx=\"50\" cy=\"0\" r=\"3\"/>"));
    }

    #[test]
    fn degenerate_arrow_renders_floored_control_points() {
        let arrow = Arrow::new(
            Size::new(100.0, 100.0),
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            1.0,
            5.0,
            true,
        );
        let markup = arrow.to_svg();
        assert!(markup.contains("d=\"M0,0 C5,0 -5,0 0,0\""));
        assert!(markup.contains("cx=\"5\" cy=\"0\" r=\"3\""));
        assert!(markup.contains("cx=\"-5\" cy=\"0\" r=\"3\""));
    }

    #[test]
    fn render_matches_to_svg() {
        let arrow = sample(true);
        assert!(render(&arrow) == arrow.to_svg());
    }
}
