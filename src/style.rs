use core::fmt::Write;

/// A record of static presentation attributes for one class of markup
/// element. Fields that are `None` are omitted from the serialized style.
///
/// The attribute values are fixed constants of the widget, not a styling
/// system; they must be reproduced exactly for visual parity.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Style {
    pub stroke_width: Option<u32>,
    pub stroke: Option<&'static str>,
    pub stroke_linecap: Option<&'static str>,
    pub stroke_dasharray: Option<&'static str>,
    pub fill: Option<&'static str>,
}

/// The curve itself: 2 units wide, stroked not filled, round caps.
const CURVE: Style = Style {
    stroke_width: Some(2),
    stroke: Some("dodgerblue"),
    stroke_linecap: Some("round"),
    stroke_dasharray: None,
    fill: Some("none"),
};

/// Dashed guide line from an endpoint to its control point.
const HANDLE: Style = Style {
    stroke_width: Some(1),
    stroke: Some("#ccc"),
    stroke_linecap: Some("round"),
    stroke_dasharray: Some("4,4"),
    fill: None,
};

/// Filled endpoint marker.
const POINT: Style = Style {
    stroke_width: None,
    stroke: None,
    stroke_linecap: None,
    stroke_dasharray: None,
    fill: Some("dodgerblue"),
};

/// Filled control point marker.
const CONTROL_POINT: Style = Style {
    stroke_width: None,
    stroke: None,
    stroke_linecap: None,
    stroke_dasharray: None,
    fill: Some("#ccc"),
};

impl Style {
    /// Resolve a style by name. The names mirror the widget's element
    /// classes; there is no way to register additional styles.
    pub fn lookup(name: &str) -> Option<&'static Style> {
        match name {
            "curve" => Some(&CURVE),
            "handle" => Some(&HANDLE),
            "point" => Some(&POINT),
            "control_point" => Some(&CONTROL_POINT),
            _ => None,
        }
    }

    /// Serialize to the value of an SVG `style` attribute,
    /// e.g. `stroke-width:2;stroke:dodgerblue;stroke-linecap:round;fill:none`.
    pub fn css(&self) -> String {
        let mut out = String::new();
        if let Some(width) = self.stroke_width {
            let _ = write!(out, "stroke-width:{};", width);
        }
        if let Some(stroke) = self.stroke {
            let _ = write!(out, "stroke:{};", stroke);
        }
        if let Some(linecap) = self.stroke_linecap {
            let _ = write!(out, "stroke-linecap:{};", linecap);
        }
        if let Some(dasharray) = self.stroke_dasharray {
            let _ = write!(out, "stroke-dasharray:{};", dasharray);
        }
        if let Some(fill) = self.fill {
            let _ = write!(out, "fill:{};", fill);
        }
        // drop the trailing separator
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_all_element_classes() {
        for name in ["curve", "handle", "point", "control_point"] {
            assert!(Style::lookup(name).is_some());
        }
        assert!(Style::lookup("arrowhead").is_none());
    }

    #[test]
    fn curve_css() {
        let css = Style::lookup("curve").unwrap().css();
        assert!(css == "stroke-width:2;stroke:dodgerblue;stroke-linecap:round;fill:none");
    }

    #[test]
    fn handle_css_is_dashed() {
        let css = Style::lookup("handle").unwrap().css();
        assert!(css == "stroke-width:1;stroke:#ccc;stroke-linecap:round;stroke-dasharray:4,4");
    }

    #[test]
    fn marker_styles_are_fill_only() {
        assert!(Style::lookup("point").unwrap().css() == "fill:dodgerblue");
        assert!(Style::lookup("control_point").unwrap().css() == "fill:#ccc");
    }
}
