use crate::config::RoutePlotStyle;

/// pixel dimensions of a filled arrow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowStyle {
    /// fraction of the arrow's length removed at each end
    pub shrink: f64,
    pub shaft_width: f64,
    pub head_length: f64,
    pub head_width: f64,
}

impl From<&RoutePlotStyle> for ArrowStyle {
    fn from(style: &RoutePlotStyle) -> Self {
        ArrowStyle {
            shrink: style.arrow_shrink,
            shaft_width: style.arrow_width,
            head_length: style.arrow_head_length,
            head_width: style.arrow_head_width,
        }
    }
}

/// outline of a filled arrow pointing from `start` to `end`, both in pixels.
///
/// the arrow is shortened by `shrink` of its length at each end before the
/// head is placed at the shortened tip. a head longer than the remaining arrow
/// is scaled down to fit. returns None when the endpoints coincide or nothing
/// remains after shrinking.
pub fn arrow_polygon(
    start: (f64, f64),
    end: (f64, f64),
    style: &ArrowStyle,
) -> Option<Vec<(f64, f64)>> {
    let (dx, dy) = (end.0 - start.0, end.1 - start.1);
    let length = dx.hypot(dy);
    if !(length > f64::EPSILON) {
        return None;
    }
    let (ux, uy) = (dx / length, dy / length);
    let (nx, ny) = (-uy, ux);

    let trim = length * style.shrink.max(0.0);
    let shown = length - 2.0 * trim;
    if !(shown > f64::EPSILON) {
        return None;
    }
    let tail = (start.0 + ux * trim, start.1 + uy * trim);
    let tip = (end.0 - ux * trim, end.1 - uy * trim);

    let head_length = style.head_length.min(shown);
    let scale = if style.head_length > 0.0 {
        head_length / style.head_length
    } else {
        1.0
    };
    let half_head = style.head_width * scale / 2.0;
    let half_shaft = (style.shaft_width / 2.0).min(half_head);
    let neck = (tip.0 - ux * head_length, tip.1 - uy * head_length);

    let offset = |p: (f64, f64), d: f64| (p.0 + nx * d, p.1 + ny * d);
    Some(vec![
        offset(tail, half_shaft),
        offset(neck, half_shaft),
        offset(neck, half_head),
        tip,
        offset(neck, -half_head),
        offset(neck, -half_shaft),
        offset(tail, -half_shaft),
    ])
}
