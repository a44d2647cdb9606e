use super::PivotGrid;

/// half-width given to an axis with a single coordinate so it still spans an area
const SINGLE_VALUE_HALF_WIDTH: f64 = 0.5;

/// plotted extent of a sorted axis. a single coordinate `v` spans `v ± 0.5`.
pub fn axis_extent(coords: &[f64]) -> Option<(f64, f64)> {
    match coords {
        [] => None,
        [v] => Some((v - SINGLE_VALUE_HALF_WIDTH, v + SINGLE_VALUE_HALF_WIDTH)),
        [first, .., last] => Some((*first, *last)),
    }
}

/// bilinear interpolation of the grid at (x, y), where x runs along the columns
/// and y along the rows, both in the grid's own coordinate values. None outside
/// the grid or when a surrounding cell is empty. an axis with a single
/// coordinate is treated as constant along that axis.
pub fn interpolate(grid: &PivotGrid, x: f64, y: f64) -> Option<f64> {
    let (r0, r1, ty) = bracket(grid.rows(), y)?;
    let (c0, c1, tx) = bracket(grid.cols(), x)?;
    let v00 = grid.get(r0, c0)?;
    let v01 = grid.get(r0, c1)?;
    let v10 = grid.get(r1, c0)?;
    let v11 = grid.get(r1, c1)?;
    let bottom = v00 + (v01 - v00) * tx;
    let top = v10 + (v11 - v10) * tx;
    Some(bottom + (top - bottom) * ty)
}

/// indices of the coordinates surrounding `v` and the fraction of the way from the first to the second
fn bracket(coords: &[f64], v: f64) -> Option<(usize, usize, f64)> {
    match coords {
        [] => None,
        [_] => Some((0, 0, 0.0)),
        [first, .., last] => {
            if v < *first || v > *last {
                return None;
            }
            let lower = coords
                .partition_point(|c| *c <= v)
                .saturating_sub(1)
                .min(coords.len() - 2);
            let span = coords[lower + 1] - coords[lower];
            let t = if span > 0.0 {
                (v - coords[lower]) / span
            } else {
                0.0
            };
            Some((lower, lower + 1, t))
        }
    }
}
