use super::{font, format_general, Colormap};
use crate::config::Typography;
use plotters::{coord::Shift, prelude::*};
use std::error::Error;

const CONTINUOUS_SLICES: usize = 128;

/// how values map onto the colorbar
#[derive(Clone, Copy, Debug)]
pub enum ColorbarScale<'a> {
    /// a smooth gradient over [vmin, vmax]
    Continuous { vmin: f64, vmax: f64 },
    /// one flat color per band between consecutive level boundaries
    Banded(&'a [f64]),
}

/// draws a vertical colorbar filling `area`
pub fn draw_colorbar(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    colormap: Colormap,
    scale: ColorbarScale<'_>,
    typography: &Typography,
    text: bool,
) -> Result<(), Box<dyn Error>> {
    let (lo, hi) = match scale {
        ColorbarScale::Continuous { vmin, vmax } if vmax > vmin => (vmin, vmax),
        ColorbarScale::Continuous { vmin, vmax } => (vmin - 0.5, vmax + 0.5),
        ColorbarScale::Banded(levels) => match levels {
            [first, .., last] if last > first => (*first, *last),
            _ => return Err("colorbar needs at least two increasing level boundaries".into()),
        },
    };

    let mut builder = ChartBuilder::on(area);
    builder
        .margin_top(60)
        .margin_bottom(60)
        .margin_left(10)
        .margin_right(20);
    if text {
        builder.y_label_area_size(70);
    }
    let mut chart = builder.build_cartesian_2d(0.0..1.0, lo..hi)?;

    match scale {
        ColorbarScale::Continuous { .. } => {
            let step = (hi - lo) / CONTINUOUS_SLICES as f64;
            chart.draw_series((0..CONTINUOUS_SLICES).map(|i| {
                let y0 = lo + i as f64 * step;
                let t = (i as f64 + 0.5) / CONTINUOUS_SLICES as f64;
                Rectangle::new([(0.0, y0), (1.0, y0 + step)], colormap.color(t).filled())
            }))?;
        }
        ColorbarScale::Banded(levels) => {
            let n_bands = levels.len() - 1;
            chart.draw_series(levels.windows(2).enumerate().map(|(i, bounds)| {
                let t = (i as f64 + 0.5) / n_bands as f64;
                Rectangle::new(
                    [(0.0, bounds[0]), (1.0, bounds[1])],
                    colormap.color(t).filled(),
                )
            }))?;
        }
    }

    if text {
        chart
            .configure_mesh()
            .disable_mesh()
            .disable_x_axis()
            .y_labels(10)
            .y_label_formatter(&|v| format_general(*v, 3))
            .label_style(font(typography.label_size * 0.8))
            .draw()?;
    }
    Ok(())
}
