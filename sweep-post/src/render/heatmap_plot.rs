use super::{
    colorbar::{draw_colorbar, ColorbarScale},
    contrasting_text, font, format_general, text_enabled,
};
use crate::{
    config::{GridPlotStyle, Typography},
    grid::PivotGrid,
    model::{PostProcessError, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO},
};
use plotters::{
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::{error::Error, path::Path};

/// renders `grid` as a heatmap with one colored, annotated square per cell.
/// the smallest row value sits at the bottom. empty cells are left blank.
///
/// # Arguments
///
/// * `grid` - pivoted values, rows along y and columns along x
/// * `style` - image size, colormap and annotation settings
/// * `typography` - text settings
/// * `output_path` - PNG file to write
pub fn heatmap(
    grid: &PivotGrid,
    style: &GridPlotStyle,
    typography: &Typography,
    output_path: &Path,
) -> Result<(), PostProcessError> {
    draw_heatmap(grid, style, typography, output_path).map_err(|e| {
        PostProcessError::RenderError {
            filepath: output_path.to_str().unwrap_or_default().to_string(),
            error: e.to_string(),
        }
    })?;
    log::info!("wrote heatmap {}", output_path.display());
    Ok(())
}

fn draw_heatmap(
    grid: &PivotGrid,
    style: &GridPlotStyle,
    typography: &Typography,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let (vmin, vmax) = grid
        .value_range()
        .ok_or("cannot draw a heatmap of a grid with no values")?;
    let text = text_enabled(typography);
    let n_rows = grid.n_rows();
    let n_cols = grid.n_cols();

    let root = BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, bar_area) =
        root.split_horizontally(style.width.saturating_sub(style.colorbar_width) as i32);

    let mut builder = ChartBuilder::on(&plot_area);
    builder.margin(20);
    if text {
        builder
            .caption("Heatmap", font(typography.title_size))
            .x_label_area_size(60)
            .y_label_area_size(90);
    }
    // cell (r, c) is centered on (c, r), so integer ticks land on cell centers
    let mut chart = builder.build_cartesian_2d(
        -0.5..n_cols as f64 - 0.5,
        -0.5..n_rows as f64 - 0.5,
    )?;

    chart.draw_series(grid.cells().map(|(r, c, v)| {
        let color = style.colormap.color_for(v, vmin, vmax);
        Rectangle::new(
            [
                (c as f64 - 0.5, r as f64 - 0.5),
                (c as f64 + 0.5, r as f64 + 0.5),
            ],
            color.filled(),
        )
    }))?;

    if text {
        if style.annotate {
            let centered = Pos::new(HPos::Center, VPos::Center);
            chart.draw_series(grid.cells().map(|(r, c, v)| {
                let background = style.colormap.color_for(v, vmin, vmax);
                let label_style = font(typography.annotation_size)
                    .color(&contrasting_text(&background))
                    .pos(centered);
                Text::new(
                    format_general(v, style.annotation_digits),
                    (c as f64, r as f64),
                    label_style,
                )
            }))?;
        }

        let cols = grid.cols();
        let rows = grid.rows();
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(n_cols)
            .y_labels(n_rows)
            .x_desc(CHAIN_STRENGTH)
            .y_desc(COST_CONSTRAINT_RATIO)
            .x_label_formatter(&|x| tick_label(cols, *x))
            .y_label_formatter(&|y| tick_label(rows, *y))
            .label_style(font(typography.label_size * 0.8))
            .axis_desc_style(font(typography.label_size))
            .draw()?;
    }

    draw_colorbar(
        &bar_area,
        style.colormap,
        ColorbarScale::Continuous { vmin, vmax },
        typography,
        text,
    )?;

    root.present()?;
    Ok(())
}

/// the grid coordinate shown at a tick. only ticks on a cell center get a label.
fn tick_label(coords: &[f64], position: f64) -> String {
    let idx = position.round();
    if idx < 0.0 || (position - idx).abs() > 1e-6 {
        return String::new();
    }
    coords
        .get(idx as usize)
        .map(|v| format!("{v}"))
        .unwrap_or_default()
}
