use super::{
    band_index,
    colorbar::{draw_colorbar, ColorbarScale},
    font, format_general, nice_levels, text_enabled,
};
use crate::{
    config::{GridPlotStyle, Typography},
    grid::{axis_extent, interpolate, PivotGrid},
    model::{PostProcessError, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO},
};
use plotters::prelude::*;
use std::{error::Error, path::Path};

/// renders `grid` as a filled contour plot over the true coordinate values,
/// with the level boundaries shown on a banded colorbar.
///
/// the surface is bilinearly interpolated between the grid points and
/// sampled on a `contour_resolution` square raster. samples falling next to an
/// empty cell are left blank.
pub fn contour(
    grid: &PivotGrid,
    style: &GridPlotStyle,
    typography: &Typography,
    output_path: &Path,
) -> Result<(), PostProcessError> {
    draw_contour(grid, style, typography, output_path).map_err(|e| {
        PostProcessError::RenderError {
            filepath: output_path.to_str().unwrap_or_default().to_string(),
            error: e.to_string(),
        }
    })?;
    log::info!("wrote contour plot {}", output_path.display());
    Ok(())
}

fn draw_contour(
    grid: &PivotGrid,
    style: &GridPlotStyle,
    typography: &Typography,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let (vmin, vmax) = grid
        .value_range()
        .ok_or("cannot draw a contour plot of a grid with no values")?;
    let (x0, x1) = axis_extent(grid.cols()).ok_or("grid has no columns")?;
    let (y0, y1) = axis_extent(grid.rows()).ok_or("grid has no rows")?;
    let levels = nice_levels(vmin, vmax, style.contour_levels);
    let n_bands = levels.len() - 1;
    let text = text_enabled(typography);

    let root = BitMapBackend::new(output_path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot_area, bar_area) =
        root.split_horizontally(style.width.saturating_sub(style.colorbar_width) as i32);

    let mut builder = ChartBuilder::on(&plot_area);
    builder.margin(20);
    if text {
        builder
            .caption("Contour Plot", font(typography.title_size))
            .x_label_area_size(60)
            .y_label_area_size(90);
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    let resolution = style.contour_resolution.max(2);
    let dx = (x1 - x0) / resolution as f64;
    let dy = (y1 - y0) / resolution as f64;
    let samples = (0..resolution).flat_map(|j| (0..resolution).map(move |i| (i, j)));
    chart.draw_series(samples.filter_map(|(i, j)| {
        let left = x0 + i as f64 * dx;
        let bottom = y0 + j as f64 * dy;
        let value = interpolate(grid, left + dx / 2.0, bottom + dy / 2.0)?;
        let band = band_index(value, &levels);
        let color = style.colormap.color((band as f64 + 0.5) / n_bands as f64);
        Some(Rectangle::new(
            [(left, bottom), (left + dx, bottom + dy)],
            color.filled(),
        ))
    }))?;

    if text {
        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(CHAIN_STRENGTH)
            .y_desc(COST_CONSTRAINT_RATIO)
            .x_label_formatter(&|x| format_general(*x, 3))
            .y_label_formatter(&|y| format_general(*y, 3))
            .label_style(font(typography.label_size * 0.8))
            .axis_desc_style(font(typography.label_size))
            .draw()?;
    }

    draw_colorbar(
        &bar_area,
        style.colormap,
        ColorbarScale::Banded(&levels),
        typography,
        text,
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::contour;
    use crate::{
        config::{GridPlotStyle, Typography},
        grid::{DuplicateCellPolicy, PivotGrid},
        model::{AverageCell, CellKey, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO, RELATIVE_COST},
    };

    fn render(cells: &[(f64, f64, f64)]) -> (tempfile::TempDir, std::path::PathBuf) {
        let table = cells
            .iter()
            .map(|(r, c, v)| AverageCell::new(&CellKey::new(*r, *c), *v, 4))
            .collect::<Vec<_>>();
        let grid = PivotGrid::from_rows(
            &table,
            COST_CONSTRAINT_RATIO,
            CHAIN_STRENGTH,
            RELATIVE_COST,
            DuplicateCellPolicy::LastWins,
        )
        .expect("should pivot");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("avg_contours_test.png");
        let style = GridPlotStyle {
            contour_resolution: 40,
            ..Default::default()
        };
        contour(&grid, &style, &Typography::disabled(), &path).expect("should render");
        (dir, path)
    }

    #[test]
    fn test_contour_writes_png() {
        let (_dir, path) = render(&[
            (0.5, 1.0, 1.2),
            (0.5, 2.0, 1.4),
            (1.0, 1.0, 1.1),
            (1.0, 2.0, 1.9),
        ]);
        assert!(path.is_file());
    }

    #[test]
    fn test_contour_single_cell() {
        let (_dir, path) = render(&[(0.5, 1.0, 1.2)]);
        assert!(path.is_file());
    }
}
