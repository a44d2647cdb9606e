use super::{arrow_polygon, route_arrows, ArrowStyle, RouteArrow, UnknownLocationPolicy};
use crate::{
    config::{PostProcessConfig, RoutePlotStyle, Typography},
    model::{LocationCollection, PostProcessError},
    projection::EquirectangularProjection,
    render::{font, text_enabled},
};
use geo::{BoundingRect, Coord, MultiPoint};
use plotters::prelude::*;
use std::{
    error::Error,
    ops::Range,
    path::{Path, PathBuf},
};

/// draws route maps over a fixed set of locations. the locations are projected
/// once and shared by every render, so one renderer can serve a whole sweep.
pub struct RouteRenderer<'a> {
    locations: &'a LocationCollection,
    projection: EquirectangularProjection,
    points: Vec<Coord<f64>>,
    x_range: Range<f64>,
    y_range: Range<f64>,
    style: RoutePlotStyle,
    typography: Typography,
    policy: UnknownLocationPolicy,
}

impl<'a> RouteRenderer<'a> {
    pub fn new(locations: &'a LocationCollection, config: &PostProcessConfig) -> RouteRenderer<'a> {
        let projection = config.projection.clone();
        let points = locations
            .iter()
            .map(|l| projection.project_point(&l.point()))
            .collect::<Vec<_>>();
        let bounds = MultiPoint::from(points.clone()).bounding_rect();
        let padding = config.route_style.padding;
        let (x_range, y_range) = match bounds {
            Some(rect) => (
                padded(rect.min().x, rect.max().x, padding),
                padded(rect.min().y, rect.max().y, padding),
            ),
            None => (padded(0.0, 0.0, padding), padded(0.0, 0.0, padding)),
        };
        RouteRenderer {
            locations,
            projection,
            points,
            x_range,
            y_range,
            style: config.route_style.clone(),
            typography: config.typography.clone(),
            policy: config.unknown_location_policy,
        }
    }

    /// writes `<output_folder>/<output_name>.png` showing every location with
    /// `route` drawn as arrows between consecutive stops.
    ///
    /// # Returns
    ///
    /// The path of the written image. Under [`UnknownLocationPolicy::Fail`], a
    /// stop missing from the locations is an error and no image is written.
    pub fn render(
        &self,
        route: &[i64],
        output_folder: &Path,
        output_name: &str,
    ) -> Result<PathBuf, PostProcessError> {
        let arrows = route_arrows(route, self.locations, &self.projection, self.policy)?;
        let output_path = output_folder.join(format!("{output_name}.png"));
        self.draw(&arrows, &output_path)
            .map_err(|e| PostProcessError::RenderError {
                filepath: output_path.to_str().unwrap_or_default().to_string(),
                error: e.to_string(),
            })?;
        log::debug!("wrote route plot {}", output_path.display());
        Ok(output_path)
    }

    fn draw(&self, arrows: &[RouteArrow], output_path: &Path) -> Result<(), Box<dyn Error>> {
        let text = text_enabled(&self.typography);
        let root =
            BitMapBackend::new(output_path, (self.style.width, self.style.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if text {
            builder
                .caption(
                    "Equirectangular Projection Scatter Plot",
                    font(self.typography.title_size),
                )
                .x_label_area_size(60)
                .y_label_area_size(80);
        }
        let mut chart = builder.build_cartesian_2d(self.x_range.clone(), self.y_range.clone())?;

        if text {
            chart
                .configure_mesh()
                .x_desc("Longitude (km)")
                .y_desc("Latitude (km)")
                .label_style(font(self.typography.label_size * 0.8))
                .axis_desc_style(font(self.typography.label_size))
                .draw()?;
        }

        let radius = self.style.point_radius as i32;
        chart.draw_series(
            self.points
                .iter()
                .map(|p| Circle::new((p.x, p.y), radius, BLUE.filled())),
        )?;

        // arrow outlines are built in pixels so heads keep their size at any zoom
        let arrow_style = ArrowStyle::from(&self.style);
        for arrow in arrows {
            let (x0, y0) = chart.backend_coord(&(arrow.start.x, arrow.start.y));
            let (x1, y1) = chart.backend_coord(&(arrow.end.x, arrow.end.y));
            let outline = arrow_polygon(
                (x0 as f64, y0 as f64),
                (x1 as f64, y1 as f64),
                &arrow_style,
            );
            if let Some(outline) = outline {
                let pixels = outline
                    .into_iter()
                    .map(|(x, y)| (x.round() as i32, y.round() as i32))
                    .collect::<Vec<_>>();
                root.draw(&Polygon::new(pixels, RED.filled()))?;
            }
        }

        root.present()?;
        Ok(())
    }
}

/// loads the locations file and renders a single route map.
/// see [`RouteRenderer::render`].
pub fn render(
    locations_file: &Path,
    route: &[i64],
    output_folder: &Path,
    output_name: &str,
    config: &PostProcessConfig,
) -> Result<PathBuf, PostProcessError> {
    let locations = LocationCollection::try_from_path(locations_file)?;
    RouteRenderer::new(&locations, config).render(route, output_folder, output_name)
}

/// widens [lo, hi] by `padding` of its extent on each side. a zero-width
/// extent is widened by half a kilometer instead.
fn padded(lo: f64, hi: f64, padding: f64) -> Range<f64> {
    let pad = if hi > lo { (hi - lo) * padding } else { 0.5 };
    (lo - pad)..(hi + pad)
}
