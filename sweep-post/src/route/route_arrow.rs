use super::UnknownLocationPolicy;
use crate::{
    model::{LocationCollection, PostProcessError},
    projection::EquirectangularProjection,
};
use geo::Coord;

/// a directed edge between two consecutive route stops, in projected kilometers
#[derive(Clone, Debug, PartialEq)]
pub struct RouteArrow {
    pub from_id: i64,
    pub to_id: i64,
    pub start: Coord<f64>,
    pub end: Coord<f64>,
}

/// one arrow per consecutive pair of stops, so a route of N stops yields N-1
/// arrows in route order.
///
/// # Arguments
///
/// * `route` - order_ids in visiting order
/// * `locations` - lookup for each stop's coordinates
/// * `projection` - maps each stop onto the plotting plane
/// * `policy` - what to do with a stop missing from `locations`
///
/// # Returns
///
/// The arrows, or an `UnknownLocation` error under [`UnknownLocationPolicy::Fail`].
pub fn route_arrows(
    route: &[i64],
    locations: &LocationCollection,
    projection: &EquirectangularProjection,
    policy: UnknownLocationPolicy,
) -> Result<Vec<RouteArrow>, PostProcessError> {
    let stops = route
        .iter()
        .map(|order_id| match locations.get(*order_id) {
            Some(location) => Ok(Some((*order_id, projection.project_point(&location.point())))),
            None => match policy {
                UnknownLocationPolicy::Fail => Err(PostProcessError::UnknownLocation(*order_id)),
                UnknownLocationPolicy::Skip => {
                    log::warn!("route stop {order_id} is not a known location, skipping it");
                    Ok(None)
                }
            },
        })
        .collect::<Result<Vec<_>, _>>()?;

    let arrows = stops
        .windows(2)
        .filter_map(|pair| match pair {
            [Some((from_id, start)), Some((to_id, end))] => Some(RouteArrow {
                from_id: *from_id,
                to_id: *to_id,
                start: *start,
                end: *end,
            }),
            _ => None,
        })
        .collect();
    Ok(arrows)
}
