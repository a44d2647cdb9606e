use crate::model::PostProcessError;
use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// mean radius of the Earth in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// latitude (degrees) approximating the centre of Perth, WA
pub const PERTH_REFERENCE_LATITUDE: f64 = -31.952258602714696;

/// equirectangular approximation mapping degrees onto a local plane in kilometers.
///
/// longitudes are scaled by the cosine of a fixed reference latitude, so
/// distances are only meaningful near that latitude. this is a plotting aid,
/// not a geodesic projection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EquirectangularProjection {
    pub earth_radius_km: f64,
    /// degrees
    pub reference_latitude: f64,
}

impl Default for EquirectangularProjection {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            reference_latitude: PERTH_REFERENCE_LATITUDE,
        }
    }
}

impl EquirectangularProjection {
    pub fn new(earth_radius_km: f64, reference_latitude: f64) -> EquirectangularProjection {
        EquirectangularProjection {
            earth_radius_km,
            reference_latitude,
        }
    }

    /// projects a (lon, lat) point to planar (x, y) kilometers
    pub fn project_point(&self, point: &Point<f64>) -> Coord<f64> {
        let scale = self.reference_latitude.to_radians().cos();
        Coord {
            x: self.earth_radius_km * point.x().to_radians() * scale,
            y: self.earth_radius_km * point.y().to_radians(),
        }
    }

    /// projects parallel sequences of latitudes and longitudes, returning the
    /// projected (y, x) sequences in the same order.
    pub fn project(
        &self,
        latitudes: &[f64],
        longitudes: &[f64],
    ) -> Result<(Vec<f64>, Vec<f64>), PostProcessError> {
        if latitudes.len() != longitudes.len() {
            return Err(PostProcessError::InvalidInput(format!(
                "cannot project {} latitudes against {} longitudes",
                latitudes.len(),
                longitudes.len()
            )));
        }
        let (ys, xs) = latitudes
            .iter()
            .zip(longitudes)
            .map(|(lat, lon)| {
                let coord = self.project_point(&Point::new(*lon, *lat));
                (coord.y, coord.x)
            })
            .unzip();
        Ok((ys, xs))
    }
}
