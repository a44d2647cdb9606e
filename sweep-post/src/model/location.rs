use geo::Point;
use serde::{Deserialize, Serialize};

/// a delivery location (order) in degrees. by convention the first
/// location of a payload is the depot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    pub order_id: i64,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(order_id: i64, lat: f64, lon: f64) -> Location {
        Location { order_id, lat, lon }
    }

    /// the location as a geo point, x=lon, y=lat
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
