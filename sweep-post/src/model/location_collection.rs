use super::{Location, PostProcessError};
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

/// shape of the locations (payload) file. other top-level keys of the
/// payload are ignored.
#[derive(Deserialize)]
struct LocationsFile {
    orders: Vec<Location>,
}

/// all locations of a sweep run, in file order, indexed by order_id.
#[derive(Clone, Debug)]
pub struct LocationCollection {
    locations: Vec<Location>,
    index: HashMap<i64, usize>,
}

impl LocationCollection {
    /// builds a collection, rejecting duplicate order ids and non-finite coordinates.
    pub fn new(locations: Vec<Location>) -> Result<LocationCollection, String> {
        let mut index = HashMap::with_capacity(locations.len());
        for (idx, location) in locations.iter().enumerate() {
            if !location.lat.is_finite() || !location.lon.is_finite() {
                return Err(format!(
                    "order_id {} has non-finite coordinates ({}, {})",
                    location.order_id, location.lat, location.lon
                ));
            }
            if let Some(prev) = index.insert(location.order_id, idx) {
                return Err(format!(
                    "order_id {} appears at both index {prev} and {idx}",
                    location.order_id
                ));
            }
        }
        Ok(LocationCollection { locations, index })
    }

    /// reads and validates a JSON locations file
    pub fn try_from_path(path: &Path) -> Result<LocationCollection, PostProcessError> {
        let filepath = path.to_str().unwrap_or_default().to_string();
        if !path.is_file() {
            return Err(PostProcessError::InputNotFound(filepath));
        }
        let contents = std::fs::read_to_string(path).map_err(|e| PostProcessError::ReadError {
            filepath: filepath.clone(),
            error: e.to_string(),
        })?;
        Self::try_from_json_str(&contents, &filepath)
    }

    /// decodes and validates the JSON contents of a locations file. `source`
    /// names the file in error messages.
    pub fn try_from_json_str(
        contents: &str,
        source: &str,
    ) -> Result<LocationCollection, PostProcessError> {
        let file: LocationsFile = serde_json::from_str(contents).map_err(|e| {
            PostProcessError::LocationsValidationError {
                filepath: source.to_string(),
                error: e.to_string(),
            }
        })?;
        LocationCollection::new(file.orders).map_err(|error| {
            PostProcessError::LocationsValidationError {
                filepath: source.to_string(),
                error,
            }
        })
    }

    pub fn get(&self, order_id: i64) -> Option<&Location> {
        self.index.get(&order_id).map(|idx| &self.locations[*idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
