use super::{GridPlotStyle, RoutePlotStyle, Typography};
use crate::{
    grid::DuplicateCellPolicy, model::PostProcessError, projection::EquirectangularProjection,
    route::UnknownLocationPolicy,
};
use serde::{Deserialize, Serialize};

/// defines behaviors for a sweep post-processing run. every field has a
/// default, so configuration files only need to name what they change.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
#[serde(default)]
pub struct PostProcessConfig {
    pub projection: EquirectangularProjection,
    pub grid_style: GridPlotStyle,
    pub route_style: RoutePlotStyle,
    pub typography: Typography,
    pub unknown_location_policy: UnknownLocationPolicy,
    pub duplicate_cell_policy: DuplicateCellPolicy,
}

impl TryFrom<&String> for PostProcessConfig {
    type Error = PostProcessError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                PostProcessError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                PostProcessError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                PostProcessError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                PostProcessError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(PostProcessError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::PostProcessConfig;
    use crate::{
        grid::DuplicateCellPolicy, projection::EARTH_RADIUS_KM, render::Colormap,
        route::UnknownLocationPolicy,
    };
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sweep.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            r#"
unknown_location_policy = "skip"
duplicate_cell_policy = "reject"

[projection]
reference_latitude = 40.0

[grid_style]
colormap = "coolwarm"
contour_levels = 6
"#
        )
        .expect("write");

        let filename = path.to_str().expect("utf-8 path").to_string();
        let conf = PostProcessConfig::try_from(&filename).expect("should decode");
        assert_eq!(conf.projection.reference_latitude, 40.0);
        assert_eq!(conf.projection.earth_radius_km, EARTH_RADIUS_KM);
        assert_eq!(conf.grid_style.colormap, Colormap::Coolwarm);
        assert_eq!(conf.grid_style.contour_levels, 6);
        assert_eq!(conf.grid_style.annotation_digits, 2);
        assert_eq!(conf.unknown_location_policy, UnknownLocationPolicy::Skip);
        assert_eq!(conf.duplicate_cell_policy, DuplicateCellPolicy::Reject);
        assert!(conf.typography.draw_text);
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("sweep.json");
        std::fs::write(&path, r#"{"typography": {"draw_text": false}}"#).expect("write");
        let filename = path.to_str().expect("utf-8 path").to_string();
        let conf = PostProcessConfig::try_from(&filename).expect("should decode");
        assert!(!conf.typography.draw_text);
        assert_eq!(conf.route_style, Default::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let filename = String::from("sweep.yaml");
        assert!(PostProcessConfig::try_from(&filename).is_err());
    }
}
