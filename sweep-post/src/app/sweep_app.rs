use super::{post_process, PostProcessSummary};
use crate::{
    config::PostProcessConfig, grid::DuplicateCellPolicy, model::PostProcessError,
    route::UnknownLocationPolicy,
};
use clap::Parser;

/// command line tool that aggregates the results of a cost_constraint_ratio x
/// chain_strength routing sweep into heatmaps and contour plots, and draws
/// the route found by every trial
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct SweepPostApp {
    /// sweep results file in the data directory, without its `.csv` extension
    pub input: String,
    /// suffix given to the aggregate plots and tables
    pub output: String,
    /// JSON file in the data directory holding the `orders` locations
    pub locations_file: String,
    #[arg(long, default_value_t=String::from("data"))]
    pub data_dir: String,
    /// TOML or JSON file with plot, projection and policy settings
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// number of threads rendering route plots
    #[arg(long, default_value_t = 1)]
    pub parallelism: usize,
    /// also write each aggregated table as CSV next to its plots
    #[arg(long)]
    pub write_tables: bool,
    /// overrides the configured policy for route stops missing from the locations file
    #[arg(long, value_enum)]
    pub unknown_location_policy: Option<UnknownLocationPolicy>,
    /// overrides the configured policy for repeated cells while pivoting
    #[arg(long, value_enum)]
    pub duplicate_cell_policy: Option<DuplicateCellPolicy>,
}

impl SweepPostApp {
    /// the configuration file, if any, with command line overrides applied
    pub fn build_config(&self) -> Result<PostProcessConfig, PostProcessError> {
        let mut config = match &self.configuration_file {
            Some(f) => PostProcessConfig::try_from(f)?,
            None => PostProcessConfig::default(),
        };
        if let Some(policy) = self.unknown_location_policy {
            config.unknown_location_policy = policy;
        }
        if let Some(policy) = self.duplicate_cell_policy {
            config.duplicate_cell_policy = policy;
        }
        Ok(config)
    }

    pub fn run(&self) -> Result<PostProcessSummary, PostProcessError> {
        let config = self.build_config()?;
        post_process(self, &config)
    }
}

#[cfg(test)]
mod test {
    use super::SweepPostApp;
    use crate::{grid::DuplicateCellPolicy, route::UnknownLocationPolicy};
    use clap::Parser;

    #[test]
    fn test_positionals_and_defaults() {
        let app = SweepPostApp::try_parse_from(["sweep_post", "output", "test1", "Locations.json"])
            .expect("should parse");
        assert_eq!(app.input, "output");
        assert_eq!(app.output, "test1");
        assert_eq!(app.locations_file, "Locations.json");
        assert_eq!(app.data_dir, "data");
        assert_eq!(app.parallelism, 1);
        assert!(!app.write_tables);
        assert!(app.configuration_file.is_none());
        assert!(app.unknown_location_policy.is_none());
    }

    #[test]
    fn test_flag_overrides() {
        let app = SweepPostApp::try_parse_from([
            "sweep_post",
            "output",
            "test1",
            "Locations.json",
            "--unknown-location-policy",
            "skip",
            "--duplicate-cell-policy",
            "reject",
            "--parallelism",
            "4",
            "--write-tables",
        ])
        .expect("should parse");
        assert!(app.write_tables);
        assert_eq!(app.parallelism, 4);
        let config = app.build_config().expect("default config");
        assert_eq!(config.unknown_location_policy, UnknownLocationPolicy::Skip);
        assert_eq!(config.duplicate_cell_policy, DuplicateCellPolicy::Reject);
    }

    #[test]
    fn test_missing_positional() {
        assert!(SweepPostApp::try_parse_from(["sweep_post", "output", "test1"]).is_err());
    }
}
