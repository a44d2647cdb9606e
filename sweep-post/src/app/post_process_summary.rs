use crate::model::{AverageCell, FailureCell, TrialRecord};
use std::path::PathBuf;

/// everything a post-processing run produced
#[derive(Clone, Debug, Default)]
pub struct PostProcessSummary {
    /// mean relative_cost per parameter cell, over successful trials
    pub average: Vec<AverageCell>,
    /// lowest relative_cost trial per parameter cell
    pub best: Vec<TrialRecord>,
    /// failure counts per parameter cell, None when no trial failed
    pub failures: Option<Vec<FailureCell>>,
    /// heatmaps and contour plots
    pub plots: Vec<PathBuf>,
    /// one route image per input row, in input order
    pub routes: Vec<PathBuf>,
    /// CSV tables, when requested
    pub tables: Vec<PathBuf>,
}

impl PostProcessSummary {
    /// every image written by the run
    pub fn images(&self) -> impl Iterator<Item = &PathBuf> {
        self.plots.iter().chain(self.routes.iter())
    }
}
