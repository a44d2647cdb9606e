//! post-processing for routing parameter sweeps. reads the CSV of trial results
//! produced by a sweep over `cost_constraint_ratio` and `chain_strength`,
//! aggregates the trials per parameter cell, renders heatmaps and contour plots
//! of the aggregates and draws every trial's route on a projected map.
pub mod aggregate;
pub mod app;
pub mod config;
pub mod grid;
pub mod model;
pub mod projection;
pub mod render;
pub mod route;
pub mod util;
