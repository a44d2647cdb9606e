use super::{
    contours_filename, heatmap_filename, table_filename, PostProcessSummary, SweepPostApp,
    AVERAGE_PREFIX, BEST_PREFIX, FAILURES_PREFIX, ROUTES_FOLDER,
};
use crate::{
    aggregate,
    config::PostProcessConfig,
    grid::PivotGrid,
    model::{
        LocationCollection, PostProcessError, TableRow, TrialRecord, CHAIN_STRENGTH,
        COST_CONSTRAINT_RATIO, FAILED_ROUTES_COUNT, RELATIVE_COST,
    },
    render,
    route::RouteRenderer,
    util::fs::{create_dirs, read_csv, write_csv},
};
use kdam::{tqdm, Bar, BarExt};
use rayon::prelude::*;
use serde::Serialize;
use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

/// runs the full post-processing of one sweep: aggregate plots of the
/// successful trials, a failure heatmap when any trial failed, optional CSV
/// tables, and one route image per input row.
///
/// # Arguments
///
/// * `args` - input, output and locations names plus run options
/// * `config` - plot styling, projection and policies
///
/// # Returns
///
/// The aggregated tables and the paths of every file written.
pub fn post_process(
    args: &SweepPostApp,
    config: &PostProcessConfig,
) -> Result<PostProcessSummary, PostProcessError> {
    let data_dir = Path::new(&args.data_dir);
    let records: Vec<TrialRecord> = read_csv(data_dir.join(format!("{}.csv", args.input)))?;
    let locations = LocationCollection::try_from_path(&data_dir.join(&args.locations_file))?;
    log::info!(
        "post-processing {} trials over {} locations",
        records.len(),
        locations.len()
    );

    let (successes, _) = aggregate::split_outcomes(&records);
    let average = aggregate::average(&successes);
    let best = aggregate::best(&successes);
    let failures = aggregate::failures(&records);

    let mut plots = vec![];
    let mut tables = vec![];
    let output = args.output.as_str();
    if successes.is_empty() {
        log::warn!("no trial found a route, skipping the average and best plots");
    } else {
        plots.extend(grid_plots(
            &average,
            RELATIVE_COST,
            AVERAGE_PREFIX,
            output,
            data_dir,
            config,
            true,
        )?);
        plots.extend(grid_plots(
            &best,
            RELATIVE_COST,
            BEST_PREFIX,
            output,
            data_dir,
            config,
            true,
        )?);
        if args.write_tables {
            tables.push(table(&average, AVERAGE_PREFIX, output, data_dir)?);
            tables.push(table(&best, BEST_PREFIX, output, data_dir)?);
        }
    }
    match &failures {
        Some(failures) => {
            // no contour for failures
            plots.extend(grid_plots(
                failures,
                FAILED_ROUTES_COUNT,
                FAILURES_PREFIX,
                output,
                data_dir,
                config,
                false,
            )?);
            if args.write_tables {
                tables.push(table(failures, FAILURES_PREFIX, output, data_dir)?);
            }
        }
        None => log::info!("every trial found a route, no failure plot written"),
    }

    let routes = render_routes(
        &records,
        &locations,
        &data_dir.join(ROUTES_FOLDER),
        args.parallelism,
        config,
    )?;

    Ok(PostProcessSummary {
        average,
        best,
        failures,
        plots,
        routes,
        tables,
    })
}

/// renders one route image per record into `routes_dir`, named by
/// [`TrialRecord::route_plot_name`]. with `parallelism` above 1 the images
/// are rendered on a dedicated thread pool of that size.
///
/// # Returns
///
/// The written image paths in record order.
pub fn render_routes(
    records: &[TrialRecord],
    locations: &LocationCollection,
    routes_dir: &Path,
    parallelism: usize,
    config: &PostProcessConfig,
) -> Result<Vec<PathBuf>, PostProcessError> {
    create_dirs(routes_dir)?;
    let renderer = RouteRenderer::new(locations, config);

    if parallelism <= 1 {
        let record_iter = tqdm!(records.iter(), total = records.len(), desc = "render routes");
        let result = record_iter
            .map(|r| renderer.render(&r.route, routes_dir, &r.route_plot_name()))
            .collect::<Result<Vec<_>, _>>();
        eprintln!();
        return result;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(parallelism)
        .build()
        .map_err(|e| {
            PostProcessError::ConfigurationError(format!(
                "failure building a pool of {parallelism} threads: {e}"
            ))
        })?;
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("render routes")
            .total(records.len())
            .build()
            .map_err(|e| PostProcessError::ConfigurationError(e.to_string()))?,
    ));
    let result = pool.install(|| {
        records
            .par_iter()
            .map(|r| {
                let path = renderer.render(&r.route, routes_dir, &r.route_plot_name());
                if let Ok(mut bar) = bar.clone().lock() {
                    let _ = bar.update(1);
                }
                path
            })
            .collect::<Result<Vec<_>, _>>()
    });
    eprintln!();
    result
}

/// heatmap, and optionally contour plot, of `value_key` over the sweep parameters
fn grid_plots<R: TableRow>(
    table: &[R],
    value_key: &str,
    prefix: &str,
    output: &str,
    data_dir: &Path,
    config: &PostProcessConfig,
    with_contour: bool,
) -> Result<Vec<PathBuf>, PostProcessError> {
    let grid = PivotGrid::from_rows(
        table,
        COST_CONSTRAINT_RATIO,
        CHAIN_STRENGTH,
        value_key,
        config.duplicate_cell_policy,
    )?;

    let mut written = vec![];
    let heatmap_path = data_dir.join(heatmap_filename(prefix, output));
    render::heatmap(&grid, &config.grid_style, &config.typography, &heatmap_path)?;
    written.push(heatmap_path);
    if with_contour {
        let contour_path = data_dir.join(contours_filename(prefix, output));
        render::contour(&grid, &config.grid_style, &config.typography, &contour_path)?;
        written.push(contour_path);
    }
    Ok(written)
}

fn table<T: Serialize>(
    rows: &[T],
    prefix: &str,
    output: &str,
    data_dir: &Path,
) -> Result<PathBuf, PostProcessError> {
    let path = data_dir.join(table_filename(prefix, output));
    write_csv(rows, &path)?;
    Ok(path)
}
