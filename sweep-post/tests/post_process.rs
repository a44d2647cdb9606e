use std::path::Path;
use sweep_post::{
    app::{post_process, SweepPostApp},
    config::{PostProcessConfig, Typography},
    grid::PivotGrid,
    model::{
        LocationCollection, PostProcessError, TrialRecord, CHAIN_STRENGTH, COST_CONSTRAINT_RATIO,
        RELATIVE_COST,
    },
    render::{contour, heatmap, text_enabled},
    route::{RouteRenderer, UnknownLocationPolicy},
};

const LOCATIONS: &str = r#"{
    "depot": {"lat": -31.952, "lon": 115.86},
    "orders": [
        {"order_id": 0, "lat": -31.952, "lon": 115.860},
        {"order_id": 1, "lat": -31.940, "lon": 115.870},
        {"order_id": 2, "lat": -31.965, "lon": 115.880},
        {"order_id": 3, "lat": -31.930, "lon": 115.845}
    ]
}"#;

/// one all-success cell and one all-failure cell
const SWEEP: &str = "cost_constraint_ratio,chain_strength,trial,relative_cost,route
0.5,1.0,0,1.2,\"[0, 1, 2, 0]\"
0.5,1.0,1,1.1,\"[0, 2, 1, 3, 0]\"
1.0,2.0,0,-1,
1.0,2.0,1,-1,[]
";

fn write_inputs(data_dir: &Path, sweep: &str) {
    std::fs::write(data_dir.join("output.csv"), sweep).expect("write sweep");
    std::fs::write(data_dir.join("Locations.json"), LOCATIONS).expect("write locations");
}

fn app(data_dir: &Path) -> SweepPostApp {
    SweepPostApp {
        input: String::from("output"),
        output: String::from("test1"),
        locations_file: String::from("Locations.json"),
        data_dir: data_dir.to_str().expect("utf-8 path").to_string(),
        configuration_file: None,
        parallelism: 1,
        write_tables: true,
        unknown_location_policy: None,
        duplicate_cell_policy: None,
    }
}

fn config() -> PostProcessConfig {
    let mut config = PostProcessConfig {
        typography: Typography::disabled(),
        ..Default::default()
    };
    config.grid_style.contour_resolution = 30;
    config.route_style.width = 400;
    config.route_style.height = 300;
    config
}

fn data_rows(path: &Path) -> usize {
    let contents = std::fs::read_to_string(path).expect("read table");
    contents.lines().count() - 1
}

#[test]
fn test_success_and_failure_cells() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    write_inputs(data_dir, SWEEP);

    let summary = post_process(&app(data_dir), &config()).expect("should post-process");

    assert_eq!(summary.average.len(), 1);
    assert!((summary.average[0].relative_cost - 1.15).abs() < 1e-12);
    assert_eq!(summary.average[0].trials, 2);
    assert_eq!(summary.best.len(), 1);
    assert_eq!(summary.best[0].trial, 1);
    let failures = summary.failures.as_ref().expect("failure table");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failed_routes_count, 2);

    for name in [
        "avg_heatmap_test1.png",
        "best_heatmap_test1.png",
        "fails_heatmap_test1.png",
    ] {
        assert!(data_dir.join(name).is_file(), "missing {name}");
    }
    for name in ["avg_contours_test1.png", "best_contours_test1.png"] {
        assert!(data_dir.join(name).is_file(), "missing {name}");
    }
    assert!(!data_dir.join("fails_contours_test1.png").exists());
    assert_eq!(summary.plots.len(), 5);

    let routes_dir = data_dir.join("routes");
    let expected_routes = [
        "0.5_1.0_0_1.2.png",
        "0.5_1.0_1_1.1.png",
        "1.0_2.0_0_-1.0.png",
        "1.0_2.0_1_-1.0.png",
    ];
    assert_eq!(summary.routes.len(), expected_routes.len());
    for (written, name) in summary.routes.iter().zip(expected_routes) {
        assert_eq!(written, &routes_dir.join(name));
        assert!(written.is_file(), "missing {name}");
    }
    assert_eq!(summary.images().count(), 9);

    assert_eq!(summary.tables.len(), 3);
    for name in [
        "avg_table_test1.csv",
        "best_table_test1.csv",
        "fails_table_test1.csv",
    ] {
        assert_eq!(data_rows(&data_dir.join(name)), 1, "{name}");
    }
    let mut reader =
        csv::Reader::from_path(data_dir.join("best_table_test1.csv")).expect("best table");
    let best = reader
        .deserialize::<TrialRecord>()
        .collect::<Result<Vec<_>, _>>()
        .expect("best table decodes");
    assert_eq!(best, summary.best);
}

#[test]
fn test_no_failures_skips_failure_plot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    let sweep = "cost_constraint_ratio,chain_strength,trial,relative_cost,route
0.5,1.0,0,1.2,\"[0, 1]\"
0.5,2.0,0,1.4,\"[1, 0]\"
1.0,1.0,0,1.1,\"[2, 3]\"
1.0,2.0,0,1.3,\"[3, 2]\"
";
    write_inputs(data_dir, sweep);

    let summary = post_process(&app(data_dir), &config()).expect("should post-process");
    assert!(summary.failures.is_none());
    assert_eq!(summary.average.len(), 4);
    assert_eq!(summary.plots.len(), 4);
    assert_eq!(summary.tables.len(), 2);
    assert!(!data_dir.join("fails_heatmap_test1.png").exists());
    assert_eq!(summary.routes.len(), 4);
}

#[test]
fn test_parallel_route_rendering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    write_inputs(data_dir, SWEEP);
    let args = SweepPostApp {
        parallelism: 3,
        write_tables: false,
        ..app(data_dir)
    };

    let summary = post_process(&args, &config()).expect("should post-process");
    assert!(summary.tables.is_empty());
    assert_eq!(summary.routes.len(), 4);
    assert!(summary.routes.iter().all(|p| p.is_file()));
}

#[test]
fn test_missing_input_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = post_process(&app(dir.path()), &config());
    assert!(matches!(result, Err(PostProcessError::InputNotFound(_))));
}

#[test]
fn test_invalid_locations_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    write_inputs(data_dir, SWEEP);
    std::fs::write(data_dir.join("Locations.json"), r#"{"orders": [{"order_id": 0}]}"#)
        .expect("overwrite locations");
    let result = post_process(&app(data_dir), &config());
    assert!(matches!(
        result,
        Err(PostProcessError::LocationsValidationError { .. })
    ));
}

#[test]
fn test_unknown_location_policy() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    let sweep = "cost_constraint_ratio,chain_strength,trial,relative_cost,route
0.5,1.0,0,1.2,\"[0, 7, 1]\"
";
    write_inputs(data_dir, sweep);

    let result = post_process(&app(data_dir), &config());
    assert!(matches!(result, Err(PostProcessError::UnknownLocation(7))));

    let skipping = PostProcessConfig {
        unknown_location_policy: UnknownLocationPolicy::Skip,
        ..config()
    };
    let summary = post_process(&app(data_dir), &skipping).expect("skip policy");
    assert_eq!(summary.routes.len(), 1);
    assert!(summary.routes[0].is_file());
}

#[test]
fn test_plots_with_text() {
    let typography = Typography::default();
    if !text_enabled(&typography) {
        eprintln!("no usable font found, skipping text rendering");
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    let data_dir = dir.path();
    write_inputs(data_dir, SWEEP);
    let with_text = PostProcessConfig {
        typography: typography.clone(),
        ..config()
    };

    // titles, axis labels, annotations and colorbar ticks all drawn
    let summary = post_process(&app(data_dir), &with_text).expect("should render with text");
    assert_eq!(summary.plots.len(), 5);
    assert_eq!(summary.routes.len(), 4);
    assert!(summary.images().all(|p| p.is_file()));

    // text changes the pixels of every kind of plot
    let grid = PivotGrid::from_rows(
        &summary.average,
        COST_CONSTRAINT_RATIO,
        CHAIN_STRENGTH,
        RELATIVE_COST,
        with_text.duplicate_cell_policy,
    )
    .expect("should pivot");
    let plain = Typography::disabled();
    let style = &with_text.grid_style;
    let (heatmap_text, heatmap_plain) = (data_dir.join("h_text.png"), data_dir.join("h.png"));
    heatmap(&grid, style, &typography, &heatmap_text).expect("heatmap with text");
    heatmap(&grid, style, &plain, &heatmap_plain).expect("heatmap without text");
    assert_ne!(read(&heatmap_text), read(&heatmap_plain));

    let (contour_text, contour_plain) = (data_dir.join("c_text.png"), data_dir.join("c.png"));
    contour(&grid, style, &typography, &contour_text).expect("contour with text");
    contour(&grid, style, &plain, &contour_plain).expect("contour without text");
    assert_ne!(read(&contour_text), read(&contour_plain));

    let locations =
        LocationCollection::try_from_path(&data_dir.join("Locations.json")).expect("locations");
    let without_text = PostProcessConfig {
        typography: plain,
        ..with_text.clone()
    };
    let route_text = RouteRenderer::new(&locations, &with_text)
        .render(&[0, 1, 2, 0], data_dir, "r_text")
        .expect("route with text");
    let route_plain = RouteRenderer::new(&locations, &without_text)
        .render(&[0, 1, 2, 0], data_dir, "r")
        .expect("route without text");
    assert_ne!(read(&route_text), read(&route_plain));
}

fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("read image")
}
