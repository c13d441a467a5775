use rangecast::application::comparison_renderer::COMPARISON_TARGETS;
use rangecast::application::system::Application;
use rangecast::config::Config;
use rangecast::domain::errors::ComparisonError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

fn create_test_dir() -> PathBuf {
    let unique_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "rangecast_charts_{}_{}",
        std::process::id(),
        unique_id
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn app_for(dir: &Path, prediction_column: Option<&str>) -> Application {
    let dir = dir.to_string_lossy().to_string();
    let column = prediction_column.map(str::to_string);
    let config = Config::from_lookup(|key| match key {
        "ARTIFACT_DIR" => Some(dir.clone()),
        "PREDICTION_COLUMN" => column.clone(),
        _ => None,
    })
    .unwrap();
    Application::build(config).unwrap()
}

#[test]
fn test_sample_tables_render() {
    let app = app_for(&Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts"), None);

    for target in COMPARISON_TARGETS {
        let chart = app.comparisons.render(target).unwrap();
        assert_eq!(chart.summary.rows, 169);
        assert_eq!(chart.points.len(), 169);
        for point in &chart.points {
            assert_eq!(point.residual, point.actual - point.predicted);
        }
    }

    let fee_apr = app.comparisons.render("fee_apr").unwrap();
    assert_eq!(fee_apr.title, "FEE APR");
    assert_eq!(fee_apr.heading, "FEE APR Predictions vs. Actuals");
    assert_eq!(fee_apr.x_axis.label, "FEE APR");
    assert_eq!(fee_apr.y_axis.label, "Prediction");
}

#[test]
fn test_residual_scenario_from_csv() {
    let dir = create_test_dir();
    fs::write(
        dir.join("mainnet-wbtc-weth-xgbpred-roi.csv"),
        "fee_tier,roi,xgb_pred\n0.05%,0.10,0.08\n0.3%,-0.05,0.01\n",
    )
    .unwrap();

    let app = app_for(&dir, None);
    let chart = app.comparisons.render("roi").unwrap();

    assert_eq!(chart.title, "ROI");
    assert_eq!(chart.points[0].residual, 0.10 - 0.08);
    assert_eq!(chart.points[1].residual, -0.05 - 0.01);
    assert_eq!(
        chart.hover_lines(&chart.points[0]),
        [
            "ROI: 10.00%".to_string(),
            "Prediction: 8.00%".to_string(),
            "Error: 2.00%".to_string()
        ]
    );

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_custom_prediction_column() {
    let dir = create_test_dir();
    fs::write(
        dir.join("mainnet-wbtc-weth-xgbpred-fee_apr.csv"),
        "fee_apr,rf_pred\n0.25,0.20\n",
    )
    .unwrap();

    let err = app_for(&dir, None).comparisons.render("fee_apr").unwrap_err();
    assert!(matches!(err, ComparisonError::MalformedTable { .. }));

    let chart = app_for(&dir, Some("rf_pred"))
        .comparisons
        .render("fee_apr")
        .unwrap();
    assert_eq!(chart.summary.rows, 1);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_missing_and_empty_tables() {
    let dir = create_test_dir();
    fs::write(dir.join("mainnet-wbtc-weth-xgbpred-roi.csv"), "roi,xgb_pred\n").unwrap();

    let app = app_for(&dir, None);
    assert!(matches!(
        app.comparisons.render("roi").unwrap_err(),
        ComparisonError::EmptyTable { .. }
    ));
    assert!(matches!(
        app.comparisons.render("fee_apr").unwrap_err(),
        ComparisonError::DataNotFound { .. }
    ));
    assert!(matches!(
        app.comparisons.render("../roi").unwrap_err(),
        ComparisonError::InvalidTarget { .. }
    ));

    fs::remove_dir_all(dir).ok();
}
