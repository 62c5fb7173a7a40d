use chrono::NaiveDate;
use cryptodash::config::{ConfigManager, DashboardConfig, DataConfig};
use cryptodash::types::{DateRange, View};
use cryptodash::ui::services::{ChartExporter, Session};
use cryptodash::views::{Block, NoticeLevel, Selection, ViewRenderer};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

fn d(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

/// A data root with everything except `walk_forward_summary.csv`.
fn build_project(base: &Path) {
    let root = base.join("data").join("News Data Crypto");
    fs::create_dir_all(root.join("backtests")).unwrap();
    fs::create_dir_all(base.join("data").join("slides")).unwrap();

    let mut merged = String::from(
        "date,crypto_name,price_usd,news_count,pct_positive,pct_negative,avg_compound,sarima_forecast,lstm_forecast\n",
    );
    for day in 1..=10 {
        for (coin, price) in [("Bitcoin", 42000.0), ("Ethereum", 2300.0)] {
            writeln!(
                merged,
                "2024-01-{:02},{},{},{},0.5,0.2,0.1,{},{}",
                day,
                coin,
                price + day as f64,
                day,
                price + day as f64 + 1.0,
                price + day as f64 - 1.0
            )
            .unwrap();
        }
    }
    fs::write(root.join("merged_daily.csv"), merged).unwrap();
    fs::write(
        root.join("live_recommendations.csv"),
        "crypto_name,price_usd,sarima_24h,lstm_24h,recommendation\nBitcoin,42010.0,42100.0,41990.0,BUY\n",
    )
    .unwrap();
    fs::write(
        root.join("backtests").join("Bitcoin_cum_returns.csv"),
        "date,Buy & Hold,SARIMA,LSTM\n2024-01-01,1.0,1.0,1.0\n2024-01-02,1.01,1.02,0.99\n",
    )
    .unwrap();
    fs::write(base.join("data").join("slides").join("slide01.png"), b"not a real png").unwrap();
}

fn start(base: &Path) -> Session {
    let config = ConfigManager::new(DashboardConfig {
        data: DataConfig {
            base_dir: base.join("data"),
            ..DataConfig::default()
        },
        ..DashboardConfig::default()
    })
    .unwrap();
    match Session::start(config) {
        Ok(session) => session,
        Err(e) => panic!("startup failed: {}", e),
    }
}

#[test]
fn test_every_view_renders_and_missing_summary_is_local() {
    let dir = tempfile::tempdir().unwrap();
    build_project(dir.path());
    let session = start(dir.path());
    let datasets = session.datasets().unwrap();
    let config = session.config().get();
    let renderer = ViewRenderer::new(&datasets, &config.display, &config.data.slide_pattern);

    let selection = Selection {
        coin: "Bitcoin".to_string(),
        range: DateRange::new(d(3), d(7)),
    };

    for view in View::all() {
        let output = renderer.render(view, Some(&selection));
        assert_eq!(output.view, view);
        match view {
            View::PerformanceMetrics => {
                assert!(output.has_notice(NoticeLevel::Warning));
                assert!(output.tables().is_empty());
                assert!(output.charts().is_empty());
            }
            _ => assert!(
                output.notices().is_empty(),
                "{} produced notices: {:?}",
                view.label(),
                output.notices()
            ),
        }
    }

    let raw = renderer.render(View::RawData, Some(&selection));
    let tables = raw.tables();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].total_rows, 5);
    assert_eq!(tables[1].total_rows, 20);

    let overview = renderer.render(View::Overview, None);
    assert!(overview
        .blocks
        .iter()
        .any(|b| matches!(b, Block::Images { paths } if paths.len() == 1)));

    assert_eq!(session.cache().load_count(), 1);
}

#[test]
fn test_views_without_selection_prompt() {
    let dir = tempfile::tempdir().unwrap();
    build_project(dir.path());
    let session = start(dir.path());
    let datasets = session.datasets().unwrap();
    let config = session.config().get();
    let renderer = ViewRenderer::new(&datasets, &config.display, &config.data.slide_pattern);

    let output = renderer.render(View::ForecastComparison, None);
    assert!(output.has_notice(NoticeLevel::Info));
    assert!(output.charts().is_empty());
}

#[test]
fn test_forecast_chart_exports_to_json() {
    let dir = tempfile::tempdir().unwrap();
    build_project(dir.path());
    let session = start(dir.path());
    let datasets = session.datasets().unwrap();
    let config = session.config().get();
    let renderer = ViewRenderer::new(&datasets, &config.display, &config.data.slide_pattern);

    let selection = Selection {
        coin: "Ethereum".to_string(),
        range: DateRange::new(d(1), d(10)),
    };
    let output = renderer.render(View::ForecastComparison, Some(&selection));
    let chart = output.charts()[0];
    assert_eq!(chart.series().len(), 3);

    let target = dir.path().join("forecast.json");
    ChartExporter::write(chart, &target).unwrap();
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(target).unwrap()).unwrap();
    assert_eq!(json["id"], "forecast_comparison");
    assert_eq!(json["series"].as_array().map(|s| s.len()), Some(3));
    assert_eq!(json["series"][0]["points"].as_array().map(|p| p.len()), Some(10));
}
