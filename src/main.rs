use anyhow::anyhow;
use cryptodash::config::ConfigManager;
use cryptodash::ui::services::Session;
use cryptodash::ui::{DashboardApp, APP_TITLE};
use eframe::NativeOptions;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let startup = ConfigManager::from_env().and_then(Session::start);
    match &startup {
        Ok(session) => log::info!("Serving data from {}", session.paths().root.display()),
        Err(e) if e.is_fatal() => log::error!("Startup halted: {}", e),
        Err(e) => log::error!("Startup failed: {}", e),
    }

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        "cryptodash",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, startup)))),
    )
    .map_err(|e| anyhow!("Failed to run the dashboard: {}", e))
}
