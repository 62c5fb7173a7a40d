mod app;
mod panels;
mod state;
mod theme;
mod widgets;
pub mod services;

pub use app::{DashboardApp, APP_TITLE};
pub use state::AppState;
