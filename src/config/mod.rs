pub mod traits;
pub mod data;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, DashboardConfig};
pub use data::{DataConfig, SelectionPolicy};
pub use display::DisplayConfig;
pub use traits::ConfigSection;
