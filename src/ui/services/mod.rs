pub mod export;
pub mod session;

pub use export::ChartExporter;
pub use session::Session;
