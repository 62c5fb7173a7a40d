pub mod config;
pub mod data;
pub mod error;
pub mod types;
pub mod ui;
pub mod views;
