mod app;
mod config;
mod effects;
mod haptics;
mod logging;
mod ui;

pub use app::run_app;
