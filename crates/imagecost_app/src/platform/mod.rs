//! Terminal front end: configuration, logging, the debounce timer and the
//! dispatch loop around `imagecost_core::update`.
mod app;
mod config;
mod effects;
mod logging;
mod timer;
mod ui;

use thiserror::Error;

pub use app::run_app;
pub use config::AppConfig;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to start background worker: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to write to the terminal: {0}")]
    Output(#[source] std::io::Error),
    #[error("debounce timer has stopped")]
    TimerStopped,
}
