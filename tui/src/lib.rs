mod app;
pub use app::{App, AppState, AppView};

pub mod config;
pub mod logging;
pub mod scheduler;
pub mod theme;
pub mod views;
pub use views::*;
