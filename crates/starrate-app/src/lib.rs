//! Starrate demo application
//!
//! Native shell hosting the star rating widgets: window, event loop and the
//! page that owns the user's rating.

#[cfg(feature = "native")]
mod app;
mod config;
mod ui;

#[cfg(feature = "native")]
pub use app::App;
pub use config::{AppConfig, ConfigError};
pub use ui::{render_ui, UiAction, UiState};
