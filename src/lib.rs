#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::{Coordinate, GeoPoint};
pub use engine::{DisplayEngine, SlidingWindow};

// CLI argument parsing
use clap::Parser;

use crate::config::API;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base url of the coordinate service; the fixed coordinates path is appended
    #[arg(long, default_value = API.base_url)]
    pub api_base: String,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            api_base: API.base_url.to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
