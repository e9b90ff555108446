//! Configuration module for the coordinate window viewer.

// Can all be private now because we have a public re-export.
mod api;
mod debug;
mod map;
mod window;

// Re-export commonly used items
pub use api::{API, ApiConfig};
pub use debug::DF;
pub use map::{MAP, MapConfig, TileConfig};
pub use window::{WINDOW, WindowConfig};
