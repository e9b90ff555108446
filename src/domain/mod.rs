// Domain types and value objects
mod coordinate;

// Re-export commonly used types to the world
pub use coordinate::{Coordinate, CoordinateError, GeoPoint};
