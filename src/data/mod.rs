mod error;
mod fetch;
mod provider;

pub use {
    error::FetchError,
    fetch::{FetchResult, fetch_coordinates, spawn_coordinate_fetch},
    provider::{CoordinateProvider, HttpCoordinateProvider},
};
