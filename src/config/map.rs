//! Map surface constants: initial camera and tile server.

pub struct TileConfig {
    /// `{z}`, `{x}` and `{y}` are substituted per tile.
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub attribution_url: &'static str,
    pub max_zoom: u8,
}

pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: f64,
    pub tiles: TileConfig,
}

pub const MAP: MapConfig = MapConfig {
    center_lat: 64.0,
    center_lon: 0.0,
    zoom: 5.0,
    tiles: TileConfig {
        url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "© OpenStreetMap contributors",
        attribution_url: "https://www.openstreetmap.org/copyright",
        max_zoom: 19,
    },
};
