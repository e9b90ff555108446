/// Where the coordinate list lives and how long we wait for it.
pub struct ApiConfig {
    /// Scheme + host + port, no trailing slash. Overridable via `--api-base` on native.
    pub base_url: &'static str,
    pub coordinates_path: &'static str,
    /// Ignored on wasm (the browser owns request timeouts there).
    pub timeout_ms: u64,
}

pub const API: ApiConfig = ApiConfig {
    base_url: "http://localhost:5000",
    coordinates_path: "/api/coordinates/getCoordinates",
    timeout_ms: 10_000,
};

impl ApiConfig {
    /// Join a base url with the fixed coordinates path.
    /// Example: "http://localhost:5000/" -> "http://localhost:5000/api/coordinates/getCoordinates"
    pub fn coordinates_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.coordinates_path)
    }
}
