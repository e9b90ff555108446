// `std::time::Instant` panics on wasm32-unknown-unknown; web-time falls back to it on native.
pub type AppInstant = web_time::Instant;
