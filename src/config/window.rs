use std::time::Duration;

/// Sliding window defaults.
pub struct WindowConfig {
    /// Markers shown at once until the user changes it.
    pub default_visible_count: usize,
    /// One window advance per period while running.
    pub tick_period: Duration,
}

pub const WINDOW: WindowConfig = WindowConfig {
    default_visible_count: 5,
    tick_period: Duration::from_secs(1),
};
