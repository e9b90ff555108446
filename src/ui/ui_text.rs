use std::sync::LazyLock;

pub const ICON_PLAY: &str = "⏵";
pub const ICON_STOP: &str = "⏹";
pub const ICON_RESET: &str = "🔄";

pub struct UiText {
    // --- Controls bar ---
    pub label_visible_count: String,
    pub hover_visible_count: String,
    pub button_start: String,
    pub button_stop: String,
    pub button_reset: String,

    // --- Status ---
    pub status_loading: String,
    pub status_failed: String,
    pub status_running: String,
    pub status_idle: String,
    pub label_markers: String,
    pub label_position: String,
    pub label_skipped: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    label_visible_count: "Visible markers".to_string(),
    hover_visible_count: "Whole number between 1 and the number of loaded coordinates".to_string(),
    button_start: format!("{} Start/Continue", ICON_PLAY),
    button_stop: format!("{} Stop", ICON_STOP),
    button_reset: format!("{} Reset", ICON_RESET),

    status_loading: "Loading coordinates...".to_string(),
    status_failed: "No coordinates (fetch failed, see log)".to_string(),
    status_running: "Running".to_string(),
    status_idle: "Stopped".to_string(),
    label_markers: "markers".to_string(),
    label_position: "window start".to_string(),
    label_skipped: "skipped (bad lat/lon)".to_string(),
});
