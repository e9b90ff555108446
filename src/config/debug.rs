//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every window advance (index before/after).
    pub log_window_ticks: bool,

    /// Log the coordinate request and payload size.
    pub log_fetch: bool,

    /// Start / Stop / Reset / visible count edits, including rejected input.
    pub log_controls: bool,

    /// Coordinates skipped because lat/lon text did not parse.
    pub log_skipped_markers: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_skipped_markers: true,

    log_controls: false,
    log_window_ticks: false,
};
