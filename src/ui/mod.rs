mod controls;
mod display;
mod map_view;
mod tiles;
mod ui_config;
mod ui_text;

pub(crate) use display::DisplayView;
pub(crate) use ui_config::{MarkerStyle, UI_CONFIG, UI_TEXT};
