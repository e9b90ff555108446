use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
}

/// How a marker is drawn. Passed explicitly to every marker render call.
#[derive(Clone, Copy, Debug)]
pub struct MarkerStyle {
    pub radius: f32,
    pub fill: Color32,
    pub stroke: Stroke,
    /// Radius (in points) around the marker that counts as a click on it.
    pub hit_radius: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub marker: MarkerStyle,
    pub count_input_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        warning: Color32::ORANGE,
        error: Color32::from_rgb(220, 80, 80),
        central_panel: Color32::from_rgb(30, 30, 30),
        side_panel: Color32::from_rgb(25, 25, 25),
    },
    marker: MarkerStyle {
        radius: 7.0,
        fill: Color32::from_rgb(40, 120, 220),
        stroke: Stroke {
            width: 2.0,
            color: Color32::WHITE,
        },
        hit_radius: 10.0,
    },
    count_input_width: 60.0,
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    // Map fills the rest, edge to edge
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(0),
            ..Default::default()
        }
    }
}
