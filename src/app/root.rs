use eframe::{
    Frame,
    egui::{Context, Visuals},
};

use crate::{
    Cli,
    app::Route,
    config::API,
    ui::{DisplayView, UI_CONFIG},
};

/// Application shell: owns the current route and nothing else.
/// Dropping the shell drops the mounted view, which cancels its timer.
pub struct App {
    route: Route,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let url = API.coordinates_url(&args.api_base);
        let route = Route::Display(DisplayView::mount(&cc.egui_ctx, url));
        log::info!("Mounted route {}", route.path());
        Self { route }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        self.route.view_mut().show(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
