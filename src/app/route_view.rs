use eframe::egui::Context;

use crate::ui::DisplayView;

/// Something the shell can mount under a route.
pub(crate) trait RouteView {
    fn show(&mut self, ctx: &Context);
}

impl RouteView for DisplayView {
    fn show(&mut self, ctx: &Context) {
        self.render(ctx)
    }
}
