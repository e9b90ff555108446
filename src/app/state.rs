// src/app/state.rs

use crate::{app::RouteView, ui::DisplayView};

/// Navigation context. There is one route and it always shows the display view.
pub(crate) enum Route {
    Display(DisplayView),
}

impl Route {
    pub(crate) fn path(&self) -> &'static str {
        match self {
            Route::Display(_) => "/",
        }
    }

    pub(crate) fn view_mut(&mut self) -> &mut dyn RouteView {
        match self {
            Route::Display(view) => view,
        }
    }
}
