use std::{
    collections::HashSet,
    sync::mpsc::{Receiver, TryRecvError},
};

use anyhow::anyhow;
use eframe::egui::{CentralPanel, Context, TopBottomPanel};

use crate::{
    config::DF,
    data::{FetchResult, spawn_coordinate_fetch},
    engine::{DisplayEngine, Marker},
    ui::{MarkerStyle, UI_CONFIG, controls::render_controls, map_view::MapView},
    utils::AppInstant,
};

/// The display screen. Mounting it starts the one coordinate fetch; dropping it cancels the timer.
pub(crate) struct DisplayView {
    engine: DisplayEngine,
    map: MapView,
    fetch_rx: Option<Receiver<FetchResult>>,
    count_input: String,
    marker_style: MarkerStyle,
    /// Ids already reported as unparseable, so each is logged once.
    skipped: HashSet<i64>,
}

impl DisplayView {
    pub(crate) fn mount(ctx: &Context, coordinates_url: String) -> Self {
        let engine = DisplayEngine::default();
        let repaint_ctx = ctx.clone();
        let fetch_rx = spawn_coordinate_fetch(coordinates_url, move || repaint_ctx.request_repaint());
        Self {
            count_input: engine.window().visible_count().to_string(),
            engine,
            map: MapView::new(ctx),
            fetch_rx: Some(fetch_rx),
            marker_style: UI_CONFIG.marker,
            skipped: HashSet::new(),
        }
    }

    fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        let Some(result) = take_fetch_result(rx) else {
            return;
        };
        self.engine.finish_load(result);
        self.fetch_rx = None;
    }

    pub(crate) fn render(&mut self, ctx: &Context) {
        self.poll_fetch();
        self.engine.poll_timer(AppInstant::now());

        let actions = TopBottomPanel::top("controls")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                render_controls(ui, &self.engine, &mut self.count_input, self.skipped.len())
            })
            .inner;
        let now = AppInstant::now();
        for action in actions {
            self.engine.apply(action, now);
        }

        let mut markers: Vec<Marker<'_>> = Vec::with_capacity(self.engine.visible().len());
        for marker in self.engine.visible_markers() {
            match marker {
                Ok(m) => markers.push(m),
                Err((id, e)) => {
                    if self.skipped.insert(id) && DF.log_skipped_markers {
                        log::warn!("Skipping coordinate {}: {}", id, e);
                    }
                }
            }
        }

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| self.map.show(ui, &markers, &self.marker_style));

        if let Some(wait) = self.engine.until_next_tick(AppInstant::now()) {
            ctx.request_repaint_after(wait);
        }
    }

    pub(crate) fn teardown(&mut self) {
        self.engine.teardown();
        self.fetch_rx = None;
    }
}

/// `None` while the fetch is still in flight. A task that hung up without sending counts as a
/// failed load, so the view never waits forever.
fn take_fetch_result(rx: &Receiver<FetchResult>) -> Option<FetchResult> {
    match rx.try_recv() {
        Ok(result) => Some(result),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(Err(anyhow!("Fetch task ended without a result"))),
    }
}

impl Drop for DisplayView {
    fn drop(&mut self) {
        self.teardown();
    }
}
