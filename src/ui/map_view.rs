use eframe::egui::{
    Align2, Area, Color32, Context, FontId, Frame, Id, Order, Painter, Pos2, Rect, Ui, pos2, vec2,
};
use walkers::{HttpTiles, Map, MapMemory, Position, Projector, lat_lon};

use crate::{
    config::MAP,
    engine::Marker,
    ui::{MarkerStyle, tiles::TemplateTiles},
};

/// The map canvas: tile layer, one marker per visible coordinate, and at most one open popup.
pub(crate) struct MapView {
    tiles: HttpTiles,
    memory: MapMemory,
    center: Position,
    /// Coordinate id whose popup is open. Cleared when that coordinate leaves the window,
    /// not when it is merely panned off-screen.
    open_popup: Option<i64>,
}

impl MapView {
    pub(crate) fn new(ctx: &Context) -> Self {
        let mut memory = MapMemory::default();
        if let Err(e) = memory.set_zoom(MAP.zoom) {
            log::warn!("Failed to set default zoom level: {:?}", e);
        }
        Self {
            tiles: HttpTiles::new(TemplateTiles::from_config(&MAP.tiles), ctx.clone()),
            memory,
            center: lat_lon(MAP.center_lat, MAP.center_lon),
            open_popup: None,
        }
    }

    pub(crate) fn show(&mut self, ui: &mut Ui, markers: &[Marker<'_>], style: &MarkerStyle) {
        let response = ui.add(Map::new(Some(&mut self.tiles), &mut self.memory, self.center));
        let rect = response.rect;
        let projector = Projector::new(rect, &self.memory, self.center);
        let painter = ui.painter_at(rect);

        let click_pos = ui.input(|i| {
            if i.pointer.primary_clicked() {
                i.pointer.interact_pos().filter(|p| rect.contains(*p))
            } else {
                None
            }
        });

        let mut placed: Vec<(Pos2, &Marker<'_>)> = Vec::with_capacity(markers.len());
        for marker in markers {
            let projected = projector.project(lat_lon(marker.point.lat, marker.point.lon));
            let screen = pos2(projected.x, projected.y);
            if !rect.expand(style.radius).contains(screen) {
                continue;
            }
            paint_marker(&painter, screen, style);
            placed.push((screen, marker));
        }

        if let Some(click) = click_pos {
            // Topmost (last drawn) marker wins when markers overlap.
            let hit = placed
                .iter()
                .rev()
                .find(|(screen, _)| screen.distance(click) <= style.hit_radius)
                .map(|(_, m)| m.coordinate.id);
            self.open_popup = toggle_popup(self.open_popup, hit);
        }

        self.open_popup = retain_open_popup(self.open_popup, markers);
        if let Some(id) = self.open_popup {
            if let Some((screen, marker)) = placed.iter().find(|(_, m)| m.coordinate.id == id) {
                show_popup(ui.ctx(), *screen, marker, style);
            }
        }

        paint_attribution(&painter, rect);
    }
}

/// Clicking a marker opens its popup, clicking it again closes it,
/// and clicking empty map closes whatever is open.
fn toggle_popup(open: Option<i64>, hit: Option<i64>) -> Option<i64> {
    match hit {
        Some(id) if open == Some(id) => None,
        other => other,
    }
}

fn retain_open_popup(open: Option<i64>, markers: &[Marker<'_>]) -> Option<i64> {
    open.filter(|id| markers.iter().any(|m| m.coordinate.id == *id))
}

fn paint_marker(painter: &Painter, at: Pos2, style: &MarkerStyle) {
    painter.circle_filled(at, style.radius, style.fill);
    painter.circle_stroke(at, style.radius, style.stroke);
    painter.circle_filled(at, style.radius * 0.3, style.stroke.color);
}

fn show_popup(ctx: &Context, at: Pos2, marker: &Marker<'_>, style: &MarkerStyle) {
    Area::new(Id::new(("marker_popup", marker.coordinate.id)))
        .order(Order::Foreground)
        .pivot(Align2::CENTER_BOTTOM)
        .fixed_pos(at - vec2(0.0, style.radius + 4.0))
        .show(ctx, |ui| {
            Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(marker.coordinate.popup_text());
            });
        });
}

fn paint_attribution(painter: &Painter, rect: Rect) {
    let galley = painter.layout_no_wrap(
        MAP.tiles.attribution.to_string(),
        FontId::proportional(11.0),
        Color32::WHITE,
    );
    let pos = rect.right_bottom() - galley.size() - vec2(4.0, 4.0);
    painter.rect_filled(
        Rect::from_min_size(pos, galley.size()).expand(2.0),
        2.0,
        Color32::from_black_alpha(140),
    );
    painter.galley(pos, galley, Color32::WHITE);
}
