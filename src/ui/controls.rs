use eframe::egui::{RichText, TextEdit, Ui};

use crate::{
    engine::{ControlAction, DisplayEngine, LoadPhase, TimerPhase},
    ui::{UI_CONFIG, UI_TEXT},
};

/// Count input, Start/Stop/Reset, and a one-line status. Returns what the user asked for;
/// the caller applies it to the engine.
pub(crate) fn render_controls(
    ui: &mut Ui,
    engine: &DisplayEngine,
    count_input: &mut String,
    skipped: usize,
) -> Vec<ControlAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(RichText::new(&UI_TEXT.label_visible_count).color(UI_CONFIG.colors.label));
        let response = ui
            .add(TextEdit::singleline(count_input).desired_width(UI_CONFIG.count_input_width))
            .on_hover_text(&UI_TEXT.hover_visible_count);
        if response.changed() {
            actions.push(ControlAction::SetVisibleCount(count_input.clone()));
        }
        sync_count_input(count_input, response.has_focus(), engine.window().visible_count());

        if ui.button(&UI_TEXT.button_start).clicked() {
            actions.push(ControlAction::Start);
        }
        if ui.button(&UI_TEXT.button_stop).clicked() {
            actions.push(ControlAction::Stop);
        }
        if ui.button(&UI_TEXT.button_reset).clicked() {
            actions.push(ControlAction::Reset);
        }

        ui.separator();
        render_status(ui, engine, skipped);
    });

    actions
}

/// While the field is being edited its text is left alone, even if the engine rejected it.
/// Once focus leaves, the field snaps back to the count actually in use.
pub(crate) fn sync_count_input(input: &mut String, focused: bool, current: usize) {
    if !focused {
        *input = current.to_string();
    }
}

fn render_status(ui: &mut Ui, engine: &DisplayEngine, skipped: usize) {
    match engine.load_phase() {
        LoadPhase::Loading => {
            ui.spinner();
            ui.label(RichText::new(&UI_TEXT.status_loading).italics());
        }
        LoadPhase::Failed(_) => {
            ui.label(RichText::new(&UI_TEXT.status_failed).color(UI_CONFIG.colors.error));
        }
        LoadPhase::Loaded => {
            let window = engine.window();
            let phase = match engine.timer_phase() {
                TimerPhase::Running => &UI_TEXT.status_running,
                TimerPhase::Idle => &UI_TEXT.status_idle,
            };
            ui.label(RichText::new(phase).color(UI_CONFIG.colors.heading));
            ui.label(format!(
                "{}/{} {} | {} {}",
                engine.visible().len(),
                window.len(),
                UI_TEXT.label_markers,
                UI_TEXT.label_position,
                window.start_index()
            ));
            if skipped > 0 {
                ui.label(
                    RichText::new(format!("{} {}", skipped, UI_TEXT.label_skipped))
                        .color(UI_CONFIG.colors.warning),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::Coordinate, utils::AppInstant};

    fn engine_with(n: usize) -> DisplayEngine {
        let mut engine = DisplayEngine::default();
        let list = (0..n)
            .map(|i| Coordinate::new(i as i64, "1.0", "2.0", "t"))
            .collect();
        engine.finish_load(Ok(list));
        engine
    }

    #[test]
    fn focused_field_keeps_rejected_text() {
        let mut engine = engine_with(10);
        let mut input = "abc".to_string();
        engine.apply(ControlAction::SetVisibleCount(input.clone()), AppInstant::now());
        sync_count_input(&mut input, true, engine.window().visible_count());
        assert_eq!(input, "abc");
        assert_eq!(engine.window().visible_count(), 5);
    }

    #[test]
    fn unfocused_field_snaps_back_to_count_in_use() {
        let mut engine = engine_with(10);
        let mut input = "11".to_string();
        engine.apply(ControlAction::SetVisibleCount(input.clone()), AppInstant::now());
        sync_count_input(&mut input, false, engine.window().visible_count());
        assert_eq!(input, "5");
    }

    #[test]
    fn unfocused_field_shows_accepted_value() {
        let mut engine = engine_with(10);
        let mut input = " 7 ".to_string();
        engine.apply(ControlAction::SetVisibleCount(input.clone()), AppInstant::now());
        sync_count_input(&mut input, false, engine.window().visible_count());
        assert_eq!(input, "7");
    }
}
