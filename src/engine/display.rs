use std::time::Duration;

use strum_macros::Display;

use crate::{
    config::{DF, WINDOW},
    domain::{Coordinate, CoordinateError, GeoPoint},
    engine::{ControlAction, SlidingWindow, TickTimer, VisibleCountError},
    utils::AppInstant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TimerPhase {
    Idle,
    Running,
}

/// Where the one-shot coordinate fetch is at.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Loading,
    Loaded,
    Failed(String),
}

/// A visible coordinate that parsed into a map position.
#[derive(Debug, Clone, Copy)]
pub struct Marker<'a> {
    pub point: GeoPoint,
    pub coordinate: &'a Coordinate,
}

/// Owns every piece of display state: the window, the timer handle, and the load phase.
/// UI code only reads from it and feeds it `ControlAction`s.
#[derive(Debug)]
pub struct DisplayEngine {
    window: SlidingWindow,
    timer: Option<TickTimer>,
    load: LoadPhase,
    tick_period: Duration,
}

impl Default for DisplayEngine {
    fn default() -> Self {
        Self::new(WINDOW.default_visible_count, WINDOW.tick_period)
    }
}

impl DisplayEngine {
    pub fn new(visible_count: usize, tick_period: Duration) -> Self {
        Self {
            window: SlidingWindow::new(visible_count),
            timer: None,
            load: LoadPhase::Loading,
            tick_period,
        }
    }

    /// Accept the result of the initial fetch. Only the first result counts;
    /// the list is never replaced afterwards.
    pub fn finish_load(&mut self, result: anyhow::Result<Vec<Coordinate>>) {
        if self.load != LoadPhase::Loading {
            log::warn!("Ignoring second coordinate load; list is loaded once per session");
            return;
        }
        self.load = match result {
            Ok(coordinates) => {
                if DF.log_fetch {
                    log::info!("Loaded {} coordinates", coordinates.len());
                }
                self.window.load(coordinates);
                LoadPhase::Loaded
            }
            Err(e) => {
                log::error!("Error fetching coordinates: {:#}", e);
                LoadPhase::Failed(format!("{:#}", e))
            }
        };
    }

    /// Returns false if a timer was already running (nothing changes in that case).
    pub fn start(&mut self, now: AppInstant) -> bool {
        if self.timer.is_some() {
            return false;
        }
        self.timer = Some(TickTimer::start(now, self.tick_period));
        true
    }

    /// Drops the timer but keeps the window position, so a later start continues from here.
    pub fn stop(&mut self) -> bool {
        self.timer.take().is_some()
    }

    pub fn reset(&mut self) {
        self.window.reset();
    }

    pub fn set_visible_count(&mut self, input: &str) -> Result<usize, VisibleCountError> {
        self.window.set_visible_count(input)
    }

    pub fn apply(&mut self, action: ControlAction, now: AppInstant) {
        if DF.log_controls {
            log::info!("Control: {:?} (timer {})", action, self.timer_phase());
        }
        match action {
            ControlAction::Start => {
                self.start(now);
            }
            ControlAction::Stop => {
                self.stop();
            }
            ControlAction::Reset => self.reset(),
            ControlAction::SetVisibleCount(text) => {
                if let Err(_e) = self.set_visible_count(&text) {
                    if DF.log_controls {
                        log::info!("Rejected visible count: {}", _e);
                    }
                }
            }
        }
    }

    /// Apply every tick that has come due. Call once per frame.
    pub fn poll_timer(&mut self, now: AppInstant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let due = timer.take_due(now);
        if due > 0 {
            let before = self.window.start_index();
            self.window.advance_by(due);
            if DF.log_window_ticks {
                log::info!(
                    "Tick x{}: start {} -> {}",
                    due,
                    before,
                    self.window.start_index()
                );
            }
        }
        due
    }

    /// Time left until the next advance, if running. Used to schedule the next repaint.
    pub fn until_next_tick(&self, now: AppInstant) -> Option<Duration> {
        self.timer.as_ref().map(|t| t.remaining(now))
    }

    pub fn timer_phase(&self) -> TimerPhase {
        if self.timer.is_some() {
            TimerPhase::Running
        } else {
            TimerPhase::Idle
        }
    }

    pub fn load_phase(&self) -> &LoadPhase {
        &self.load
    }

    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    pub fn visible(&self) -> &[Coordinate] {
        self.window.visible()
    }

    /// Visible coordinates converted to map positions. Ones that fail to parse come back
    /// as `Err((id, reason))` so the caller can log and skip them.
    pub fn visible_markers(
        &self,
    ) -> impl Iterator<Item = Result<Marker<'_>, (i64, CoordinateError)>> + '_ {
        self.window.visible().iter().map(|coordinate| {
            GeoPoint::try_from(coordinate)
                .map(|point| Marker { point, coordinate })
                .map_err(|e| (coordinate.id, e))
        })
    }

    /// Release the timer when the view goes away.
    pub fn teardown(&mut self) {
        if self.stop() {
            log::info!("Display torn down while running; timer cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use assert_matches::assert_matches;

    const SEC: Duration = Duration::from_secs(1);

    fn coords(n: usize) -> Vec<Coordinate> {
        (1..=n)
            .map(|i| {
                Coordinate::new(
                    i as i64,
                    &format!("{}.0", 10 * i),
                    &format!("{}.0", 20 * i),
                    &format!("t{}", i),
                )
            })
            .collect()
    }

    fn loaded(n: usize) -> DisplayEngine {
        let mut engine = DisplayEngine::default();
        engine.finish_load(Ok(coords(n)));
        engine
    }

    #[test]
    fn defaults_before_load() {
        let engine = DisplayEngine::default();
        assert_eq!(engine.load_phase(), &LoadPhase::Loading);
        assert_eq!(engine.timer_phase(), TimerPhase::Idle);
        assert_eq!(engine.window().visible_count(), 5);
        assert!(engine.visible().is_empty());
    }

    #[test]
    fn initial_load_shows_first_window_in_order() {
        let engine = loaded(5);
        assert_eq!(engine.load_phase(), &LoadPhase::Loaded);
        assert_eq!(engine.window().start_index(), 0);
        let ids: Vec<i64> = engine.visible().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let first = engine.visible_markers().next().unwrap().unwrap();
        assert_eq!(first.point, GeoPoint { lat: 10.0, lon: 20.0 });
        assert_eq!(first.coordinate.time_stamp, "t1");
    }

    #[test]
    fn failed_load_leaves_nothing_to_render() {
        let mut engine = DisplayEngine::default();
        engine.finish_load(Err(anyhow!("connection refused")));
        assert_matches!(engine.load_phase(), LoadPhase::Failed(msg) if msg.contains("refused"));
        assert!(engine.window().is_empty());
        assert_eq!(engine.visible_markers().count(), 0);

        // Controls still work, they just have nothing to move.
        let t0 = AppInstant::now();
        assert!(engine.start(t0));
        assert_eq!(engine.poll_timer(t0 + 3 * SEC), 3);
        assert_eq!(engine.window().start_index(), 0);
    }

    #[test]
    fn second_load_is_ignored() {
        let mut engine = loaded(5);
        engine.finish_load(Ok(coords(9)));
        assert_eq!(engine.window().len(), 5);
    }

    #[test]
    fn start_twice_keeps_a_single_timer() {
        let t0 = AppInstant::now();
        let mut engine = loaded(10);
        assert!(engine.start(t0));
        assert!(!engine.start(t0 + Duration::from_millis(500)));
        assert_eq!(engine.timer_phase(), TimerPhase::Running);

        // A replaced timer would first fire at 1.5s; the first one fires at 1s.
        assert_eq!(engine.poll_timer(t0 + SEC), 1);
        assert_eq!(engine.poll_timer(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(engine.poll_timer(t0 + 2 * SEC), 1);
        assert_eq!(engine.window().start_index(), 2);
    }

    #[test]
    fn stop_when_idle_is_a_no_op() {
        let mut engine = loaded(10);
        assert!(!engine.stop());
        assert_eq!(engine.timer_phase(), TimerPhase::Idle);
        assert_eq!(engine.window().start_index(), 0);
    }

    #[test]
    fn stop_preserves_position_and_start_resumes() {
        let t0 = AppInstant::now();
        let mut engine = loaded(10);
        engine.start(t0);
        engine.poll_timer(t0 + 3 * SEC);
        assert!(engine.stop());
        assert_eq!(engine.poll_timer(t0 + 10 * SEC), 0);
        assert_eq!(engine.window().start_index(), 3);

        let t1 = t0 + 20 * SEC;
        engine.start(t1);
        engine.poll_timer(t1 + SEC);
        assert_eq!(engine.window().start_index(), 4);
    }

    #[test]
    fn reset_keeps_timer_state() {
        let t0 = AppInstant::now();
        let mut running = loaded(10);
        running.start(t0);
        running.poll_timer(t0 + 4 * SEC);
        running.reset();
        assert_eq!(running.window().start_index(), 0);
        assert_eq!(running.timer_phase(), TimerPhase::Running);

        let mut idle = loaded(10);
        idle.reset();
        assert_eq!(idle.timer_phase(), TimerPhase::Idle);
    }

    #[test]
    fn ticks_wrap_around() {
        let t0 = AppInstant::now();
        let mut engine = loaded(8);
        engine.start(t0);
        let mut seen = vec![engine.window().start_index()];
        for k in 1..=8u32 {
            engine.poll_timer(t0 + k * SEC);
            seen.push(engine.window().start_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn apply_routes_controls() {
        let t0 = AppInstant::now();
        let mut engine = loaded(10);

        for text in ["0", "-3", "11", "abc"] {
            engine.apply(ControlAction::SetVisibleCount(text.into()), t0);
            assert_eq!(engine.window().visible_count(), 5);
        }
        engine.apply(ControlAction::SetVisibleCount("7".into()), t0);
        assert_eq!(engine.window().visible_count(), 7);

        engine.apply(ControlAction::Start, t0);
        assert_eq!(engine.until_next_tick(t0), Some(SEC));
        engine.apply(ControlAction::Stop, t0);
        assert_eq!(engine.until_next_tick(t0), None);
    }

    #[test]
    fn unparseable_coordinates_are_reported_not_rendered() {
        let mut list = coords(3);
        list[1].lateral = "n/a".to_string();
        let mut engine = DisplayEngine::default();
        engine.finish_load(Ok(list));

        let (ok, bad): (Vec<_>, Vec<_>) = engine.visible_markers().partition(|m| m.is_ok());
        assert_eq!(ok.len(), 2);
        assert_matches!(bad.as_slice(), [Err((2, CoordinateError::InvalidLatitude(_)))]);
    }

    #[test]
    fn teardown_cancels_timer() {
        let t0 = AppInstant::now();
        let mut engine = loaded(10);
        engine.start(t0);
        engine.teardown();
        assert_eq!(engine.timer_phase(), TimerPhase::Idle);
        assert_eq!(engine.poll_timer(t0 + 5 * SEC), 0);
    }
}
