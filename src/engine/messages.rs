/// What the controls bar asks the display engine to do this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlAction {
    Start,
    Stop,
    Reset,
    /// Raw text from the visible-count input; validated by the window.
    SetVisibleCount(String),
}
