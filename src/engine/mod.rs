mod display;
mod messages;
mod timer;
mod window;

pub use display::{DisplayEngine, LoadPhase, Marker, TimerPhase};
pub use messages::ControlAction;
pub use timer::TickTimer;
pub use window::{SlidingWindow, VisibleCountError};
