//! Platform collaborators
//!
//! Everything the core needs from the outside world:
//! - Time (milliseconds between ticks)
//! - Input events (pointer motion, quit)
//! - A window with a presentable pixel surface

pub mod clock;
pub mod input;
pub mod window;

pub use clock::{FrameClock, SystemClock};
pub use input::{InputEvent, collect_tick_input, window_to_frame};
pub use window::{App, WindowSurface, run};
