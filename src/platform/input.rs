//! Input events from the window collaborator

use glam::DVec2;

use crate::sim::TickInput;

/// Window input the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Close button, Escape, or any other shutdown request
    Quit,
    /// Pointer position in screen pixels
    PointerMoved { x: f64, y: f64 },
}

/// Fold one tick's events: the latest pointer position wins, any quit sticks
pub fn collect_tick_input<I>(events: I) -> TickInput
where
    I: IntoIterator<Item = InputEvent>,
{
    events
        .into_iter()
        .fold(TickInput::default(), |mut input, event| {
            match event {
                InputEvent::Quit => input.quit = true,
                InputEvent::PointerMoved { x, y } => input.pointer = Some(DVec2::new(x, y)),
            }
            input
        })
}

/// Map a pointer position in window pixels onto the framebuffer
///
/// The frame is stretched over the whole window, so each axis scales by
/// `frame / window`. A zero-sized window leaves the position unchanged.
pub fn window_to_frame(x: f64, y: f64, window: (u32, u32), frame: (u32, u32)) -> (f64, f64) {
    let scale = |v: f64, window: u32, frame: u32| {
        if window == 0 {
            v
        } else {
            v * frame as f64 / window as f64
        }
    };
    (scale(x, window.0, frame.0), scale(y, window.1, frame.1))
}
