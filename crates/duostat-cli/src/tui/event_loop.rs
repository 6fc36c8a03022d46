use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// The form recomputes only on input, so the loop alternates between the
/// two event kinds: emit `Render` while the screen is dirty, otherwise
/// block on the terminal. Every terminal event marks the screen dirty
/// again, so each input is followed by exactly one render.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        self.dirty = true;
        Ok(event::read()?.into())
    }
}
