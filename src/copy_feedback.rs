//! "Copied" indicator of the copy button.
//!
//! The indicator is raised by a click and lowered by a one-shot timer. The
//! timer handle is owned by whoever arms it; dropping the handle cancels the
//! reset, which is what happens when the button unmounts first.

use gloo_timers::callback::Timeout;

/// One-shot timer that is cancelled when dropped.
pub trait ResetTimer: Sized {
    fn start(delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> Self;
}

impl ResetTimer for Timeout {
    fn start(delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> Self {
        Timeout::new(delay_ms, on_fire)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
}

impl CopyFeedback {
    pub fn is_copied(self) -> bool {
        self.copied
    }

    /// Raises the indicator and returns the clipboard payload, which is
    /// exactly the text on display. Clicking while already raised leaves the
    /// state unchanged, so a running reset is not restarted.
    pub fn click(&mut self, displayed: &str) -> String {
        self.copied = true;
        displayed.to_string()
    }

    pub fn reset(&mut self) {
        self.copied = false;
    }

    /// Arms the reset for the current state. Nothing is armed while lowered.
    pub fn arm_reset<T: ResetTimer>(self, reset_ms: u32, on_reset: impl FnOnce() + 'static) -> Option<T> {
        self.copied.then(|| T::start(reset_ms, Box::new(on_reset)))
    }
}
