//! Single-shot settle timers.

/// A single-shot timer used to debounce rapid opposing events.
///
/// Re-arming replaces any pending deadline; a deadline that passes without
/// being re-armed fires exactly once and is not rescheduled.
#[derive(Debug, Clone, Default)]
pub struct SettleTimer {
    remaining_ms: Option<f32>,
}

impl SettleTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn arm(&mut self, delay_ms: f32) {
        self.remaining_ms = Some(delay_ms.max(0.0));
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Advance by `dt_ms`. Returns true on the step where the deadline
    /// passes.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };
        let remaining = remaining - dt_ms.max(0.0);
        if remaining <= 0.0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(remaining);
            false
        }
    }
}
