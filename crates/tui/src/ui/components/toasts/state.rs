//! Toast notification lifetimes.
//!
//! Toasts pass through two timed phases: fully visible, then a short
//! "leaving" phase rendered dimmed so the exit is perceptible before the
//! toast disappears. Phase transitions are driven by deadlines checked on
//! each tick.

use std::time::{Duration, Instant};

use landlord_types::Severity;

/// How long a toast stays fully visible.
pub const TOAST_VISIBLE_FOR: Duration = Duration::from_secs(4);

/// How long the dimmed exit phase lasts before removal.
pub const TOAST_EXIT_FOR: Duration = Duration::from_millis(400);

/// Maximum simultaneously shown toasts; the oldest is dropped beyond this.
pub const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible { until: Instant },
    Leaving { until: Instant },
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn is_leaving(&self) -> bool {
        matches!(self.phase, ToastPhase::Leaving { .. })
    }
}

/// The stack of live toasts, oldest first.
#[derive(Debug, Default)]
pub struct ToastsState {
    toasts: Vec<Toast>,
}

impl ToastsState {
    /// Adds a toast, dropping the oldest when the stack is full.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.remove(0);
        }
        self.toasts.push(Toast {
            message: message.into(),
            severity,
            phase: ToastPhase::Visible {
                until: now + TOAST_VISIBLE_FOR,
            },
        });
    }

    /// Advances phases by deadline. Returns whether anything changed, so the
    /// runtime can skip redraws on idle ticks.
    pub fn advance(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for toast in &mut self.toasts {
            if let ToastPhase::Visible { until } = toast.phase
                && until <= now
            {
                toast.phase = ToastPhase::Leaving {
                    until: now + TOAST_EXIT_FOR,
                };
                changed = true;
            }
        }
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| !matches!(toast.phase, ToastPhase::Leaving { until } if until <= now));
        changed || self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_leaves_before_it_disappears() {
        let start = Instant::now();
        let mut state = ToastsState::default();
        state.push("Saved", Severity::Success, start);

        // Still fully visible just before the deadline.
        assert!(!state.advance(start + TOAST_VISIBLE_FOR - Duration::from_millis(1)));
        assert!(!state.toasts()[0].is_leaving());

        // The visible deadline flips it to the leaving phase, not removal.
        assert!(state.advance(start + TOAST_VISIBLE_FOR));
        assert_eq!(state.toasts().len(), 1);
        assert!(state.toasts()[0].is_leaving());

        // The exit deadline removes it.
        assert!(state.advance(start + TOAST_VISIBLE_FOR + TOAST_EXIT_FOR));
        assert!(state.is_empty());
    }

    #[test]
    fn stack_is_capped_at_the_oldest_end() {
        let start = Instant::now();
        let mut state = ToastsState::default();
        for index in 0..MAX_TOASTS + 2 {
            state.push(format!("toast {index}"), Severity::Info, start);
        }
        assert_eq!(state.toasts().len(), MAX_TOASTS);
        assert_eq!(state.toasts()[0].message, "toast 2");
    }

    #[test]
    fn idle_advance_reports_no_change() {
        let start = Instant::now();
        let mut state = ToastsState::default();
        state.push("hello", Severity::Info, start);
        assert!(!state.advance(start + Duration::from_millis(10)));
    }
}
