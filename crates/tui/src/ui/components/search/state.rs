//! Global search input with a debounced dispatch.
//!
//! Each keystroke cancels any pending dispatch and re-arms one for a quiet
//! period later; only the last keystroke inside the window actually
//! dispatches. The runtime flushes due dispatches from its tick handler, so
//! the state is driven entirely by explicit `Instant`s and stays testable
//! without sleeping.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

/// Quiet period a query must survive before it dispatches.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone)]
struct PendingDispatch {
    query: String,
    deadline: Instant,
}

/// State for the topbar search box.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Current input text.
    pub input: String,
    /// Most recently dispatched query, shown in the content placeholder.
    pub last_query: Option<String>,
    /// Last rendered area, for mouse focus.
    pub last_area: Rect,
    pending: Option<PendingDispatch>,
}

impl SearchState {
    /// Appends a character and re-arms the debounce window.
    pub fn push_char(&mut self, character: char, now: Instant) {
        self.input.push(character);
        self.arm(now);
    }

    /// Removes the last character and re-arms the debounce window.
    pub fn backspace(&mut self, now: Instant) {
        if self.input.pop().is_some() {
            self.arm(now);
        }
    }

    /// Clears the input and cancels any pending dispatch.
    pub fn clear(&mut self) {
        self.input.clear();
        self.pending = None;
    }

    /// Flushes the current input immediately (Enter), bypassing the quiet
    /// period. Cancels the pending dispatch either way.
    pub fn flush_now(&mut self) -> Option<String> {
        self.pending = None;
        let query = self.input.trim();
        if query.is_empty() { None } else { Some(query.to_string()) }
    }

    /// Returns the pending query once its quiet period has elapsed.
    pub fn take_due_dispatch(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|pending| pending.deadline <= now) {
            return self.pending.take().map(|pending| pending.query);
        }
        None
    }

    /// Whether a dispatch is waiting out its quiet period.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn arm(&mut self, now: Instant) {
        let query = self.input.trim();
        if query.is_empty() {
            self.pending = None;
        } else {
            self.pending = Some(PendingDispatch {
                query: query.to_string(),
                deadline: now + SEARCH_DEBOUNCE,
            });
        }
    }
}
