//! Debounced persistence for the workout being edited. Rapid edits (typing a
//! weight, then the reps) collapse into a single write once the burst goes
//! quiet; intermediate states are never written. A crash inside the window
//! loses only the most recent unsaved edit, since the workout row itself was
//! already persisted at session start.
//!
//! There is no timer thread: the saver keeps exactly one pending save with a
//! deadline, and the caller's event loop drives it by polling. Scheduling a
//! new save supersedes the previous one; earlier scheduled saves are
//! discarded before they ever fire.

use std::time::{Duration, Instant};

use crate::db::{save_workout, Store};
use crate::error::Result;
use crate::models::Workout;

/// Quiescence window: how long a burst of edits must stay quiet before the
/// pending state is written.
pub const AUTOSAVE_WINDOW: Duration = Duration::from_millis(500);

/// One workout waiting to be written, and when it becomes due.
struct PendingSave {
    workout: Workout,
    due: Instant,
}

/// Debounced saver for the single workout under edit. The UI is
/// single-focus, so one pending slot is all that is ever needed.
pub struct Autosaver {
    window: Duration,
    pending: Option<PendingSave>,
}

impl Autosaver {
    pub fn new() -> Autosaver {
        Autosaver::with_window(AUTOSAVE_WINDOW)
    }

    /// Build a saver with a custom quiescence window. Tests shrink it so
    /// they do not wait out the real half second.
    pub fn with_window(window: Duration) -> Autosaver {
        Autosaver {
            window,
            pending: None,
        }
    }

    /// Record the latest state of the workout and reset the deadline. Any
    /// previously scheduled save is replaced, not queued.
    pub fn schedule(&mut self, workout: Workout) {
        self.pending = Some(PendingSave {
            workout,
            due: Instant::now() + self.window,
        });
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Persist the pending save if its quiet window has elapsed. Returns
    /// whether a write happened. Call this from the event loop tick.
    pub fn poll(&mut self, store: &Store) -> Result<bool> {
        match &self.pending {
            Some(pending) if Instant::now() >= pending.due => self.flush(store),
            _ => Ok(false),
        }
    }

    /// Persist the pending save immediately, deadline or not. Used when the
    /// session is finished or the editor is left. A failed write surfaces to
    /// the caller and the pending state is dropped; there is no automatic
    /// retry, the next edit simply schedules again.
    pub fn flush(&mut self, store: &Store) -> Result<bool> {
        match self.pending.take() {
            Some(pending) => {
                save_workout(store, &pending.workout)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl Default for Autosaver {
    fn default() -> Autosaver {
        Autosaver::new()
    }
}
