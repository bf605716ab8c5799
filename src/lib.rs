//! Core library surface for the Gym Tracker's on-device persistence.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the UI layer can reuse the same pieces: open the
//! store once with [`ensure_ready`], run typed queries through the `db`
//! repository functions, and move whole-store snapshots through [`backup`].
pub mod autosave;
pub mod backup;
pub mod catalog;
pub mod db;
pub mod error;
pub mod models;

/// Convenience re-exports for the persistence layer. `ensure_ready` is
/// typically the first call a process makes; the returned handle is passed by
/// reference into everything else.
pub use db::{ensure_ready, Store};
pub use error::{Result, StoreError};

/// The primary domain types that other layers manipulate.
pub use models::{Exercise, MuscleGroup, Program, Workout};

/// The debounced saver for the workout being edited.
pub use autosave::Autosaver;
