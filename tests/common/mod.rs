//! Shared helpers for the integration suites.

use gym_tracker::db::initialize;
use gym_tracker::models::{ExerciseRef, MuscleGroup};
use gym_tracker::Store;

/// A fully bootstrapped in-memory store: collections declared and the
/// default catalog seeded, exactly as `ensure_ready` would leave a fresh
/// on-disk store.
pub fn test_store() -> Store {
    let store = Store::open_in_memory().expect("in-memory store");
    initialize(&store).expect("bootstrap");
    store
}

/// A snapshot reference for tests that need one without caring about the
/// underlying exercise.
#[allow(dead_code)]
pub fn squat_ref() -> ExerciseRef {
    ExerciseRef {
        id: 1,
        name: "Barbell Squat".to_string(),
        group: MuscleGroup::Legs,
    }
}
