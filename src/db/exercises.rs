//! Exercise repository: a typed façade over the `exercises` collection. No
//! validation happens here; an empty name or odd group value is stored as
//! given, and store-level failures propagate unchanged.

use std::collections::BTreeMap;

use crate::db::collections;
use crate::db::store::Store;
use crate::error::Result;
use crate::models::{Exercise, MuscleGroup, RecordId};

/// Fetch every exercise, seeded and user-created alike.
pub fn fetch_exercises(store: &Store) -> Result<Vec<Exercise>> {
    store.get_all(collections::EXERCISES)
}

/// Look up one exercise. Absence is `Ok(None)`.
pub fn fetch_exercise(store: &Store, id: RecordId) -> Result<Option<Exercise>> {
    store.get_by_id(collections::EXERCISES, id)
}

/// Insert a user-created exercise, returning the hydrated struct so callers
/// can update their state without re-querying. Everything entered through
/// this path is marked custom; only the seed path writes `is_custom = false`.
pub fn create_exercise(store: &Store, name: &str, group: MuscleGroup) -> Result<Exercise> {
    let mut exercise = Exercise {
        id: None,
        name: name.to_string(),
        group,
        is_custom: true,
    };
    let id = store.add(collections::EXERCISES, &exercise)?;
    exercise.id = Some(id);
    Ok(exercise)
}

/// Persist edits to an exercise (rename, regroup). Upsert semantics: an
/// exercise whose id is no longer present is written back rather than
/// rejected, so there is no "not found" signal here.
pub fn update_exercise(store: &Store, exercise: &Exercise) -> Result<()> {
    store.put(collections::EXERCISES, exercise)?;
    Ok(())
}

/// Delete an exercise. Programs and workouts that snapshotted it keep their
/// copies; nothing cascades.
pub fn delete_exercise(store: &Store, id: RecordId) -> Result<()> {
    store.remove(collections::EXERCISES, id)
}

/// Partition all exercises by muscle group for the grouped picker views.
///
/// Every group in the fixed enumeration gets a bucket, empty ones included;
/// exercises carrying a group outside the enumeration are dropped rather than
/// surfaced in a catch-all bucket.
pub fn fetch_exercises_grouped(store: &Store) -> Result<BTreeMap<MuscleGroup, Vec<Exercise>>> {
    let mut grouped: BTreeMap<MuscleGroup, Vec<Exercise>> = MuscleGroup::FIXED
        .into_iter()
        .map(|group| (group, Vec::new()))
        .collect();

    for exercise in fetch_exercises(store)? {
        if let Some(bucket) = grouped.get_mut(&exercise.group) {
            bucket.push(exercise);
        }
    }

    Ok(grouped)
}
