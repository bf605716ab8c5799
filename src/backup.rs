//! Whole-store export and import. The snapshot document is the wire contract
//! for backup and restore: three top-level arrays, record shapes identical to
//! the stored documents, ids included. It must stay stable across versions
//! so old backups keep restoring.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{collections, Store};
use crate::error::{Result, StoreError};
use crate::models::{Exercise, Program, Workout};

/// The top-level collection keys every snapshot must carry, each holding an
/// array.
const SNAPSHOT_KEYS: [&str; 3] = ["exercises", "programs", "workouts"];

/// A complete, portable copy of the store's contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub exercises: Vec<Exercise>,
    pub programs: Vec<Program>,
    pub workouts: Vec<Workout>,
}

/// How many records an import wrote per collection, for the caller's
/// confirmation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportCounts {
    pub exercises: usize,
    pub programs: usize,
    pub workouts: usize,
}

/// Copy every collection into a snapshot, ids included.
///
/// The three scans run one after another without a covering transaction; a
/// write landing between them could skew the copy, which is acceptable for a
/// single-writer, user-initiated, foreground operation.
pub fn export_all(store: &Store) -> Result<Snapshot> {
    let snapshot = Snapshot {
        exercises: store.get_all(collections::EXERCISES)?,
        programs: store.get_all(collections::PROGRAMS)?,
        workouts: store.get_all(collections::WORKOUTS)?,
    };
    tracing::debug!(
        exercises = snapshot.exercises.len(),
        programs = snapshot.programs.len(),
        workouts = snapshot.workouts.len(),
        "exported snapshot"
    );
    Ok(snapshot)
}

/// Export the store as the pretty-printed snapshot document.
pub fn export_json(store: &Store) -> Result<String> {
    let snapshot = export_all(store)?;
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Restore a snapshot by upserting every record under its snapshot id, all
/// inside one transaction.
///
/// Import is additive and overwriting, never destructive: records whose id
/// already exists are overwritten in place, new ids are inserted, and
/// existing records absent from the snapshot are left alone. Re-importing
/// the same snapshot is therefore idempotent. Callers wanting a clean
/// replace must clear the collections themselves first; this service never
/// deletes on its own.
pub fn import_all(store: &Store, snapshot: &Snapshot) -> Result<ImportCounts> {
    store.batch(|store| {
        for exercise in &snapshot.exercises {
            store.put(collections::EXERCISES, exercise)?;
        }
        for program in &snapshot.programs {
            store.put(collections::PROGRAMS, program)?;
        }
        for workout in &snapshot.workouts {
            store.put(collections::WORKOUTS, workout)?;
        }
        Ok(())
    })?;

    let counts = ImportCounts {
        exercises: snapshot.exercises.len(),
        programs: snapshot.programs.len(),
        workouts: snapshot.workouts.len(),
    };
    tracing::info!(
        exercises = counts.exercises,
        programs = counts.programs,
        workouts = counts.workouts,
        "imported snapshot"
    );
    Ok(counts)
}

/// Parse and restore a snapshot document. Shape validation runs to
/// completion before the first write, so a malformed document leaves the
/// store untouched.
pub fn import_json(store: &Store, text: &str) -> Result<ImportCounts> {
    let snapshot = parse_snapshot(text)?;
    import_all(store, &snapshot)
}

/// Validate the snapshot document's shape and decode it. Every failure mode
/// here is `MalformedSnapshot`; the store has not been touched yet.
fn parse_snapshot(text: &str) -> Result<Snapshot> {
    let document: Value = serde_json::from_str(text)
        .map_err(|err| StoreError::MalformedSnapshot(format!("not valid JSON: {err}")))?;

    let fields = document.as_object().ok_or_else(|| {
        StoreError::MalformedSnapshot("top level must be an object".to_string())
    })?;

    for key in SNAPSHOT_KEYS {
        match fields.get(key) {
            None => {
                return Err(StoreError::MalformedSnapshot(format!(
                    "missing `{key}` collection"
                )))
            }
            Some(Value::Array(_)) => {}
            Some(_) => {
                return Err(StoreError::MalformedSnapshot(format!(
                    "`{key}` must be an array"
                )))
            }
        }
    }

    serde_json::from_value(document)
        .map_err(|err| StoreError::MalformedSnapshot(err.to_string()))
}

/// Conventional backup file name embedding the calendar date of the export.
pub fn backup_file_name(date: &str) -> String {
    format!("gym-tracker-backup-{date}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_file_name_embeds_the_date() {
        assert_eq!(
            backup_file_name("2024-11-03"),
            "gym-tracker-backup-2024-11-03.json"
        );
    }

    #[test]
    fn parse_rejects_missing_collection() {
        let err = parse_snapshot(r#"{"exercises": [], "programs": []}"#).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSnapshot(_)));
    }

    #[test]
    fn parse_rejects_non_array_collection() {
        let err =
            parse_snapshot(r#"{"exercises": {}, "programs": [], "workouts": []}"#).unwrap_err();
        assert!(matches!(err, StoreError::MalformedSnapshot(_)));
    }

    #[test]
    fn parse_tolerates_extra_top_level_keys() {
        let snapshot = parse_snapshot(
            r#"{"exercises": [], "programs": [], "workouts": [], "version": 1}"#,
        )
        .unwrap();
        assert!(snapshot.exercises.is_empty());
    }
}
