//! Store bootstrap: resolve the on-disk location, open the database, and run
//! the one-time schema declaration and reference-data seeding. The rest of
//! the crate receives a ready [`Store`] handle and never worries about
//! upgrade paths.

use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;

use crate::catalog::DEFAULT_EXERCISES;
use crate::db::collections;
use crate::db::store::Store;
use crate::error::{Result, StoreError};
use crate::models::Exercise;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".gym-tracker";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "gym-tracker.sqlite";

/// Current schema version, stamped into `PRAGMA user_version`. A fresh file
/// reads 0, which is what gates collection creation and seeding.
const SCHEMA_VERSION: i32 = 1;

/// Open (creating on first run) the store at its fixed location and make
/// sure the schema and seed data are in place. Idempotent; call once at
/// process start and pass the handle around.
pub fn ensure_ready() -> Result<Store> {
    let db_path = db_path()?;

    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| StoreError::Unavailable(format!("cannot create data directory: {err}")))?;
    }

    let store = Store::open(&db_path)?;
    initialize(&store)?;
    Ok(store)
}

/// Bring a freshly opened store up to the current schema version. Declares
/// the three collections and, only when the store was just created, seeds the
/// default exercise catalog. The whole upgrade runs in a single transaction
/// so a failed bootstrap leaves no half-written store behind.
///
/// Seeding is gated on the creation branch: a store that was initialized
/// before is never re-seeded, even if the user has since deleted every
/// exercise. Catalog changes shipped in later releases therefore never reach
/// existing stores; a known limitation.
pub fn initialize(store: &Store) -> Result<()> {
    let version = store.schema_version()?;
    if version >= SCHEMA_VERSION {
        return Ok(());
    }

    store.batch(|store| {
        store.create_collection(collections::EXERCISES, &["group"])?;
        store.create_collection(collections::PROGRAMS, &[])?;
        store.create_collection(collections::WORKOUTS, &["date"])?;

        if version == 0 && store.count(collections::EXERCISES)? == 0 {
            seed_exercises(store)?;
        }

        store.set_schema_version(SCHEMA_VERSION)
    })?;

    tracing::info!(from = version, to = SCHEMA_VERSION, "store schema initialized");
    Ok(())
}

/// Insert the default catalog. Runs inside the bootstrap transaction, so the
/// seed is all-or-nothing.
fn seed_exercises(store: &Store) -> Result<()> {
    for (name, group) in DEFAULT_EXERCISES {
        let exercise = Exercise {
            id: None,
            name: (*name).to_string(),
            group: group.clone(),
            is_custom: false,
        };
        store.add(collections::EXERCISES, &exercise)?;
    }
    tracing::debug!(count = DEFAULT_EXERCISES.len(), "seeded default exercise catalog");
    Ok(())
}

/// Resolve the absolute path to the database inside the user's home.
fn db_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| StoreError::Unavailable("could not locate home directory".to_string()))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(DB_FILE_NAME))
}
