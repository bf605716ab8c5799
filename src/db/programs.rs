//! Program repository: pass-through CRUD over the `programs` collection.
//! Denormalizing exercise snapshots into a program happens at authoring time
//! in the caller; this layer stores exactly what it is given.

use crate::db::collections;
use crate::db::store::Store;
use crate::error::Result;
use crate::models::{Program, RecordId};

pub fn fetch_programs(store: &Store) -> Result<Vec<Program>> {
    store.get_all(collections::PROGRAMS)
}

pub fn fetch_program(store: &Store, id: RecordId) -> Result<Option<Program>> {
    store.get_by_id(collections::PROGRAMS, id)
}

/// Insert a new program and return it hydrated with its assigned id.
pub fn create_program(store: &Store, mut program: Program) -> Result<Program> {
    let id = store.add(collections::PROGRAMS, &program)?;
    program.id = Some(id);
    Ok(program)
}

/// Persist edits to a program. Upsert semantics, like every update path.
pub fn update_program(store: &Store, program: &Program) -> Result<()> {
    store.put(collections::PROGRAMS, program)?;
    Ok(())
}

pub fn delete_program(store: &Store, id: RecordId) -> Result<()> {
    store.remove(collections::PROGRAMS, id)
}
