//! Generic record store over an embedded SQLite database. Each collection is
//! a table holding JSON documents keyed by an auto-incremented integer id;
//! secondary lookups go through expression indexes over `json_extract`. The
//! store knows nothing about the domain: typed decoding happens at the
//! repository layer via serde.
//!
//! Every public operation is atomic on its own (SQLite wraps each statement
//! in an implicit transaction); multi-record work such as seeding and import
//! runs inside [`Store::batch`] so it commits or rolls back as a unit.

use std::path::Path;

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};
use crate::models::RecordId;

/// Key under which the store-assigned identifier surfaces inside decoded
/// documents. Stripped before a document is written so the id column stays
/// the single source of truth.
const ID_FIELD: &str = "id";

/// Handle to the underlying database. Constructed once at process start and
/// passed by reference into every repository call; the store assumes a single
/// logical writer and is not meant to be shared across threads.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the database file at `path`.
    pub fn open(path: &Path) -> Result<Store> {
        let conn = Connection::open(path)
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(Store { conn })
    }

    /// Open a throwaway in-memory database. Used by tests and anywhere a
    /// store with no durable backing is useful.
    pub fn open_in_memory() -> Result<Store> {
        let conn = Connection::open_in_memory()
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;
        Ok(Store { conn })
    }

    /// Declare a collection and its secondary indexes. Idempotent: re-running
    /// the declaration against an existing collection is a no-op, which lets
    /// the upgrade path re-issue the full schema on every version bump.
    ///
    /// `AUTOINCREMENT` keeps assigned ids strictly increasing and never
    /// reused, even after deletes.
    pub fn create_collection(&self, name: &str, indexes: &[&str]) -> Result<()> {
        validate_identifier(name)?;
        self.conn
            .execute(
                &format!(
                    "CREATE TABLE IF NOT EXISTS {name} (
                        id INTEGER PRIMARY KEY AUTOINCREMENT,
                        data TEXT NOT NULL
                    )"
                ),
                [],
            )
            .map_err(StoreError::sql("failed to create collection"))?;

        for field in indexes {
            validate_identifier(field)?;
            self.conn
                .execute(
                    &format!(
                        "CREATE INDEX IF NOT EXISTS idx_{name}_{field}
                         ON {name} (json_extract(data, '$.{field}'))"
                    ),
                    [],
                )
                .map_err(StoreError::sql("failed to create collection index"))?;
        }

        Ok(())
    }

    /// Full scan of a collection. Order is unspecified; in practice rows come
    /// back in insertion order, but callers must not rely on it.
    pub fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>> {
        validate_identifier(collection)?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT id, data FROM {collection}"))
            .map_err(StoreError::sql("failed to prepare collection scan"))?;

        let mut rows = stmt
            .query([])
            .map_err(StoreError::sql("failed to execute collection scan"))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(StoreError::sql("failed to fetch record row"))?
        {
            let id: RecordId = row
                .get(0)
                .map_err(StoreError::sql("failed to read record id"))?;
            let data: String = row
                .get(1)
                .map_err(StoreError::sql("failed to read record data"))?;
            records.push(decode(id, &data)?);
        }

        Ok(records)
    }

    /// Look up a single record. Absence is `Ok(None)`, not an error; callers
    /// must check.
    pub fn get_by_id<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: RecordId,
    ) -> Result<Option<T>> {
        validate_identifier(collection)?;
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT data FROM {collection} WHERE id = ?1"))
            .map_err(StoreError::sql("failed to prepare record lookup"))?;

        let mut rows = stmt
            .query(params![id])
            .map_err(StoreError::sql("failed to execute record lookup"))?;

        match rows
            .next()
            .map_err(StoreError::sql("failed to fetch record row"))?
        {
            Some(row) => {
                let data: String = row
                    .get(0)
                    .map_err(StoreError::sql("failed to read record data"))?;
                Ok(Some(decode(id, &data)?))
            }
            None => Ok(None),
        }
    }

    /// Insert a record and return its freshly assigned id. Any id the caller
    /// left on the record is ignored.
    pub fn add<T: Serialize>(&self, collection: &str, record: &T) -> Result<RecordId> {
        validate_identifier(collection)?;
        let (_, data) = encode(record)?;
        self.conn
            .execute(
                &format!("INSERT INTO {collection} (data) VALUES (?1)"),
                params![data],
            )
            .map_err(StoreError::sql("failed to insert record"))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Upsert a record under the id it carries: overwrite in place when the
    /// id exists, insert it when it does not. A record with no id falls back
    /// to the [`Store::add`] path and gets a fresh one. Returns the id the
    /// record now lives under.
    ///
    /// The insert-if-absent half exists for snapshot import, which must be
    /// able to restore records under their original ids; update-only callers
    /// lose the "not found" signal and should look the record up first if
    /// they care.
    pub fn put<T: Serialize>(&self, collection: &str, record: &T) -> Result<RecordId> {
        validate_identifier(collection)?;
        let (id, data) = encode(record)?;
        match id {
            Some(id) => {
                self.conn
                    .execute(
                        &format!(
                            "INSERT INTO {collection} (id, data) VALUES (?1, ?2)
                             ON CONFLICT(id) DO UPDATE SET data = excluded.data"
                        ),
                        params![id, data],
                    )
                    .map_err(StoreError::sql("failed to upsert record"))?;
                Ok(id)
            }
            None => {
                self.conn
                    .execute(
                        &format!("INSERT INTO {collection} (data) VALUES (?1)"),
                        params![data],
                    )
                    .map_err(StoreError::sql("failed to insert record"))?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    /// Delete a record. Deleting an id that does not exist is a successful
    /// no-op, not an error.
    pub fn remove(&self, collection: &str, id: RecordId) -> Result<()> {
        validate_identifier(collection)?;
        self.conn
            .execute(
                &format!("DELETE FROM {collection} WHERE id = ?1"),
                params![id],
            )
            .map_err(StoreError::sql("failed to delete record"))?;
        Ok(())
    }

    /// Number of records in a collection.
    pub fn count(&self, collection: &str) -> Result<usize> {
        validate_identifier(collection)?;
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {collection}"), [], |row| {
                row.get(0)
            })
            .map_err(StoreError::sql("failed to count records"))?;
        Ok(count as usize)
    }

    /// Equality lookup through a secondary index. The expression here must
    /// match the one used in `create_collection` for SQLite to use the index.
    pub fn query_by_index<T: DeserializeOwned>(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<T>> {
        validate_identifier(collection)?;
        validate_identifier(field)?;
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT id, data FROM {collection}
                 WHERE json_extract(data, '$.{field}') = ?1"
            ))
            .map_err(StoreError::sql("failed to prepare index query"))?;

        let mut rows = stmt
            .query(params![value])
            .map_err(StoreError::sql("failed to execute index query"))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(StoreError::sql("failed to fetch record row"))?
        {
            let id: RecordId = row
                .get(0)
                .map_err(StoreError::sql("failed to read record id"))?;
            let data: String = row
                .get(1)
                .map_err(StoreError::sql("failed to read record data"))?;
            records.push(decode(id, &data)?);
        }

        Ok(records)
    }

    /// Run `op` inside one explicit transaction: everything it writes commits
    /// together or not at all. Statements issued through the shared
    /// connection join the open transaction, so the closure just uses the
    /// store's normal operations; dropping the transaction on error rolls
    /// everything back. Sound because the store has a single logical writer.
    pub fn batch<T>(&self, op: impl FnOnce(&Store) -> Result<T>) -> Result<T> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(StoreError::sql("failed to begin transaction"))?;
        let out = op(self)?;
        tx.commit()
            .map_err(StoreError::sql("failed to commit transaction"))?;
        Ok(out)
    }

    /// Current schema version (`PRAGMA user_version`; 0 for a fresh file).
    pub(crate) fn schema_version(&self) -> Result<i32> {
        self.conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .map_err(StoreError::sql("failed to read schema version"))
    }

    pub(crate) fn set_schema_version(&self, version: i32) -> Result<()> {
        self.conn
            .pragma_update(None, "user_version", version)
            .map_err(StoreError::sql("failed to set schema version"))
    }
}

/// Serialize a record to its stored document, splitting off any id it
/// carries. Records must encode to JSON objects; that is what every
/// collection holds.
fn encode<T: Serialize>(record: &T) -> Result<(Option<RecordId>, String)> {
    let value = serde_json::to_value(record)?;
    let mut fields = match value {
        Value::Object(fields) => fields,
        _ => {
            return Err(StoreError::Encoding(serde::ser::Error::custom(
                "record must serialize to a JSON object",
            )))
        }
    };
    let id = take_id(&mut fields);
    let data = serde_json::to_string(&Value::Object(fields))?;
    Ok((id, data))
}

/// Deserialize a stored document, re-attaching the id from the key column.
fn decode<T: DeserializeOwned>(id: RecordId, data: &str) -> Result<T> {
    let mut value: Value = serde_json::from_str(data)?;
    if let Value::Object(fields) = &mut value {
        fields.insert(ID_FIELD.to_string(), Value::from(id));
    }
    Ok(serde_json::from_value(value)?)
}

fn take_id(fields: &mut Map<String, Value>) -> Option<RecordId> {
    match fields.remove(ID_FIELD) {
        Some(Value::Number(n)) => n.as_i64(),
        _ => None,
    }
}

/// Collection and index names are spliced into DDL and queries, so they are
/// restricted to plain identifiers.
fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}
