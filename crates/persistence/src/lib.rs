// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for focusdesk.
//!
//! Each user's aggregate is stored as one JSON document in a single
//! `user_roots` table and is always loaded and saved whole. There is no
//! partial update and no optimistic check: the last save for a user wins.
//! Every save bumps a per-user `revision` counter, which is informational.
//!
//! ## Backend
//!
//! `SQLite` via Diesel. In-memory databases are used for tests and for
//! running without a `--database` path. File databases run in WAL mode.
//! The schema is managed by embedded migrations applied on connect.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use focusdesk::UserRoot;
use focusdesk_domain::UserId;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;

/// Persistence adapter for user documents.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique shared in-memory database, so adapters
    /// never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Loads a user's aggregate.
    ///
    /// A user with no stored document gets an empty aggregate.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored document cannot be
    /// decoded.
    pub fn load_root(&mut self, user_id: &UserId) -> Result<UserRoot, PersistenceError> {
        let Some(stored) = queries::find_root(&mut self.conn, user_id.value())? else {
            debug!(user_id = %user_id, "No stored document, starting empty");
            return Ok(UserRoot::new());
        };

        debug!(
            user_id = %user_id,
            revision = stored.revision,
            updated_at = %stored.updated_at,
            "Loaded user document"
        );
        serde_json::from_str(&stored.document_json).map_err(|e| {
            PersistenceError::CorruptDocument {
                user_id: stored.user_id,
                message: e.to_string(),
            }
        })
    }

    /// Saves a user's whole aggregate, replacing the stored one.
    ///
    /// Returns the new revision of the document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_root(&mut self, user_id: &UserId, root: &UserRoot) -> Result<i64, PersistenceError> {
        let document_json: String = serde_json::to_string(root)?;
        let updated_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

        mutations::store_root(&mut self.conn, user_id.value(), &document_json, &updated_at)
    }

    /// Returns the revision of a user's stored document, or `None` if the
    /// user has never been saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn root_revision(&mut self, user_id: &UserId) -> Result<Option<i64>, PersistenceError> {
        queries::find_root_revision(&mut self.conn, user_id.value())
    }
}
