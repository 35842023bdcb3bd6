// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::user_roots;
use crate::error::PersistenceError;
use crate::queries::find_root_revision;

/// Diesel Insertable struct for user documents.
#[derive(Insertable)]
#[diesel(table_name = user_roots)]
struct NewStoredRoot<'a> {
    user_id: &'a str,
    document_json: &'a str,
    revision: i64,
    updated_at: &'a str,
}

/// Writes a user's document, replacing any previous one.
///
/// The revision starts at 1 and increases by one on every write. Writes are
/// unconditional: the last writer wins.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `user_id` - The owner of the document
/// * `document_json` - The serialized aggregate
/// * `updated_at` - RFC 3339 timestamp of the write
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn store_root(
    conn: &mut SqliteConnection,
    user_id: &str,
    document_json: &str,
    updated_at: &str,
) -> Result<i64, PersistenceError> {
    conn.transaction::<i64, PersistenceError, _>(|conn| {
        let revision: i64 = find_root_revision(conn, user_id)?
            .map_or(1, |current| current.saturating_add(1));

        diesel::replace_into(user_roots::table)
            .values(&NewStoredRoot {
                user_id,
                document_json,
                revision,
                updated_at,
            })
            .execute(conn)?;

        debug!(user_id, revision, "Stored user document");
        Ok(revision)
    })
}
