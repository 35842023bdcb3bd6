// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;

use crate::diesel_schema::user_roots;
use crate::error::PersistenceError;

/// Diesel Queryable struct for stored user documents.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = user_roots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoredRoot {
    pub user_id: String,
    pub document_json: String,
    pub revision: i64,
    pub updated_at: String,
}

/// Retrieves the stored document of a user, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_root(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<StoredRoot>, PersistenceError> {
    Ok(user_roots::table
        .filter(user_roots::user_id.eq(user_id))
        .select(StoredRoot::as_select())
        .first::<StoredRoot>(conn)
        .optional()?)
}

/// Retrieves the revision of a user's stored document, if any.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn find_root_revision(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Option<i64>, PersistenceError> {
    Ok(user_roots::table
        .filter(user_roots::user_id.eq(user_id))
        .select(user_roots::revision)
        .first::<i64>(conn)
        .optional()?)
}
