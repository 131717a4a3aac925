// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::DocumentRow;
use crate::diesel_schema::documents;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Reads one document, or `None` if it has never been written.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn read_document(
    conn: &mut SqliteConnection,
    collection: &str,
    doc_key: &str,
) -> Result<Option<DocumentRow>, PersistenceError> {
    documents::table
        .filter(documents::collection.eq(collection))
        .filter(documents::doc_key.eq(doc_key))
        .select(DocumentRow::as_select())
        .first(conn)
        .optional()
        .map_err(Into::into)
}

/// Lists the keys stored in a collection, in key order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_document_keys(
    conn: &mut SqliteConnection,
    collection: &str,
) -> Result<Vec<String>, PersistenceError> {
    documents::table
        .filter(documents::collection.eq(collection))
        .select(documents::doc_key)
        .order(documents::doc_key.asc())
        .load::<String>(conn)
        .map_err(Into::into)
}
