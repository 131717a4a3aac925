// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::data_models::NewDocument;
use crate::diesel_schema::documents;
use crate::error::PersistenceError;
use diesel::prelude::*;
use diesel::SqliteConnection;

/// Writes a document, replacing any existing row with the same key.
///
/// # Errors
///
/// Returns an error if the statement fails.
pub fn write_document(
    conn: &mut SqliteConnection,
    document: &NewDocument<'_>,
) -> Result<(), PersistenceError> {
    diesel::replace_into(documents::table)
        .values(document)
        .execute(conn)?;
    Ok(())
}
