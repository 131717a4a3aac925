// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::documents;
use diesel::prelude::*;

/// A stored document as read back from the database.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = documents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DocumentRow {
    pub collection: String,
    pub doc_key: String,
    pub body: String,
    pub updated_at: String,
}

/// A document about to be written, replacing any row with the same key.
#[derive(Debug, Insertable)]
#[diesel(table_name = documents)]
pub struct NewDocument<'a> {
    pub collection: &'a str,
    pub doc_key: &'a str,
    pub body: &'a str,
    pub updated_at: &'a str,
}
