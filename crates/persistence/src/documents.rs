// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion between typed entities and opaque documents.

use crate::error::PersistenceError;
use artsfest_domain::{CompetitionCatalog, ResultSet};
use serde_json::Value;

/// Encodes a catalog as a document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_catalog(catalog: &CompetitionCatalog) -> Result<Value, PersistenceError> {
    Ok(serde_json::to_value(catalog)?)
}

/// Decodes a catalog document.
///
/// # Errors
///
/// Returns an error if the document does not have the catalog shape.
pub fn decode_catalog(document: Value) -> Result<CompetitionCatalog, PersistenceError> {
    Ok(serde_json::from_value(document)?)
}

/// Encodes a result set as a document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_results(results: &ResultSet) -> Result<Value, PersistenceError> {
    Ok(serde_json::to_value(results)?)
}

/// Decodes a result set document.
///
/// # Errors
///
/// Returns an error if the document does not have the result set shape.
pub fn decode_results(document: Value) -> Result<ResultSet, PersistenceError> {
    Ok(serde_json::from_value(document)?)
}
