// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DEFAULT_COLLECTION, DocumentKey, DocumentStore, Persistence, PersistenceError};
use serde_json::json;

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_default_collection() {
    let persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.collection(), DEFAULT_COLLECTION);

    let renamed: Persistence = persistence.with_collection("festival-2026");
    assert_eq!(renamed.collection(), "festival-2026");
}

#[tokio::test]
async fn test_multiple_in_memory_instances_are_isolated() {
    let db1: Persistence = Persistence::new_in_memory().unwrap();
    let db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.write(DocumentKey::Competitions, json!({ "LP": ["Song"] }))
        .await
        .unwrap();

    assert!(db1.read(DocumentKey::Competitions).await.unwrap().is_some());
    assert!(
        db2.read(DocumentKey::Competitions).await.unwrap().is_none(),
        "db2 should not see db1's documents"
    );
}

#[tokio::test]
async fn test_migrations_applied_on_initialization() {
    // If migrations didn't run, the documents table wouldn't exist and this would fail
    let persistence: Persistence = Persistence::new_in_memory().unwrap();

    let result: Result<Vec<String>, PersistenceError> = persistence.list_document_keys().await;

    assert!(
        result.is_ok(),
        "Migrations must have applied for documents table to exist"
    );
    assert!(result.unwrap().is_empty());
}
