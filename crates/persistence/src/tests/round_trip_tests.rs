// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_catalog, create_test_results};
use crate::{
    DocumentKey, DocumentStore, Persistence, decode_catalog, decode_results, encode_catalog,
    encode_results,
};
use artsfest_domain::{CompetitionCatalog, ResultSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Removes the database file and its WAL companions when dropped.
struct TempDatabase {
    path: PathBuf,
}

impl TempDatabase {
    fn new() -> Self {
        let id = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path: PathBuf = std::env::temp_dir().join(format!(
            "artsfest-round-trip-{}-{id}.sqlite",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        Self { path }
    }
}

impl Drop for TempDatabase {
    fn drop(&mut self) {
        for suffix in ["", "-wal", "-shm"] {
            let mut file = self.path.clone().into_os_string();
            file.push(suffix);
            let _ = std::fs::remove_file(file);
        }
    }
}

#[tokio::test]
async fn test_catalog_round_trips_through_fresh_session() {
    let db: TempDatabase = TempDatabase::new();

    {
        let session: Persistence = Persistence::new_with_file(&db.path).unwrap();
        session
            .write(
                DocumentKey::Competitions,
                encode_catalog(&create_test_catalog()).unwrap(),
            )
            .await
            .unwrap();
    }

    let fresh: Persistence = Persistence::new_with_file(&db.path).unwrap();
    let catalog: CompetitionCatalog = decode_catalog(
        fresh
            .read(DocumentKey::Competitions)
            .await
            .unwrap()
            .unwrap(),
    )
    .unwrap();

    assert_eq!(catalog, create_test_catalog());
}

#[tokio::test]
async fn test_results_round_trip_through_fresh_session() {
    let db: TempDatabase = TempDatabase::new();

    {
        let session: Persistence = Persistence::new_with_file(&db.path).unwrap();
        session
            .write(
                DocumentKey::Results,
                encode_results(&create_test_results()).unwrap(),
            )
            .await
            .unwrap();
    }

    let fresh: Persistence = Persistence::new_with_file(&db.path).unwrap();
    let results: ResultSet =
        decode_results(fresh.read(DocumentKey::Results).await.unwrap().unwrap()).unwrap();

    assert_eq!(results, create_test_results());
}
