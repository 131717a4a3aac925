// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{RecordingStore, TestConsole, create_test_console, create_test_console_with};
use crate::{Console, ConsoleConfig, Notice, OperatorFeedback, PendingWrite, SaveStatus};
use artsfest_domain::{Category, CompetitionName, ResultSet, UploadStamp};
use artsfest_persistence::{DocumentKey, PersistenceError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, watch};
use tokio::time::sleep;

fn create_test_results() -> ResultSet {
    let stamp: UploadStamp = UploadStamp::new(
        crate::tests::helpers::create_test_instant(),
        artsfest_domain::DEFAULT_TIMEZONE,
    );
    ResultSet::new().with_record(
        artsfest_domain::ResultKey::new(
            Category::LowerPrimary,
            CompetitionName::new("Song").unwrap(),
        ),
        stamp.into_record(String::from("https://example.com/a.pdf")),
    )
}

#[tokio::test(start_paused = true)]
async fn test_successful_commit_cycles_back_to_idle() {
    let mut t: TestConsole = create_test_console();
    let mut rx: watch::Receiver<SaveStatus> = t.console.subscribe();
    assert_eq!(*rx.borrow_and_update(), SaveStatus::Idle);

    let pending: PendingWrite = t.console.commit_results(create_test_results());
    assert_eq!(t.console.status(), SaveStatus::Saving);
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), SaveStatus::Saving);
    assert_eq!(t.console.results(), &create_test_results());

    pending.wait().await.unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saved);

    sleep(Duration::from_millis(1999)).await;
    assert_eq!(t.console.status(), SaveStatus::Saved);

    sleep(Duration::from_millis(2)).await;
    assert_eq!(t.console.status(), SaveStatus::Idle);

    assert_eq!(
        t.feedback.statuses(),
        vec![SaveStatus::Saving, SaveStatus::Saved, SaveStatus::Idle]
    );
    assert_eq!(t.store.writes().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_failed_write_keeps_optimistic_state_and_sticks() {
    let mut t: TestConsole = create_test_console();
    t.store.set_fail_writes(true);

    let pending: PendingWrite = t.console.commit_results(create_test_results());
    let result: Result<(), PersistenceError> = pending.wait().await;

    assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
    assert_eq!(t.console.status(), SaveStatus::Error);
    assert_eq!(t.console.results(), &create_test_results());
    assert_eq!(
        t.feedback.notices(),
        vec![Notice::SaveFailed {
            document: DocumentKey::Results,
            reason: String::from("Document store unavailable: write refused"),
        }]
    );

    sleep(Duration::from_secs(60)).await;
    assert_eq!(t.console.status(), SaveStatus::Error);

    // The next commit restarts the cycle.
    t.store.set_fail_writes(false);
    let pending: PendingWrite = t.console.commit_results(create_test_results());
    assert_eq!(t.console.status(), SaveStatus::Saving);
    pending.wait().await.unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saved);

    assert_eq!(
        t.feedback.statuses(),
        vec![
            SaveStatus::Saving,
            SaveStatus::Error,
            SaveStatus::Saving,
            SaveStatus::Saved
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_superseded_success_does_not_report_saved() {
    let mut t: TestConsole = create_test_console_with(RecordingStore::gated());

    let first: PendingWrite = t
        .console
        .add_competition(Some(Category::LowerPrimary), "Song")
        .unwrap()
        .into_pending()
        .unwrap();
    let second: PendingWrite = t
        .console
        .add_competition(Some(Category::LowerPrimary), "Drama")
        .unwrap()
        .into_pending()
        .unwrap();
    assert!(second.sequence() > first.sequence());

    t.store.release(1);
    first.wait().await.unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saving);

    t.store.release(1);
    second.wait().await.unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saved);
    assert_eq!(
        t.feedback.statuses(),
        vec![SaveStatus::Saving, SaveStatus::Saved]
    );
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_does_not_clear_newer_commit() {
    let mut t: TestConsole = create_test_console_with(RecordingStore::gated());

    t.store.release(1);
    t.console
        .commit_results(create_test_results())
        .wait()
        .await
        .unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saved);

    sleep(Duration::from_millis(1500)).await;
    let pending: PendingWrite = t.console.commit_results(ResultSet::new());
    assert_eq!(t.console.status(), SaveStatus::Saving);

    // The first write's timer expires while the second is in flight.
    sleep(Duration::from_millis(1000)).await;
    assert_eq!(t.console.status(), SaveStatus::Saving);

    t.store.release(1);
    pending.wait().await.unwrap();
    assert_eq!(t.console.status(), SaveStatus::Saved);

    sleep(Duration::from_millis(2001)).await;
    assert_eq!(t.console.status(), SaveStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_superseded_failure_still_reports_error() {
    let mut t: TestConsole = create_test_console_with(RecordingStore::gated());
    t.store.set_fail_writes(true);

    let first: PendingWrite = t.console.commit_results(create_test_results());
    let _second: PendingWrite = t.console.commit_results(ResultSet::new());

    t.store.release(1);
    assert!(first.wait().await.is_err());

    assert_eq!(t.console.status(), SaveStatus::Error);
    assert_eq!(t.feedback.notices().len(), 1);
}

#[tokio::test]
async fn test_aborted_write_leaves_status_saving() {
    let mut t: TestConsole = create_test_console_with(RecordingStore::gated());

    let pending: PendingWrite = t.console.commit_results(create_test_results());
    assert_eq!(pending.document(), DocumentKey::Results);
    pending.abort();

    let result: Result<(), PersistenceError> = pending.wait().await;

    assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
    assert_eq!(t.console.status(), SaveStatus::Saving);
    assert!(t.store.writes().is_empty());
    // The optimistic value stays.
    assert_eq!(t.console.results(), &create_test_results());
}

/// Feedback whose `Saved` delivery is slow enough for a new commit to race it.
#[derive(Default)]
struct SlowSavedFeedback {
    delivering_saved: Notify,
    statuses: std::sync::Mutex<Vec<SaveStatus>>,
}

impl OperatorFeedback for SlowSavedFeedback {
    fn notify(&self, _notice: Notice) {}

    fn status_changed(&self, status: SaveStatus) {
        if status == SaveStatus::Saved {
            self.delivering_saved.notify_one();
            std::thread::sleep(Duration::from_millis(300));
        }
        self.statuses.lock().unwrap().push(status);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_status_feedback_arrives_in_transition_order() {
    let store: Arc<RecordingStore> = Arc::new(RecordingStore::gated());
    let feedback: Arc<SlowSavedFeedback> = Arc::new(SlowSavedFeedback::default());
    let mut console: Console<RecordingStore> = Console::new(
        Arc::clone(&store),
        Arc::clone(&feedback) as Arc<dyn OperatorFeedback>,
        ConsoleConfig::default(),
    );

    let _first: PendingWrite = console.commit_results(create_test_results());
    store.release(1);
    feedback.delivering_saved.notified().await;

    // A new commit while `Saved` is still being delivered.
    let _second: PendingWrite = console.commit_results(ResultSet::new());

    let delivered: Vec<SaveStatus> = feedback.statuses.lock().unwrap().clone();
    assert_eq!(console.status(), SaveStatus::Saving);
    assert_eq!(
        delivered,
        vec![SaveStatus::Saving, SaveStatus::Saved, SaveStatus::Saving]
    );
    assert_eq!(delivered.last(), Some(&console.status()));
}
