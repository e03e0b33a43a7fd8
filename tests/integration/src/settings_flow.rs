//! End-to-end flow through the plugin's two components: the admin settings
//! form lifecycle against an in-memory host, and record projection over the
//! resulting configuration's store.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use upload_api::{SplitRecord, SplitSerializer};
use upload_settings::{FormSession, SubmitOutcome, render};
use upload_test_utils::{MemoryStore, RecordingNotifier, RedrawCounter, StaticTranslator};

fn open_session(store: &Arc<MemoryStore>) -> (FormSession, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let session = FormSession::new(
        store.clone(),
        notifier.clone(),
        Arc::new(StaticTranslator),
        Arc::new(RedrawCounter::new()),
    );
    (session, notifier)
}

#[tokio::test]
async fn test_admin_configures_imgur_uploads() {
    let store = Arc::new(MemoryStore::new());
    let (session, notifier) = open_session(&store);

    // Fresh install: nothing to save yet.
    assert!(!session.changed());
    assert!(!render(&session).submit.enabled);

    // Admin switches to imgur and fills in credentials.
    session.upload_method.set("imgur".to_string());
    session.imgur_client_id.set("abc123".to_string());

    let view = render(&session);
    assert!(view.imgur.visible);
    assert!(view.submit.enabled);

    let outcome = session.submit().await.unwrap();
    assert_eq!(outcome, SubmitOutcome::Saved);

    // The batch covered every declared key, including untouched ones.
    let batches = store.saved_batches();
    assert_eq!(batches.len(), 1);
    let keys: Vec<&str> = batches[0].keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "flagrow.image-upload.imgurClientId",
            "flagrow.image-upload.mustResize",
            "flagrow.image-upload.resizeMaxHeight",
            "flagrow.image-upload.resizeMaxWidth",
            "flagrow.image-upload.uploadMethod",
        ]
    );

    assert_eq!(notifier.shown().len(), 1);
    assert!(!session.changed());
}

#[tokio::test]
async fn test_settings_persist_across_page_visits() {
    let store = Arc::new(MemoryStore::new());

    {
        let (session, _) = open_session(&store);
        session.must_resize.set(true);
        session.resize_max_width.set("1024".to_string());
        session.resize_max_height.set("768".to_string());
        session.submit().await.unwrap();
    }

    // Navigating back re-reads the saved baseline.
    let (session, _) = open_session(&store);
    assert!(session.must_resize.get());
    assert_eq!(session.resize_max_width.get(), "1024");
    assert!(!session.changed());

    let view = render(&session);
    assert!(view.resize.enabled);
    assert!(view.resize.max_width.enabled);
}

#[tokio::test]
async fn test_rapid_double_save_hits_store_once() {
    let store = Arc::new(MemoryStore::new().gated());
    let (session, notifier) = open_session(&store);
    session.upload_method.set("imgur".to_string());

    let (first, second) = tokio::join!(session.submit(), async {
        let outcome = session.submit().await;
        store.release();
        outcome
    });

    assert_eq!(first.unwrap(), SubmitOutcome::Saved);
    assert_eq!(second.unwrap(), SubmitOutcome::AlreadySaving);
    assert_eq!(store.save_calls(), 1);
    assert_eq!(notifier.shown().len(), 1);
}

#[test]
fn test_split_record_projection() {
    let record =
        SplitRecord::from_pairs([("file_name", json!("cat.png")), ("post_id", json!("42"))]);

    let value = serde_json::to_value(SplitSerializer::serialize(&record)).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "split",
            "url": "cat.png",
            "post_id": 42,
        })
    );
}
