//! Batch accumulation across tables.

use serde_json::json;

use crate::{client, obj, store};

#[tokio::test]
async fn test_should_batch_write_across_tables_then_batch_read() {
    let store = store();
    let client = client(&store);
    let accounts = client.table("accounts");
    let orgs = client.table("organizations");

    client
        .batch()
        .put(
            &accounts,
            vec![
                obj(json!({"email": "a@acme.com", "name": "Ann"})),
                obj(json!({"email": "b@acme.com", "name": "Bob"})),
            ],
        )
        .put(&orgs, obj(json!({"name": "acme", "plan": "pro"})))
        .exec()
        .await
        .unwrap();

    assert_eq!(store.row_count("accounts"), 2);
    assert_eq!(store.row_count("organizations"), 1);

    let outcome = client
        .batch()
        .get(&accounts, obj(json!({"email": "a@acme.com"})))
        .get(&orgs, obj(json!({"name": "acme"})))
        .exec()
        .await
        .unwrap();

    let resp = outcome.single().expect("read-only batch is one call");
    assert_eq!(resp.collection("accounts").map(<[_]>::len), Some(1));
    assert_eq!(
        resp.collection("organizations").unwrap()[0]["plan"],
        json!("pro")
    );
}

#[tokio::test]
async fn test_should_apply_mixed_batch_and_pair_outcomes() {
    let store = store();
    let client = client(&store);
    let accounts = client.table("accounts");

    accounts
        .put(obj(json!({"email": "a@acme.com", "name": "Ann"})))
        .await
        .unwrap();

    let outcome = client
        .batch()
        .get(&accounts, obj(json!({"email": "a@acme.com"})))
        .put(&accounts, obj(json!({"email": "b@acme.com", "name": "Bob"})))
        .delete(&accounts, obj(json!({"email": "a@acme.com"})))
        .exec()
        .await
        .unwrap();

    let (read, _write) = outcome.paired().expect("mixed batch pairs outcomes");
    assert_eq!(read.collection("accounts").map(<[_]>::len), Some(1));

    // Writes were applied in order: put b, delete a.
    assert_eq!(store.row_count("accounts"), 1);
    let remaining = accounts
        .get(obj(json!({"email": "b@acme.com"})))
        .await
        .unwrap();
    assert!(remaining.item().is_some());
}

#[tokio::test]
async fn test_should_report_missing_keys_as_absent_not_error() {
    let store = store();
    let client = client(&store);
    let accounts = client.table("accounts");

    let outcome = client
        .batch()
        .get(&accounts, obj(json!({"email": "nobody@acme.com"})))
        .exec()
        .await
        .unwrap();

    let resp = outcome.single().unwrap();
    assert_eq!(resp.collection("accounts"), Some(&[][..]));
}

#[tokio::test]
async fn test_should_resolve_empty_batch_to_empty_single_outcome() {
    let store = store();
    let client = client(&store);

    let outcome = client.batch().exec().await.unwrap();

    let resp = outcome.single().expect("empty batch is a single outcome");
    assert!(resp.data.is_none());
    assert!(resp.count.is_none());
}

#[tokio::test]
async fn test_should_fail_whole_batch_call_on_unknown_table() {
    let store = store();
    let client = client(&store);
    let missing = client.table("not_a_table");

    let err = client
        .batch()
        .get(&missing, obj(json!({"email": "a@acme.com"})))
        .exec()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ResourceNotFoundException"));
}

#[tokio::test]
async fn test_should_not_surface_empty_unprocessed_items() {
    let store = store();
    let client = client(&store);
    let accounts = client.table("accounts");

    let outcome = client
        .batch()
        .put(&accounts, obj(json!({"email": "a@acme.com"})))
        .exec()
        .await
        .unwrap();

    // The store reports an empty UnprocessedItems map; the normalizer drops it.
    let resp = outcome.single().unwrap();
    assert!(resp.unprocessed_items.is_none());
}
