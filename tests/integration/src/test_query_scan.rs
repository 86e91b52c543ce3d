//! Query and scan builders against the in-memory store.

use serde_json::json;
use sparkplug::Expression;

use crate::{client, obj, store};

async fn seed_accounts(client: &sparkplug::Client) {
    let accounts = client.table("accounts");
    for (email, name, roles) in [
        ("a@acme.com", "Ann", json!(["admin", "ops"])),
        ("b@acme.com", "Bob", json!(["ops"])),
        ("c@acme.com", "Ann", json!([])),
    ] {
        accounts
            .put(obj(json!({"email": email, "name": name, "roles": roles})))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_should_query_secondary_index_with_filter_object() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(obj(json!({"name": "Ann"})))
        .on("name")
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(2));
    let emails: Vec<_> = resp
        .items()
        .unwrap()
        .iter()
        .map(|item| item["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["a@acme.com", "c@acme.com"]);
}

#[tokio::test]
async fn test_should_reverse_query_order() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(obj(json!({"name": "Ann"})))
        .on("name")
        .reverse()
        .exec()
        .await
        .unwrap();

    let emails: Vec<_> = resp
        .items()
        .unwrap()
        .iter()
        .map(|item| item["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["c@acme.com", "a@acme.com"]);
}

#[tokio::test]
async fn test_should_cap_reversed_indexed_query_at_limit() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(obj(json!({"name": "Ann"})))
        .on("name")
        .limit(1)
        .reverse()
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
    let item = &resp.items().unwrap()[0];
    assert_eq!(item["name"], json!("Ann"));
    assert_eq!(item["email"], json!("c@acme.com"));
}

#[tokio::test]
async fn test_should_execute_strongly_consistent_query() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(obj(json!({"name": "Bob"})))
        .on("name")
        .strong_read()
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
}

#[tokio::test]
async fn test_should_paginate_query_with_limit_and_start() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;
    let accounts = client.table("accounts");

    let first = accounts
        .query(obj(json!({"name": "Ann"})))
        .on("name")
        .limit(1)
        .exec()
        .await
        .unwrap();
    assert_eq!(first.count, Some(1));
    let cursor = first.last_key.clone().expect("more pages remain");

    let second = accounts
        .query(obj(json!({"name": "Ann"})))
        .on("name")
        .limit(1)
        .start(cursor)
        .exec()
        .await
        .unwrap();
    assert_eq!(second.count, Some(1));
    assert_ne!(
        first.items().unwrap()[0]["email"],
        second.items().unwrap()[0]["email"]
    );
    // The final page carries no cursor.
    assert!(second.last_key.is_none());
}

#[tokio::test]
async fn test_should_return_empty_page_for_unmatched_query() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(obj(json!({"name": "Zed"})))
        .on("name")
        .exec()
        .await
        .unwrap();

    // An empty page is still a page: present list, zero count.
    assert_eq!(resp.items(), Some(&[][..]));
    assert_eq!(resp.count, Some(0));
}

#[tokio::test]
async fn test_should_reject_query_on_unknown_index() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let err = client
        .table("accounts")
        .query(obj(json!({"name": "Ann"})))
        .on("no_such_index")
        .exec()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("ValidationException"));
}

#[tokio::test]
async fn test_should_scan_with_equality_filter() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .scan(obj(json!({"name": "Bob"})))
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
    assert_eq!(resp.items().unwrap()[0]["email"], json!("b@acme.com"));
}

#[tokio::test]
async fn test_should_scan_with_containment_filter_for_sequence_value() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .scan(obj(json!({"roles": ["ops"]})))
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(2));
}

#[tokio::test]
async fn test_should_combine_filter_entries_conjunctively() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .scan(obj(json!({"name": "Ann", "roles": ["admin"]})))
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
    assert_eq!(resp.items().unwrap()[0]["email"], json!("a@acme.com"));
}

#[tokio::test]
async fn test_should_accept_raw_expression_for_query() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .query(Expression::raw_with_names(
            "#name = :name",
            std::collections::HashMap::from([(":name".to_owned(), json!("Bob"))]),
            std::collections::HashMap::from([("#name".to_owned(), "name".to_owned())]),
        ))
        .on("name")
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
}

#[tokio::test]
async fn test_should_accept_raw_expression_without_names_for_scan() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let resp = client
        .table("accounts")
        .scan(Expression::raw(
            "email = :email",
            std::collections::HashMap::from([(":email".to_owned(), json!("c@acme.com"))]),
        ))
        .exec()
        .await
        .unwrap();

    assert_eq!(resp.count, Some(1));
}

#[tokio::test]
async fn test_should_paginate_scan_with_limit() {
    let store = store();
    let client = client(&store);
    seed_accounts(&client).await;

    let first = client
        .table("accounts")
        .scan(obj(json!({"roles": ["ops"]})))
        .limit(1)
        .exec()
        .await
        .unwrap();
    assert_eq!(first.count, Some(1));
    let cursor = first.last_key.clone().expect("more pages remain");

    let second = client
        .table("accounts")
        .scan(obj(json!({"roles": ["ops"]})))
        .limit(10)
        .start(cursor)
        .exec()
        .await
        .unwrap();
    assert_eq!(second.count, Some(1));
    assert!(second.last_key.is_none());
}
