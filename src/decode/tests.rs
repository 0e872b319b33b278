//! Tests for decoder module

use super::*;
use crate::error::Error;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn sample_item() -> serde_json::Value {
    json!({
        "item_id": "229279689",
        "resolved_id": "229279689",
        "given_url": "http://www.grantland.com/blog/the-triangle/post/_/id/38347/ryder-cup-preview",
        "given_title": "The Massive Ryder Cup Preview - The Triangle Blog - Grantland",
        "favorite": "0",
        "status": "0",
        "resolved_title": "The Massive Ryder Cup Preview",
        "resolved_url": "http://www.grantland.com/blog/the-triangle/post/_/id/38347/ryder-cup-preview",
        "excerpt": "The list of things I love about the Ryder Cup is so long that it could fill a (tedious) novel.",
        "is_article": "1",
        "has_video": "1",
        "has_image": "1",
        "word_count": "3197",
        "time_added": "1473710473",
        "time_updated": "1473710473",
        "time_read": "0",
        "time_favorited": "0",
        "sort_id": 0,
        "tags": {"golf": "golf"},
        "lang": "en",
        "time_to_read": 15,
        "listen_duration_estimate": 1238
    })
}

// ============================================================================
// Item Tests
// ============================================================================

#[test]
fn test_item_deserialize() {
    let item: Item = serde_json::from_value(sample_item()).unwrap();

    assert_eq!(item.item_id, "229279689");
    assert_eq!(item.sort_id, 0);
    assert_eq!(item.time_to_read, 15);
    assert_eq!(item.listen_duration_estimate, 1238);
    assert_eq!(item.tags.get("golf").map(String::as_str), Some("golf"));
    assert_eq!(item.title(), "The Massive Ryder Cup Preview");
    assert_eq!(item.word_count_value(), Some(3197));
    assert!(item.is_article());
    assert!(!item.is_index());
    assert!(item.has_video());
    assert!(!item.is_favorite());
    assert!(!item.is_archived());
}

#[test]
fn test_item_missing_fields_default() {
    let item: Item = serde_json::from_value(json!({"item_id": "1"})).unwrap();
    assert_eq!(item.item_id, "1");
    assert!(item.resolved_url.is_empty());
    assert!(item.tags.is_empty());
    assert_eq!(item.time_to_read, 0);
    assert_eq!(item.link(), None);
}

#[test]
fn test_item_null_fields_default() {
    let item: Item = serde_json::from_value(json!({
        "item_id": "1",
        "resolved_url": null,
        "given_url": "http://g/1",
        "excerpt": null,
        "tags": null,
        "time_to_read": null
    }))
    .unwrap();
    assert_eq!(item.resolved_url, "");
    assert_eq!(item.excerpt, "");
    assert!(item.tags.is_empty());
    assert_eq!(item.time_to_read, 0);
    assert_eq!(item.link(), Some("http://g/1"));
}

#[test]
fn test_item_wrong_type_fails() {
    let result: Result<Item, _> = serde_json::from_value(json!({"sort_id": "not a number"}));
    assert!(result.is_err());
}

#[test]
fn test_item_link_prefers_resolved() {
    let item = Item {
        given_url: "http://given.example".to_string(),
        resolved_url: "https://resolved.example".to_string(),
        ..Default::default()
    };
    assert_eq!(item.link(), Some("https://resolved.example"));

    let item = Item {
        given_url: "http://given.example".to_string(),
        ..Default::default()
    };
    assert_eq!(item.link(), Some("http://given.example"));
}

#[test]
fn test_item_timestamps() {
    let item: Item = serde_json::from_value(sample_item()).unwrap();

    assert_eq!(
        item.added_at(),
        Some(Utc.timestamp_opt(1_473_710_473, 0).unwrap())
    );
    assert_eq!(item.read_at(), None);
    assert_eq!(item.favorited_at(), None);

    let item = Item {
        time_updated: "garbage".to_string(),
        ..Default::default()
    };
    assert_eq!(item.updated_at(), None);
}

#[test]
fn test_item_status_flags() {
    let archived = Item {
        status: "1".to_string(),
        ..Default::default()
    };
    assert!(archived.is_archived());
    assert!(!archived.is_deleted());

    let deleted = Item {
        status: "2".to_string(),
        ..Default::default()
    };
    assert!(deleted.is_deleted());
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_entries_sorted_by_item_id() {
    let body = json!({
        "status": 1,
        "since": 1_700_000_100,
        "list": {
            "30": {"item_id": "30"},
            "100": {"item_id": "100"},
            "9": {"item_id": "9"},
            "10": {"item_id": "10"},
            "20": {"item_id": "20"}
        }
    });

    let page = Page::parse(&body.to_string()).unwrap();
    assert_eq!(page.since, Some(1_700_000_100));

    let PageOutcome::Entries(entries) = page.outcome else {
        panic!("Expected entries");
    };
    let ids: Vec<&str> = entries.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["9", "10", "20", "30", "100"]);
}

#[test]
fn test_page_completion_signal_ignores_list() {
    let body = json!({
        "status": 2,
        "since": 1_700_000_200,
        "list": {"1": {"item_id": "1"}}
    });

    let page = Page::parse(&body.to_string()).unwrap();
    assert_eq!(page.outcome, PageOutcome::Complete);
    assert!(page.outcome.is_empty());
    assert_eq!(page.since, Some(1_700_000_200));
}

#[test]
fn test_page_status_as_string() {
    let page = Page::parse(r#"{"status": "2", "since": "1700000300"}"#).unwrap();
    assert_eq!(page.outcome, PageOutcome::Complete);
    assert_eq!(page.since, Some(1_700_000_300));
}

#[test]
fn test_page_without_since() {
    let page = Page::parse(r#"{"status": 1, "list": {}}"#).unwrap();
    assert_eq!(page.since, None);
    assert!(page.outcome.is_empty());
}

#[test]
fn test_page_empty_list_array() {
    let page = Page::parse(r#"{"status": 1, "since": 5, "list": []}"#).unwrap();
    assert_eq!(page.outcome, PageOutcome::Entries(Vec::new()));
}

#[test_case(json!([1, 2]) ; "non-empty array")]
#[test_case(json!("items") ; "string")]
#[test_case(json!(7) ; "number")]
#[test_case(json!(true) ; "boolean")]
fn test_page_non_object_list_is_empty(list: serde_json::Value) {
    let body = json!({"status": 1, "since": 8, "list": list});
    let page = Page::parse(&body.to_string()).unwrap();
    assert_eq!(page.since, Some(8));
    assert_eq!(page.outcome, PageOutcome::Entries(Vec::new()));
}

#[test]
fn test_page_missing_list() {
    let page = Page::parse(r#"{"status": 1}"#).unwrap();
    assert_eq!(page.outcome.len(), 0);
}

#[test]
fn test_page_service_error() {
    let body = json!({
        "error": "Invalid access token",
        "list": {"1": {"item_id": "1"}}
    });
    let err = Page::parse(&body.to_string()).unwrap_err();
    assert!(matches!(err, Error::SomethingWentWrong));
}

#[test]
fn test_page_null_or_empty_error_is_not_an_error() {
    assert!(Page::parse(r#"{"error": null, "status": 1}"#).is_ok());
    assert!(Page::parse(r#"{"error": "", "status": 1}"#).is_ok());
}

#[test]
fn test_page_invalid_json() {
    let err = Page::parse("<html>bad gateway</html>").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));

    let err = Page::parse("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { .. }));
}
