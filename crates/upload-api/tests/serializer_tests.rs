//! Integration tests for split record projection

use pretty_assertions::assert_eq;
use serde_json::json;

use upload_api::{SplitRecord, SplitResource, SplitSerializer};

#[test]
fn test_projection_coerces_string_post_id() {
    let record =
        SplitRecord::from_pairs([("file_name", json!("cat.png")), ("post_id", json!("42"))]);

    let resource = SplitSerializer::serialize(&record);

    assert_eq!(
        resource,
        SplitResource {
            resource_type: "split".to_string(),
            url: "cat.png".to_string(),
            post_id: 42,
        }
    );
}

#[test]
fn test_projection_exposes_no_extra_fields() {
    // Extra persisted columns never leak into the resource.
    let record = SplitRecord::from_pairs([
        ("file_name", json!("dog.jpg")),
        ("post_id", json!(7)),
        ("secret_internal", json!("do not expose")),
    ]);

    let value = serde_json::to_value(SplitSerializer::serialize(&record)).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert!(object.contains_key("type"));
    assert!(object.contains_key("url"));
    assert!(object.contains_key("post_id"));
    assert!(!object.contains_key("secret_internal"));
}

#[test]
fn test_projection_round_trips_through_json() {
    let record =
        SplitRecord::from_pairs([("file_name", json!("cat.png")), ("post_id", json!(42))]);

    let serialized = serde_json::to_string(&SplitSerializer::serialize(&record)).unwrap();
    let decoded: SplitResource = serde_json::from_str(&serialized).unwrap();

    assert_eq!(decoded.url, "cat.png");
    assert_eq!(decoded.post_id, 42);
    assert_eq!(decoded.resource_type, "split");
}
