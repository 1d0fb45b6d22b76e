//! Serde roundtrip and JsonSchema validation tests for the wire types.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use tally_core::entities::{Issue, ListedIssue, NewIssue};
use tally_core::responses::IssueReply;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_issue() -> Issue {
    let created = Utc::now();
    Issue {
        id: "iss-a3f8b2c1d4e5f607".into(),
        project_name: "apitest".into(),
        issue_title: "Test_Issue_1".into(),
        issue_text: "When we post data it has an error.".into(),
        created_by: "agnivon".into(),
        assigned_to: String::new(),
        status_text: "In QA".into(),
        open: true,
        created_on: created,
        updated_on: created + Duration::seconds(5),
    }
}

roundtrip_and_validate!(issue_roundtrip, Issue, sample_issue());

roundtrip_and_validate!(
    listed_issue_roundtrip,
    ListedIssue,
    ListedIssue::from(sample_issue())
);

roundtrip_and_validate!(
    new_issue_roundtrip,
    NewIssue,
    NewIssue::new("T", "t", "c").status_text("In QA")
);

roundtrip_and_validate!(
    reply_done_roundtrip,
    IssueReply,
    IssueReply::updated("iss-a3f8b2c1d4e5f607")
);

roundtrip_and_validate!(
    reply_failed_roundtrip,
    IssueReply,
    IssueReply::no_update_fields("iss-a3f8b2c1d4e5f607")
);

roundtrip_and_validate!(
    reply_rejected_roundtrip,
    IssueReply,
    IssueReply::required_fields_missing()
);

#[test]
fn issue_uses_underscore_id_on_the_wire() {
    let json = serde_json::to_value(sample_issue()).unwrap();
    assert!(json.get("_id").is_some());
    assert!(json.get("id").is_none());
    assert_eq!(json["project_name"], "apitest");
    assert!(json["created_on"].is_string());
}

#[test]
fn listed_issue_strips_project_name() {
    let json = serde_json::to_value(ListedIssue::from(sample_issue())).unwrap();
    assert!(json.get("project_name").is_none());

    let schema = serde_json::to_value(schema_for!(ListedIssue)).unwrap();
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    for field in [
        "_id",
        "issue_title",
        "issue_text",
        "created_on",
        "updated_on",
        "created_by",
        "assigned_to",
        "open",
        "status_text",
    ] {
        assert!(required.contains(&field), "{field} should be required");
    }
}
