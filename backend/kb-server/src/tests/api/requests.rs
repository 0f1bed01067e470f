use crate::{
    ApiError, CreateBoardRequest, CreateCardRequest, UpdateCardRequest, UpdateColumnRequest,
};

use kb_config::ValidationConfig;
use kb_core::{BoardKind, Priority};

use googletest::prelude::*;
use serde_json::json;

fn limits() -> ValidationConfig {
    ValidationConfig::default()
}

fn validation_field(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_update_card_distinguishes_null_from_absent() {
    let req: UpdateCardRequest = serde_json::from_value(json!({
        "description": null,
        "title": "  Ship it  "
    }))
    .unwrap();

    let changes = req.into_changes(&limits()).unwrap();

    assert_that!(changes.title, some(eq("Ship it")));
    assert_that!(changes.description, some(none()));
    assert_that!(changes.due_date, none());
    assert_that!(changes.assignee_id, none());
}

#[test]
fn test_update_card_without_fields_is_rejected() {
    let req: UpdateCardRequest = serde_json::from_value(json!({})).unwrap();

    let error = req.into_changes(&limits()).unwrap_err();

    assert_that!(error.code(), eq("VALIDATION_ERROR"));
    assert_that!(validation_field(error), none());
}

#[test]
fn test_update_card_bad_assignee_names_field() {
    let req: UpdateCardRequest =
        serde_json::from_value(json!({ "assignee_id": "nobody" })).unwrap();

    let error = req.into_changes(&limits()).unwrap_err();

    assert_that!(validation_field(error), some(eq("assignee_id")));
}

#[test]
fn test_create_card_defaults_and_label_cleanup() {
    let req: CreateCardRequest = serde_json::from_value(json!({
        "title": "Write docs",
        "labels": ["docs", " docs ", "", "api"]
    }))
    .unwrap();

    let input = req.into_input(&limits()).unwrap();

    assert_that!(input.priority, eq(Priority::Medium));
    assert_that!(input.position, none());
    assert_eq!(input.labels, vec!["docs".to_string(), "api".to_string()]);
}

#[test]
fn test_create_card_blank_title_is_rejected() {
    let req: CreateCardRequest = serde_json::from_value(json!({ "title": "   " })).unwrap();

    let error = req.into_input(&limits()).unwrap_err();

    assert_that!(validation_field(error), some(eq("title")));
}

#[test]
fn test_create_card_unknown_priority_names_field() {
    let req: CreateCardRequest =
        serde_json::from_value(json!({ "title": "x", "priority": "someday" })).unwrap();

    let error = req.into_input(&limits()).unwrap_err();

    assert_that!(validation_field(error), some(eq("priority")));
}

#[test]
fn test_update_column_null_wip_limit_clears_it() {
    let req: UpdateColumnRequest = serde_json::from_value(json!({ "wip_limit": null })).unwrap();

    let changes = req.into_changes(&limits()).unwrap();

    assert_that!(changes.wip_limit, some(none()));
    assert_that!(changes.position, none());
}

#[test]
fn test_update_column_position_only_is_accepted() {
    let req: UpdateColumnRequest = serde_json::from_value(json!({ "position": 2 })).unwrap();

    let changes = req.into_changes(&limits()).unwrap();

    assert_that!(changes.position, some(eq(2)));
    assert_that!(changes.changed_fields(), is_empty());
}

#[test]
fn test_update_column_rejects_non_positive_wip_limit() {
    let req: UpdateColumnRequest = serde_json::from_value(json!({ "wip_limit": 0 })).unwrap();

    let error = req.into_changes(&limits()).unwrap_err();

    assert_that!(validation_field(error), some(eq("wip_limit")));
}

#[test]
fn test_create_board_template_is_validated() {
    let req: CreateBoardRequest = serde_json::from_value(json!({
        "name": "Launch",
        "kind": "personal",
        "template": [
            { "name": "Todo", "cards": [{ "title": "Plan", "priority": "high" }] },
            { "name": "Done", "color": "#12AB34", "wip_limit": 3 }
        ]
    }))
    .unwrap();

    let input = req.into_input(&limits()).unwrap();

    assert_that!(input.kind, eq(BoardKind::Personal));
    assert_that!(input.template, len(eq(2)));
    assert_that!(input.template[0].cards[0].priority, some(eq(Priority::High)));
    assert_that!(input.template[1].color, some(eq("#12ab34")));
}

#[test]
fn test_create_board_bad_color_names_field() {
    let req: CreateBoardRequest = serde_json::from_value(json!({
        "name": "Launch",
        "background_color": "blue"
    }))
    .unwrap();

    let error = req.into_input(&limits()).unwrap_err();

    assert_that!(validation_field(error), some(eq("background_color")));
}
