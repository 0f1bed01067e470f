use crate::{Activity, ActivityKind};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_card_moved_activity_when_serialized_then_tagged_payload() {
    let from = Uuid::new_v4();
    let to = Uuid::new_v4();
    let activity = Activity::on_card(
        Uuid::new_v4(),
        Uuid::new_v4(),
        Uuid::new_v4(),
        ActivityKind::CardMoved {
            from_column_id: from,
            from_position: 1,
            to_column_id: to,
            to_position: 0,
        },
    );

    let json: serde_json::Value = serde_json::from_str(&activity.metadata_json().unwrap()).unwrap();

    assert_that!(activity.type_tag(), eq("card_moved"));
    assert_that!(json["type"].as_str(), some(eq("card_moved")));
    assert_that!(json["from_position"].as_i64(), some(eq(1)));
    assert_that!(json["to_column_id"].as_str(), some(eq(to.to_string().as_str())));
}

#[test]
fn given_payload_when_round_tripped_then_variant_preserved() {
    let kind = ActivityKind::ColumnDeleted {
        column_id: Uuid::new_v4(),
        name: "Doing".to_string(),
        cards_removed: 3,
    };

    let json = serde_json::to_string(&kind).unwrap();
    let parsed: ActivityKind = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, kind);
}
