use crate::{Board, BoardKind, CoreError, DEFAULT_BOARD_COLOR};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_personal_board_when_created_then_defaults_applied() {
    let owner = Uuid::new_v4();

    let board = Board::new("Roadmap".to_string(), BoardKind::Personal, None, owner).unwrap();

    assert_that!(board.owner_id, eq(owner));
    assert_that!(board.archived, eq(false));
    assert_that!(board.background_color.as_str(), eq(DEFAULT_BOARD_COLOR));
    assert_that!(board.is_owned_by(owner), eq(true));
    assert_that!(board.is_owned_by(Uuid::new_v4()), eq(false));
}

#[test]
fn given_team_board_without_team_when_created_then_validation_error() {
    let result = Board::new("Team".to_string(), BoardKind::Team, None, Uuid::new_v4());

    assert!(matches!(result, Err(CoreError::Validation { field: Some(ref f), .. }) if f == "team_id"));
}

#[test]
fn given_personal_board_with_team_when_created_then_validation_error() {
    let result = Board::new(
        "Mine".to_string(),
        BoardKind::Personal,
        Some(Uuid::new_v4()),
        Uuid::new_v4(),
    );

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}
