use crate::position::{is_dense, plan_insert, plan_move, plan_remove, plan_reorder};
use crate::tests::sibling_positions::SiblingPositions;
use crate::{CoreError, Scope, Shift};

use googletest::prelude::*;
use uuid::Uuid;

fn ids(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

// =========================================================================
// Plans
// =========================================================================

#[test]
fn given_no_position_when_planning_insert_then_appends() {
    let plan = plan_insert(3, None).unwrap();

    assert_that!(plan.position, eq(3));
    assert_that!(plan.shift, eq(Shift::open_gap_at(3)));
}

#[test]
fn given_position_past_end_when_planning_insert_then_out_of_range() {
    let result = plan_insert(3, Some(4));

    assert!(matches!(
        result,
        Err(CoreError::PositionOutOfRange { position: 4, max: 3, .. })
    ));
    assert!(plan_insert(3, Some(-1)).is_err());
}

#[test]
fn given_move_later_when_planning_then_between_members_shift_back() {
    let shift = plan_move(4, 0, 2).unwrap().unwrap();

    assert_that!(shift, eq(Shift { from: 1, to: Some(2), delta: -1 }));
}

#[test]
fn given_move_earlier_when_planning_then_between_members_shift_forward() {
    let shift = plan_move(4, 3, 1).unwrap().unwrap();

    assert_that!(shift, eq(Shift { from: 1, to: Some(2), delta: 1 }));
}

#[test]
fn given_same_source_and_destination_when_planning_move_then_no_op() {
    assert_that!(plan_move(4, 2, 2).unwrap(), none());
}

#[test]
fn given_destination_outside_scope_when_planning_move_then_out_of_range() {
    assert!(plan_move(3, 0, 3).is_err());
    assert!(plan_move(0, 0, 0).is_err());
}

#[test]
fn test_plan_remove_closes_gap_after_position() {
    let shift = plan_remove(1);

    assert_that!(shift.apply(0), eq(0));
    assert_that!(shift.apply(2), eq(1));
    assert_that!(shift.apply(5), eq(4));
}

#[test]
fn given_permutation_when_planning_reorder_then_index_becomes_position() {
    let current = ids(3);
    let requested = vec![current[2], current[0], current[1]];

    let assignments = plan_reorder(&current, &requested).unwrap();

    assert_that!(
        assignments,
        elements_are![
            eq(&(current[2], 0)),
            eq(&(current[0], 1)),
            eq(&(current[1], 2))
        ]
    );
}

#[test]
fn given_foreign_id_when_planning_reorder_then_invalid_reference() {
    let current = ids(2);
    let requested = vec![current[0], Uuid::new_v4()];

    let result = plan_reorder(&current, &requested);

    assert!(matches!(result, Err(CoreError::InvalidReference { .. })));
}

#[test]
fn given_duplicate_or_missing_id_when_planning_reorder_then_invalid_reference() {
    let current = ids(3);

    let duplicated = vec![current[0], current[0], current[1]];
    let missing = vec![current[1], current[0]];

    assert!(matches!(
        plan_reorder(&current, &duplicated),
        Err(CoreError::InvalidReference { .. })
    ));
    assert!(matches!(
        plan_reorder(&current, &missing),
        Err(CoreError::InvalidReference { .. })
    ));
}

#[test]
fn test_is_dense() {
    assert_that!(is_dense([2, 0, 1]), eq(true));
    assert_that!(is_dense(Vec::<i32>::new()), eq(true));
    assert_that!(is_dense([0, 2]), eq(false));
    assert_that!(is_dense([0, 1, 1]), eq(false));
}

#[test]
fn test_scope_parent_id() {
    let board_id = Uuid::new_v4();

    assert_that!(Scope::BoardColumns(board_id).parent_id(), eq(board_id));
    assert_that!(
        Scope::ColumnCards(board_id).to_string(),
        eq(&format!("cards of column {board_id}"))
    );
}

// =========================================================================
// Scenarios
// =========================================================================

#[test]
fn given_four_cards_when_first_moves_to_index_two_then_order_is_c1_c2_c0_c3() {
    // Given
    let c = ids(4);
    let mut column = SiblingPositions::from_ordered(c.clone());

    // When
    column.move_to(c[0], 2).unwrap();

    // Then
    assert_that!(column.ordered_ids(), eq(&vec![c[1], c[2], c[0], c[3]]));
    assert_that!(column.position_of(c[1]), some(eq(0)));
    assert_that!(column.position_of(c[2]), some(eq(1)));
    assert_that!(column.position_of(c[0]), some(eq(2)));
    assert_that!(column.position_of(c[3]), some(eq(3)));
}

#[test]
fn given_two_columns_when_card_moves_across_then_both_stay_dense() {
    // Given
    let a = ids(3);
    let b = ids(2);
    let mut column_a = SiblingPositions::from_ordered(a.clone());
    let mut column_b = SiblingPositions::from_ordered(b.clone());

    // When
    column_a.remove(a[1]).unwrap();
    column_b.insert(a[1], Some(1)).unwrap();

    // Then
    assert_that!(column_a.ordered_ids(), eq(&vec![a[0], a[2]]));
    assert_that!(column_b.ordered_ids(), eq(&vec![b[0], a[1], b[1]]));
    assert_that!(column_a.is_dense(), eq(true));
    assert_that!(column_b.is_dense(), eq(true));
}

#[test]
fn given_member_at_own_position_when_moved_then_unchanged() {
    let c = ids(3);
    let mut column = SiblingPositions::from_ordered(c.clone());
    let before = column.clone();

    column.move_to(c[1], 1).unwrap();

    assert_that!(column, eq(&before));
}

#[test]
fn given_middle_removed_when_compacting_then_later_members_shift_back() {
    let c = ids(3);
    let mut board = SiblingPositions::from_ordered(c.clone());

    let removed_at = board.remove(c[1]).unwrap();

    assert_that!(removed_at, eq(1));
    assert_that!(board.position_of(c[0]), some(eq(0)));
    assert_that!(board.position_of(c[2]), some(eq(1)));
}

#[test]
fn given_unknown_member_when_moving_then_invalid_reference() {
    let mut column = SiblingPositions::from_ordered(ids(2));

    let result = column.move_to(Uuid::new_v4(), 0);

    assert!(matches!(result, Err(CoreError::InvalidReference { .. })));
}

#[test]
fn given_rejected_reorder_when_applied_then_scope_untouched() {
    let c = ids(3);
    let mut column = SiblingPositions::from_ordered(c.clone());

    let result = column.reorder(&[c[2], c[1]]);

    assert!(result.is_err());
    assert_that!(column.ordered_ids(), eq(&c));
}
