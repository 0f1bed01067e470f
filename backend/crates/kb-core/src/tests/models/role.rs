use crate::{Permission, Role};

use std::str::FromStr;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn test_role_as_str_round_trips_through_from_str() {
    for role in [Role::Owner, Role::Editor, Role::Viewer] {
        assert_eq!(Role::from_str(role.as_str()).unwrap(), role);
    }
    assert!(Role::from_str("admin").is_err());
}

#[test]
fn given_owner_when_checking_every_permission_then_all_allowed() {
    for permission in [
        Permission::View,
        Permission::Edit,
        Permission::ModifySettings,
        Permission::ArchiveBoard,
        Permission::DeleteBoard,
        Permission::ManageMembers,
    ] {
        assert_that!(Role::Owner.allows(permission), eq(true));
    }
}

#[test]
fn given_editor_when_checking_predicates_then_content_and_settings_only() {
    let role = Role::Editor;

    assert_that!(role.can_view(), eq(true));
    assert_that!(role.can_edit(), eq(true));
    assert_that!(role.can_modify_board_settings(), eq(true));
    assert_that!(role.can_archive_board(), eq(false));
    assert_that!(role.can_delete(), eq(false));
    assert_that!(role.can_manage_members(), eq(false));
}

#[test]
fn given_viewer_when_checking_predicates_then_view_only() {
    let role = Role::Viewer;

    assert_that!(role.can_view(), eq(true));
    assert_that!(role.can_edit(), eq(false));
    assert_that!(role.can_modify_board_settings(), eq(false));
    assert_that!(role.can_archive_board(), eq(false));
    assert_that!(role.can_delete(), eq(false));
    assert_that!(role.can_manage_members(), eq(false));
}

#[test]
fn given_author_when_deleting_own_record_then_allowed_regardless_of_role() {
    let author = Uuid::new_v4();

    assert_that!(Role::Viewer.can_delete_authored(author, author), eq(true));
    assert_that!(Role::Editor.can_delete_authored(author, author), eq(true));
}

#[test]
fn given_non_author_when_deleting_then_only_owner_allowed() {
    let author = Uuid::new_v4();
    let caller = Uuid::new_v4();

    assert_that!(Role::Owner.can_delete_authored(author, caller), eq(true));
    assert_that!(Role::Editor.can_delete_authored(author, caller), eq(false));
    assert_that!(Role::Viewer.can_delete_authored(author, caller), eq(false));
}
