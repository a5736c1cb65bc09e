//! Integration test: user table mutations whose server replies arrive
//! late and out of order.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use markwatch_core::{
    ApiReply, ConfirmSlot, RemoteError, Role, Severity, UserId, UserRecord, UserTable,
};

fn user(id: u64, name: &str, role: Role) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        role,
    }
}

fn table() -> UserTable {
    UserTable::new(vec![
        user(10, "Ann", Role::Admin),
        user(11, "Ben", Role::User),
        user(12, "Cat", Role::User),
        user(13, "Dan", Role::User),
    ])
}

fn ids(t: &UserTable) -> Vec<u64> {
    t.rows().iter().map(|r| r.id.0).collect()
}

#[test]
fn two_deletes_in_flight_settle_in_reverse_order() {
    let mut t = table();
    let mut confirm: ConfirmSlot<UserId> = ConfirmSlot::new();

    // Both deletes are confirmed before either reply arrives.
    confirm.request("Are you sure you want to delete this user?", UserId(11));
    let first = confirm.confirm().unwrap();
    confirm.request("Are you sure you want to delete this user?", UserId(12));
    let second = confirm.confirm().unwrap();

    let n2 = t.settle_delete(second, Ok(ApiReply::ok("User deleted successfully!")));
    let n1 = t.settle_delete(first, Ok(ApiReply::ok("User deleted successfully!")));

    assert_eq!(ids(&t), vec![10, 13]);
    assert_eq!(n1.severity, Severity::Success);
    assert_eq!(n2.severity, Severity::Success);
}

#[test]
fn role_reply_after_delete_does_not_resurrect_row() {
    let mut t = table();
    t.settle_delete(UserId(13), Ok(ApiReply::ok("")));
    let notice = t.settle_role_change(UserId(13), Role::Admin, Ok(ApiReply::ok("Role updated")));
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(ids(&t), vec![10, 11, 12]);
}

#[test]
fn mixed_outcomes_touch_only_their_rows() {
    let mut t = table();
    let refused = t.settle_delete(
        UserId(10),
        Ok(ApiReply::refused("Cannot delete the last admin")),
    );
    let failed = t.settle_role_change(
        UserId(11),
        Role::Admin,
        Err(RemoteError::Status {
            status: 500,
            message: None,
        }),
    );
    let ok = t.settle_role_change(UserId(12), Role::Admin, Ok(ApiReply::ok("")));

    assert_eq!(refused.text, "Cannot delete the last admin");
    assert_eq!(failed.severity, Severity::Error);
    assert_eq!(ok.text, "Role updated to Admin");

    let roles: Vec<Role> = t.rows().iter().map(|r| r.role).collect();
    assert_eq!(roles, vec![Role::Admin, Role::User, Role::Admin, Role::User]);
}

#[test]
fn reload_after_add_keeps_ids_stable() {
    let mut t = table();
    t.settle_delete(UserId(11), Ok(ApiReply::ok("")));
    let mut reloaded = t.rows().to_vec();
    reloaded.push(user(14, "Eve", Role::User));
    t.replace_all(reloaded);

    assert_eq!(ids(&t), vec![10, 12, 13, 14]);
    t.settle_role_change(UserId(14), Role::Admin, Ok(ApiReply::ok("")));
    assert_eq!(t.get(UserId(14)).unwrap().role, Role::Admin);
}

#[test]
fn role_reply_landing_after_a_reload_still_applies() {
    let mut t = table();
    // The admin page was left and revisited while the update was in
    // flight; the visit reloaded the same rows from the server.
    t.replace_all(table().rows().to_vec());
    let notice = t.settle_role_change(UserId(11), Role::Admin, Ok(ApiReply::ok("")));
    assert_eq!(notice.text, "Role updated to Admin");
    assert_eq!(t.get(UserId(11)).unwrap().role, Role::Admin);
}
