// Flips the process-wide native grouping switch, so it lives in its own test binary.
use pretty_assertions::assert_eq;
use typename_group::group::{
    disable_native_grouping, native_grouping_available, restore_native_grouping,
    selected_strategy, Strategy,
};
use typename_group::{group_by_typename, typename_union};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
}

typename_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Node {
        User(User) = "User",
        Post(Post) = "Post",
    }
}

fn nodes() -> Vec<Node> {
    vec![
        User { id: 1, name: "John" }.into(),
        User { id: 2, name: "Jane" }.into(),
        Post { id: 1, title: "Hello World" }.into(),
        Post { id: 2, title: "Goodbye World" }.into(),
    ]
}

#[test]
fn switch_is_rechecked_on_every_call() {
    assert!(native_grouping_available());
    let before = group_by_typename(nodes());

    disable_native_grouping();
    assert_eq!(selected_strategy(), Strategy::Fallback);
    let during = group_by_typename(nodes());
    let users = during.variant::<User>().unwrap();
    assert_eq!(
        users,
        vec![&User { id: 1, name: "John" }, &User { id: 2, name: "Jane" }]
    );

    restore_native_grouping();
    assert_eq!(selected_strategy(), Strategy::Native);
    let after = group_by_typename(nodes());

    assert_eq!(before, during);
    assert_eq!(during, after);
    assert_eq!(after.keys().collect::<Vec<_>>(), vec!["User", "Post"]);
}
