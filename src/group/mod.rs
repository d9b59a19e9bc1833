//! Grouping of tagged objects by their `__typename`-style discriminant.
//!
//! [`group_by_typename`] is the entry point. It picks between the native
//! [`native::group_by_key`] primitive and the [`fallback::fold_by_typename`]
//! fold on every call, depending on [`capability::native_grouping_available`].
//! Both produce the same [`Grouped`] mapping.

pub mod capability;
pub mod fallback;
pub mod native;
pub mod variant;

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

pub use capability::{
    disable_native_grouping, force_fallback, native_grouping_available, restore_native_grouping,
    selected_strategy, FallbackScope, Strategy,
};
pub use fallback::fold_by_typename;
pub use native::group_by_key;
pub use variant::{IntoVariant, TypenameLiteral, Variant};

/// An object carrying a string discriminant naming its variant.
pub trait Typename {
    fn typename(&self) -> &str;
}

impl<T: Typename + ?Sized> Typename for &T {
    fn typename(&self) -> &str {
        (**self).typename()
    }
}

impl<T: Typename + ?Sized> Typename for Box<T> {
    fn typename(&self) -> &str {
        (**self).typename()
    }
}

/// Objects grouped by discriminant.
///
/// Only observed discriminants are keys, no group is empty, and each group keeps
/// the input order of its objects. Keys iterate in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grouped<T> {
    groups: IndexMap<String, Vec<T>>,
}

impl<T> Grouped<T> {
    fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    /// Number of distinct discriminants.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn contains_key(&self, typename: &str) -> bool {
        self.groups.contains_key(typename)
    }

    /// The group for `typename`, typed as the full input element type.
    pub fn get(&self, typename: &str) -> Option<&[T]> {
        self.groups.get(typename).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Total number of grouped objects.
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn into_inner(self) -> IndexMap<String, Vec<T>> {
        self.groups
    }
}

impl<T> From<IndexMap<String, Vec<T>>> for Grouped<T> {
    fn from(groups: IndexMap<String, Vec<T>>) -> Self {
        Self { groups }
    }
}

impl<T> IntoIterator for Grouped<T> {
    type Item = (String, Vec<T>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups `objects` by discriminant.
///
/// Uses the native grouping primitive when it is available at call time and the
/// fold otherwise. Pass `&objects` (or `objects.iter()`) to group by reference.
pub fn group_by_typename<I>(objects: I) -> Grouped<I::Item>
where
    I: IntoIterator,
    I::Item: Typename,
{
    let strategy = selected_strategy();
    debug!("grouping by typename with {:?} strategy", strategy);

    match strategy {
        Strategy::Native => Grouped::from(group_by_key(objects, |object| {
            object.typename().to_owned()
        })),
        Strategy::Fallback => fold_by_typename(objects),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Typename;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Node {
        pub typename: &'static str,
        pub id: u32,
        pub label: &'static str,
    }

    impl Typename for Node {
        fn typename(&self) -> &str {
            self.typename
        }
    }

    pub fn node(typename: &'static str, id: u32, label: &'static str) -> Node {
        Node {
            typename,
            id,
            label,
        }
    }

    pub fn users_and_posts() -> Vec<Node> {
        vec![
            node("User", 1, "John"),
            node("User", 2, "Jane"),
            node("Post", 1, "Hello World"),
            node("Post", 2, "Goodbye World"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{node, users_and_posts};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_objects_by_typename() {
        let grouped = group_by_typename(users_and_posts());

        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped.get("User").unwrap(),
            &[node("User", 1, "John"), node("User", 2, "Jane")]
        );
        assert_eq!(
            grouped.get("Post").unwrap(),
            &[node("Post", 1, "Hello World"), node("Post", 2, "Goodbye World")]
        );
    }

    #[test]
    fn empty_input_has_no_groups() {
        let grouped = group_by_typename(Vec::<fixtures::Node>::new());
        assert!(grouped.is_empty());
        assert_eq!(grouped.total(), 0);
    }

    #[test]
    fn single_object_makes_single_group() {
        let grouped = group_by_typename(vec![node("User", 1, "John")]);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec!["User"]);
        assert_eq!(grouped.get("User").unwrap(), &[node("User", 1, "John")]);
    }

    #[test]
    fn groups_by_reference_without_consuming_input() {
        let nodes = users_and_posts();
        let grouped = group_by_typename(&nodes);

        assert_eq!(grouped.get("User").unwrap(), &[&nodes[0], &nodes[1]]);
        assert_eq!(nodes.len(), 4);
    }

    #[test]
    fn keys_follow_first_appearance() {
        let grouped = group_by_typename(vec![
            node("Post", 1, "a"),
            node("User", 1, "b"),
            node("Post", 2, "c"),
            node("Comment", 1, "d"),
        ]);
        assert_eq!(
            grouped.keys().collect::<Vec<_>>(),
            vec!["Post", "User", "Comment"]
        );
    }

    #[test]
    fn consumes_into_owned_groups() {
        let pairs: Vec<(String, Vec<u32>)> = group_by_typename(users_and_posts())
            .into_iter()
            .map(|(key, group)| (key, group.into_iter().map(|n| n.id).collect()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("User".to_string(), vec![1, 2]),
                ("Post".to_string(), vec![1, 2]),
            ]
        );
    }

    #[test]
    fn serializes_as_object_of_arrays() {
        #[derive(Serialize)]
        struct Tagged {
            __typename: &'static str,
            id: u32,
        }
        impl Typename for Tagged {
            fn typename(&self) -> &str {
                self.__typename
            }
        }

        let grouped = group_by_typename(vec![
            Tagged {
                __typename: "User",
                id: 1,
            },
            Tagged {
                __typename: "Post",
                id: 7,
            },
        ]);
        let json = serde_json::to_string(&grouped).unwrap();
        assert_eq!(
            json,
            r#"{"User":[{"__typename":"User","id":1}],"Post":[{"__typename":"Post","id":7}]}"#
        );
    }
}
