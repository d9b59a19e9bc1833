//! Narrowing grouped unions back to their variant types.
//!
//! A union enum implements [`Typename`] plus [`Variant<V>`] for every variant
//! struct `V`, and each `V` names its discriminant through [`TypenameLiteral`].
//! [`Grouped::variant`] then hands back `V`s rather than the union. The
//! [`typename_union!`](crate::typename_union) macro writes all of these impls.

use super::{Grouped, Typename};

/// A variant type whose discriminant is fixed.
pub trait TypenameLiteral {
    const TYPENAME: &'static str;
}

pub trait Variant<V>: Typename {
    fn as_variant(&self) -> Option<&V>;
}

pub trait IntoVariant<V>: Variant<V> + Sized {
    fn into_variant(self) -> Result<V, Self>;
}

impl<U, V> Variant<V> for &U
where
    U: Variant<V> + ?Sized,
{
    fn as_variant(&self) -> Option<&V> {
        (**self).as_variant()
    }
}

impl<T: Typename> Grouped<T> {
    /// The group for `V`, narrowed to `V`. `None` when no `V` was grouped.
    pub fn variant<V>(&self) -> Option<Vec<&V>>
    where
        T: Variant<V>,
        V: TypenameLiteral,
    {
        self.groups
            .get(V::TYPENAME)
            .map(|group| {
                group
                    .iter()
                    .filter_map(|object| Variant::<V>::as_variant(object))
                    .collect()
            })
    }

    /// Removes the group for `V` and returns it narrowed to `V`.
    pub fn take_variant<V>(&mut self) -> Option<Vec<V>>
    where
        T: IntoVariant<V>,
        V: TypenameLiteral,
    {
        self.groups
            .shift_remove(V::TYPENAME)
            .map(|group| {
                group
                    .into_iter()
                    .filter_map(|object| IntoVariant::<V>::into_variant(object).ok())
                    .collect()
            })
    }
}

/// Declares a union enum of variant structs keyed by discriminant literals.
///
/// ```
/// use typename_group::{group_by_typename, typename_union};
///
/// #[derive(Debug, PartialEq)]
/// pub struct User { pub name: String }
/// #[derive(Debug, PartialEq)]
/// pub struct Post { pub title: String }
///
/// typename_union! {
///     #[derive(Debug, PartialEq)]
///     pub enum Node {
///         User(User) = "User",
///         Post(Post) = "Post",
///     }
/// }
///
/// let nodes = vec![
///     Node::from(User { name: "John".into() }),
///     Node::from(User { name: "Jane".into() }),
/// ];
/// let grouped = group_by_typename(nodes);
/// let users: Vec<&User> = grouped.variant::<User>().unwrap();
/// assert_eq!(users[1].name, "Jane");
/// assert!(grouped.variant::<Post>().is_none());
/// ```
#[macro_export]
macro_rules! typename_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident ( $ty:ty ) = $tag:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $variant($ty) ),+
        }

        impl $crate::Typename for $name {
            fn typename(&self) -> &str {
                match self {
                    $( $name::$variant(_) => $tag ),+
                }
            }
        }

        $(
            impl $crate::TypenameLiteral for $ty {
                const TYPENAME: &'static str = $tag;
            }

            impl $crate::Typename for $ty {
                fn typename(&self) -> &str {
                    $tag
                }
            }

            impl $crate::Variant<$ty> for $name {
                #[allow(unreachable_patterns)]
                fn as_variant(&self) -> ::core::option::Option<&$ty> {
                    match self {
                        $name::$variant(inner) => ::core::option::Option::Some(inner),
                        _ => ::core::option::Option::None,
                    }
                }
            }

            impl $crate::IntoVariant<$ty> for $name {
                #[allow(unreachable_patterns)]
                fn into_variant(self) -> ::core::result::Result<$ty, Self> {
                    match self {
                        $name::$variant(inner) => ::core::result::Result::Ok(inner),
                        other => ::core::result::Result::Err(other),
                    }
                }
            }

            impl ::core::convert::From<$ty> for $name {
                fn from(inner: $ty) -> Self {
                    $name::$variant(inner)
                }
            }
        )+
    };
}
