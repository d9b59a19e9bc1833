use super::{Grouped, Typename};

/// Groups `objects` by discriminant with a plain left fold.
///
/// Same result as the native strategy; used when native grouping is disabled.
pub fn fold_by_typename<I>(objects: I) -> Grouped<I::Item>
where
    I: IntoIterator,
    I::Item: Typename,
{
    objects.into_iter().fold(Grouped::new(), |mut acc, object| {
        let key = object.typename().to_owned();
        acc.groups.entry(key).or_default().push(object);
        acc
    })
}
