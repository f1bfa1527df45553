/// Builds a [`Dynamic`](crate::stmt::Dynamic) predicate object.
///
/// ```
/// # use sluice_core::{dynamic, stmt::{Criterion, Operation}};
/// let filter = dynamic! {
///     "Id" => 1,
///     "Name" => Criterion::op(Operation::Like, "Mic%"),
/// };
/// assert_eq!(filter.len(), 2);
/// ```
#[macro_export]
macro_rules! dynamic {
    () => {
        $crate::stmt::Dynamic::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut dynamic = $crate::stmt::Dynamic::new();
        $(
            dynamic.insert($key, $value);
        )+
        dynamic
    }};
}
