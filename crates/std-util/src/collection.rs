/// Asserts that the collection has no elements.
#[macro_export]
macro_rules! assert_empty {
    ($e:expr) => {{
        let collection = &$e;
        assert!(
            collection.is_empty(),
            "expected empty collection; len={}",
            collection.len()
        );
    }};
}

/// Asserts that no two items of the iterator are equal.
#[macro_export]
macro_rules! assert_unique {
    ($e:expr) => {{
        let items: Vec<_> = ::std::iter::IntoIterator::into_iter($e).collect();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a, b, "expected unique items; duplicate={:?}", a);
            }
        }
    }};
}
