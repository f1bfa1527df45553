/// Asserts that the expression is `Err` and returns the error.
///
/// With a second argument naming a predicate method, also asserts that the
/// predicate holds for the error, e.g. `assert_err!(res, is_out_of_range)`.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $pred:ident) => {{
        let e = $crate::assert_err!($e);
        assert!(
            e.$pred(),
            "expected error satisfying `{}`; actual={}",
            stringify!($pred),
            e
        );
        e
    }};
}

/// Asserts that the expression is `Ok` and returns the value.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
