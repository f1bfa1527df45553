#[macro_use]
mod macros;

mod db_test;
pub use db_test::DbTest;

pub mod prelude;

mod reader;
pub use reader::VecReader;

pub use schema::StaticSchema;

pub use std_util::*;

use sluice::Command;

/// Installs a test-writer subscriber, once. Filtered by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The distinct `@name` placeholders of `text`, in order of appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = vec![];
    let mut rest = text;

    while let Some(start) = rest.find('@') {
        rest = &rest[start + 1..];
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        let name = &rest[..end];

        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
        rest = &rest[end..];
    }

    names
}

/// Asserts that every placeholder in the text has exactly one parameter and
/// every parameter appears in the text.
#[track_caller]
pub fn assert_bound(command: &Command) {
    let mut expected = placeholders(&command.text);
    let mut actual: Vec<_> = command.params.iter().map(|p| p.name.clone()).collect();
    expected.sort();
    actual.sort();

    pretty_assertions::assert_eq!(actual, expected, "{}", command.text);
}
