use tests::prelude::*;

use sluice::{Expr, Materializer, Routine};

#[derive(Debug, Default, Entity)]
struct Item {
    id: i64,
    name: String,
}

fn assert_sync_send<T: Send + Sync>(_: T) {}

fn assert_type_sync_send<T: Send + Sync>() {}

#[test]
fn registry_and_outputs_are_sync_send() {
    let registry = Registry::new();
    assert_sync_send(registry.clone());
    assert_sync_send(registry.commands());
    assert_sync_send(assert_ok!(registry.commands().query(Item::fields().id().eq(1))));

    assert_type_sync_send::<Materializer>();
    assert_type_sync_send::<Routine<Item>>();
    assert_type_sync_send::<Expr<Item>>();
    assert_type_sync_send::<Query<Item>>();
    assert_type_sync_send::<Error>();
}
