use tests::prelude::*;
use tests::prelude::assert_eq;

use sluice::{stmt::Field, Path};
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
#[table = "Customers"]
struct Customer {
    #[key]
    #[auto]
    id: i64,

    name: String,

    #[column("EmailAddress", type = "NVARCHAR(255)")]
    email: Option<String>,

    #[ignore]
    visits: u32,
}

#[derive(Debug, Default, Entity)]
struct Order {
    order_id: uuid::Uuid,
    total: f64,
}

#[derive(Debug, Default, Entity)]
struct Product {
    id: i32,
    r#type: String,
}

#[derive(Debug, Default, Entity)]
struct AuditEntry {
    message: String,
}

#[test]
fn derive_lists_mapped_properties_in_declaration_order() {
    let names: Vec<_> = Customer::properties().iter().map(|p| p.name).collect();
    assert_eq!(names, ["id", "name", "email"]);

    let email = Customer::property("EMAIL").unwrap();
    assert_eq!(email.column, Some("EmailAddress"));
    assert_eq!(email.db_type, Some("NVARCHAR(255)"));
    assert!(email.nullable);
    assert_eq!(email.ty, Type::String);

    let id = Customer::property("id").unwrap();
    assert!(id.key && id.auto);
    assert!(!id.nullable);

    assert!(Customer::property("visits").is_none());
    assert_eq!(Customer::TABLE, Some("Customers"));
    assert_eq!(Order::TABLE, None);
}

#[test]
fn accessors_move_values_in_and_out() {
    let mut customer = Customer {
        id: 7,
        name: "Maria".to_string(),
        email: None,
        visits: 3,
    };

    let name = Customer::property("name").unwrap();
    assert_eq!((name.get)(&customer), Value::from("Maria"));

    let email = Customer::property("email").unwrap();
    assert_eq!((email.get)(&customer), Value::Null);
    assert_ok!((email.set)(&mut customer, Value::from("m@example.com")));
    assert_eq!(customer.email.as_deref(), Some("m@example.com"));

    let id = Customer::property("id").unwrap();
    assert_err!((id.set)(&mut customer, Value::from("seven")), is_type_conversion);
    assert_eq!(customer.id, 7);
}

#[test]
fn raw_identifiers_map_to_their_plain_name() {
    let registry = Registry::new();

    assert_eq!(registry.column_name::<Product>("type").as_deref(), Some("type"));
    assert_eq!(Product::fields().r#type().property(), "type");
}

#[test]
fn attributes_resolve_table_columns_and_keys() {
    let registry = Registry::new();

    assert_eq!(registry.table_name::<Customer>(), "Customers");
    assert_eq!(registry.column_name::<Customer>("email").as_deref(), Some("EmailAddress"));
    assert_eq!(registry.column_name::<Customer>("visits"), None);
    assert_eq!(
        registry.db_type::<Customer>("email").as_deref(),
        Some("NVARCHAR(255)")
    );

    let fields = registry.fields::<Customer>();
    assert_eq!(fields, Field::from_names(["id", "name", "EmailAddress"]));
    assert_eq!(fields[0].ty(), Some(Type::I64));

    let primary = assert_ok!(registry.primary::<Customer>()).unwrap();
    assert_eq!(primary.name, "id");
    assert!(primary.is_primary);

    let identity = assert_ok!(registry.identity::<Customer>()).unwrap();
    assert_eq!(identity.name, "id");
    assert!(identity.is_identity);
}

#[test]
fn conventions_apply_without_attributes() {
    let registry = Registry::new();

    // The type name is the table name.
    assert_eq!(registry.table_name::<Order>(), "Order");

    // `{Type}Id` is the primary key when there is no `id`.
    let primary = assert_ok!(registry.primary::<Order>()).unwrap();
    assert_eq!(primary.name, "order_id");
    assert_eq!(assert_ok!(registry.identity::<Order>()), None);

    let primary = assert_ok!(registry.primary::<Product>()).unwrap();
    assert_eq!(primary.name, "id");

    assert_eq!(assert_ok!(registry.primary::<AuditEntry>()), None);
}

#[test]
fn meta_is_resolved_once() {
    let registry = Registry::new();

    let first = registry.meta::<Customer>();
    let second = registry.clone().meta::<Customer>();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn explicit_mapping_wins_over_attributes() -> sluice::Result<()> {
    let registry = Registry::new();
    let before = registry.meta::<Customer>();

    registry
        .map::<Customer>()
        .table("dbo.Clients")?
        .column(Customer::fields().name(), "FullName")?
        .db_type(Customer::fields().name(), "NVARCHAR(100)")?;

    let after = registry.meta::<Customer>();
    assert!(!Arc::ptr_eq(&before, &after));

    assert_eq!(after.table_name(), "dbo.Clients");
    assert_eq!(registry.column_name::<Customer>("name").as_deref(), Some("FullName"));
    assert_eq!(
        registry.db_type::<Customer>("name").as_deref(),
        Some("NVARCHAR(100)")
    );

    // Untouched attributes still apply.
    assert_eq!(registry.column_name::<Customer>("email").as_deref(), Some("EmailAddress"));
    Ok(())
}

#[test]
fn explicit_keys_replace_conventions() -> sluice::Result<()> {
    let registry = Registry::new();

    registry
        .map::<Product>()
        .primary(Product::fields().r#type())?
        .identity(Product::fields().id())?;

    let primary = registry.primary::<Product>()?.unwrap();
    assert_eq!(primary.name, "type");

    let identity = registry.identity::<Product>()?.unwrap();
    assert_eq!(identity.name, "id");
    Ok(())
}

#[test]
fn registering_a_mapping_twice_fails() -> sluice::Result<()> {
    let registry = Registry::new();
    registry.map::<Order>().table("Orders")?;

    let err = assert_err!(registry.map::<Order>().table("Purchases"), is_mapping_exists);
    assert!(err.to_string().contains("Order"), "{err}");
    assert_eq!(registry.table_name::<Order>(), "Orders");

    // Other kinds are independent.
    registry.map::<Order>().column(Order::fields().total(), "Amount")?;
    assert_err!(
        registry.map::<Order>().column(Order::fields().total(), "Sum"),
        is_mapping_exists
    );
    Ok(())
}

#[test]
fn forced_and_overridable_registrations() -> sluice::Result<()> {
    let registry = Registry::new();

    registry.map::<Order>().table("Orders")?;
    registry.map::<Order>().force().table("Purchases")?;
    assert_eq!(registry.table_name::<Order>(), "Purchases");

    registry.map::<Customer>().overridable().table("Clients")?;
    registry.map::<Customer>().table("People")?;
    assert_eq!(registry.table_name::<Customer>(), "People");

    // The replacement was not overridable itself.
    assert_err!(registry.map::<Customer>().table("Humans"), is_mapping_exists);
    Ok(())
}

#[test]
fn mapping_an_unknown_property_fails() {
    let registry = Registry::new();
    let path = Path::<Customer, String>::new("nickname");

    let err = assert_err!(
        registry.map::<Customer>().column(path, "Nick"),
        is_invalid_expression
    );
    assert_eq!(
        err.to_string(),
        "invalid expression: `nickname` is not a mapped property of Customer"
    );
}

#[test]
fn clones_share_mappings() -> sluice::Result<()> {
    let registry = Registry::new();
    let clone = registry.clone();

    clone.map::<Order>().table("Orders")?;
    assert_eq!(registry.table_name::<Order>(), "Orders");
    Ok(())
}
