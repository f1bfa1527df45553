use tests::prelude::*;
use tests::prelude::assert_eq;

use sluice::{
    stmt::{Conjunction, Operation, QueryGroup},
    Expr, Path,
};

#[derive(Debug, Default, Entity)]
struct Person {
    #[key]
    id: i64,
    name: String,
    #[column("Years")]
    age: i32,
    nickname: Option<String>,
    active: bool,
}

fn compile(expr: Expr<Person>) -> QueryGroup {
    assert_ok!(Registry::new().compile(&expr))
}

fn columns(group: &QueryGroup) -> Vec<&str> {
    group.fields().iter().map(|f| f.field().name()).collect()
}

fn names(group: &QueryGroup) -> Vec<String> {
    group.bindings().into_iter().map(|(name, _)| name).collect()
}

#[test]
fn single_comparison() {
    let group = compile(Person::fields().name().eq("Maria"));

    assert_eq!(group.conjunction(), Conjunction::And);
    assert_eq!(columns(&group), ["name"]);
    assert!(group.groups().is_empty());
    assert_eq!(group.bindings(), [("name".to_string(), Value::from("Maria"))]);
}

#[test]
fn properties_compile_to_mapped_columns() {
    let group = compile(Person::fields().age().gt(30));

    assert_eq!(columns(&group), ["Years"]);
    assert_eq!(group.fields()[0].operation(), Operation::GreaterThan);
    assert_eq!(names(&group), ["Years"]);
}

#[test]
fn same_conjunction_flattens() {
    let p = Person::fields();

    let left = compile(p.id().eq(1).and(p.name().eq("a")).and(p.active().is_true()));
    let right = compile(p.id().eq(1).and(p.name().eq("a").and(p.active().is_true())));

    for group in [&left, &right] {
        assert_eq!(columns(group), ["id", "name", "active"]);
        assert!(group.groups().is_empty());
    }
    assert_eq!(left, right);
}

#[test]
fn mixed_conjunctions_nest() {
    let p = Person::fields();
    let group = compile(p.active().is_true().and(p.name().eq("a").or(p.name().eq("b"))));

    assert_eq!(group.conjunction(), Conjunction::And);
    assert_eq!(columns(&group), ["active"]);
    assert_eq!(group.groups().len(), 1);

    let nested = &group.groups()[0];
    assert_eq!(nested.conjunction(), Conjunction::Or);
    assert_eq!(columns(nested), ["name", "name"]);

    // Parameter names stay unique across the tree.
    assert_eq!(names(&group), ["active", "name", "name_1"]);
}

#[test]
fn negated_groups_keep_their_shape() {
    let p = Person::fields();
    let group = compile(!(p.id().eq(1).and(p.name().eq("a"))));

    assert!(group.is_not());
    assert_eq!(columns(&group), ["id", "name"]);

    // A negated group is not flattened into its parent.
    let group = compile(p.active().is_true().and(!(p.id().eq(1).and(p.name().eq("a")))));
    assert!(!group.is_not());
    assert_eq!(columns(&group), ["active"]);
    assert!(group.groups()[0].is_not());
}

#[test]
fn negated_comparison_flips_the_operation() {
    let p = Person::fields();

    let group = compile(!p.age().lt(18));
    assert_eq!(group.fields()[0].operation(), Operation::GreaterThanOrEqual);

    let group = compile(!p.nickname().is_null());
    assert_eq!(group.fields()[0].operation(), Operation::NotEqual);
    assert!(group.fields()[0].is_null_check());
    assert!(group.bindings().is_empty());
}

#[test]
fn ranges_and_lists_bind_one_parameter_per_value() {
    let p = Person::fields();
    let group = compile(
        p.age()
            .between(18, 65)
            .and(p.name().in_list(["a", "b"]))
            .and(p.id().not_in_list(Vec::<i64>::new())),
    );

    assert_eq!(
        names(&group),
        ["Years_Left", "Years_Right", "name_In_0", "name_In_1"]
    );
    assert_eq!(group.fields()[2].operation(), Operation::NotIn);
}

#[test]
fn string_helpers_build_like_patterns() {
    let p = Person::fields();
    let group = compile(
        p.name()
            .contains("ar")
            .or(p.name().starts_with("M"))
            .or(p.nickname().ends_with("y")),
    );

    let values: Vec<_> = group.bindings().into_iter().map(|(_, v)| v).collect();
    assert_eq!(
        values,
        [Value::from("%ar%"), Value::from("M%"), Value::from("%y")]
    );
    assert!(group
        .fields()
        .iter()
        .all(|f| f.operation() == Operation::Like));
}

#[test]
fn and_all_and_or_any() {
    let p = Person::fields();

    assert!(Expr::<Person>::and_all([]).is_none());

    let expr = Expr::and_all([p.id().eq(1), p.id().eq(2), p.id().eq(3)]).unwrap();
    assert_eq!(names(&compile(expr)), ["id", "id_1", "id_2"]);

    let expr = Expr::or_any([p.id().eq(1), p.id().eq(2)]).unwrap();
    assert_eq!(compile(expr).conjunction(), Conjunction::Or);
}

#[test]
fn unknown_properties_are_rejected() {
    let registry = Registry::new();
    let expr = Path::<Person, String>::new("email").eq("x");

    let err = assert_err!(registry.compile(&expr), is_invalid_expression);
    assert_eq!(
        err.to_string(),
        "invalid expression: `email` is not a mapped property of Person"
    );
}

#[test]
fn compiled_filters_render_deterministically() {
    let registry = Registry::new();
    let p = Person::fields();
    let build = || p.age().ge(18).and(p.name().ne("x").or(p.nickname().is_not_null()));

    let first = assert_ok!(registry.commands().query(build()));
    let second = assert_ok!(registry.commands().query(build()));

    assert_eq!(first, second);
    assert_eq!(
        &*first.text,
        "SELECT [id], [name], [Years], [nickname], [active] FROM [Person] \
         WHERE ([Years] >= @Years AND ([name] <> @name OR [nickname] IS NOT NULL)) ;"
    );
}
