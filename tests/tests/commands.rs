use tests::prelude::*;
use tests::prelude::assert_eq;

use sluice::{
    dynamic,
    stmt::{Criterion, Operation, QueryGroup},
};
use std::sync::Arc;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
#[table = "Customers"]
struct Customer {
    #[key]
    #[auto]
    id: i64,
    name: String,
    #[column("EmailAddress")]
    email: Option<String>,
    region: String,
    age: i32,
}

/// A bound primary key and no identity.
#[derive(Debug, Default, Clone, Entity)]
struct Tag {
    #[key]
    code: String,
    label: String,
}

/// No key at all.
#[derive(Debug, Default, Clone, Entity)]
struct LogLine {
    message: String,
}

const COLUMNS: &str = "[id], [name], [EmailAddress], [region], [age]";

fn customer(id: i64, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: None,
        region: "EU".to_string(),
        age: 30,
    }
}

fn tag(code: &str) -> Tag {
    Tag {
        code: code.to_string(),
        label: format!("label {code}"),
    }
}

fn identity_expr(test: &DbTest) -> &'static str {
    test.pick(
        "SCOPE_IDENTITY()",
        "last_insert_rowid()",
        "LAST_INSERT_ID()",
    )
}

fn insert_returns_the_identity(test: &mut DbTest) {
    let registry = test.registry();
    let command = assert_ok!(registry.commands().insert(&customer(0, "Maria")));

    assert_eq!(
        &*command.text,
        test.quoted(&format!(
            "INSERT INTO [Customers] ( [name], [EmailAddress], [region], [age] ) \
             VALUES ( @name, @EmailAddress, @region, @age ) ; \
             SELECT {} AS [Result] ;",
            identity_expr(test)
        ))
    );

    assert_eq!(command.param("name"), Some(&Value::from("Maria")));
    assert_eq!(command.param("emailaddress"), Some(&Value::Null));
    assert_eq!(command.param("age"), Some(&Value::from(30)));
    assert_eq!(command.param("id"), None);
    assert_bound(&command);
}

fn insert_echoes_a_bound_primary_key(test: &mut DbTest) {
    let registry = test.registry();
    let command = assert_ok!(registry.commands().insert(&tag("a")));

    assert_eq!(
        &*command.text,
        test.quoted(
            "INSERT INTO [Tag] ( [code], [label] ) VALUES ( @code, @label ) ; \
             SELECT @code AS [Result] ;"
        )
    );
    assert_bound(&command);
}

fn insert_without_a_key_returns_null(test: &mut DbTest) {
    let registry = test.registry();
    let entry = LogLine {
        message: "started".to_string(),
    };
    let command = assert_ok!(registry.commands().insert(&entry));

    assert_eq!(
        &*command.text,
        test.quoted(
            "INSERT INTO [LogLine] ( [message] ) VALUES ( @message ) ; SELECT NULL AS [Result] ;"
        )
    );
}

fn insert_all_splits_into_batches(test: &mut DbTest) {
    let registry = test.registry();
    let customers: Vec<_> = (0..5).map(|i| customer(0, &format!("c{i}"))).collect();

    let commands = assert_ok!(registry.commands().insert_all(&customers, 2));
    assert_eq!(commands.len(), 3);

    for command in &commands {
        assert_bound(command);
    }

    // Full batches share their text.
    assert!(Arc::ptr_eq(&commands[0].text, &commands[1].text));

    // Order columns carry the position in the input.
    let second = &commands[1];
    assert_eq!(second.param("name_0"), Some(&Value::from("c2")));
    assert_eq!(second.param("__OrderColumn_0"), Some(&Value::I64(2)));
    assert_eq!(second.param("__OrderColumn_1"), Some(&Value::I64(3)));

    let last = &commands[2];
    assert_eq!(last.params.len(), 5);
    assert!(last.text.ends_with(&test.quoted(&format!(
        "SELECT {} AS [Result], @__OrderColumn_0 AS [OrderColumn] ;",
        identity_expr(test)
    ))));
    assert_eq!(last.param("__OrderColumn_0"), Some(&Value::I64(4)));
}

fn insert_all_edge_cases(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();

    assert!(assert_ok!(commands.insert_all::<Customer>(&[], 10)).is_empty());

    let err = assert_err!(
        commands.insert_all(&[customer(0, "a")], 0),
        is_out_of_range
    );
    assert_eq!(
        err.to_string(),
        "out of range: `batch size` must be greater than or equal to 1, got 0"
    );

    // Without a key, rows carry no order column.
    let entries = [
        LogLine {
            message: "a".to_string(),
        },
        LogLine {
            message: "b".to_string(),
        },
    ];
    let batch = assert_ok!(commands.insert_all(&entries, 10));
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].params.len(), 2);
    assert!(!batch[0].text.contains("OrderColumn"));
}

fn update_matches_the_primary_key(test: &mut DbTest) {
    let registry = test.registry();
    let command = assert_ok!(registry.commands().update(&customer(7, "Maria")));

    assert_eq!(
        &*command.text,
        test.quoted(
            "UPDATE [Customers] SET [name] = @name, [EmailAddress] = @EmailAddress, \
             [region] = @region, [age] = @age WHERE ([id] = @_id) ;"
        )
    );
    assert_eq!(command.param("_id"), Some(&Value::I64(7)));
    assert_bound(&command);
}

fn update_by_prefixes_colliding_parameters(test: &mut DbTest) {
    let registry = test.registry();
    let mut maria = customer(7, "Maria");
    maria.region = "US".to_string();

    let filter = Customer::fields().region().eq("EU");
    let command = assert_ok!(registry.commands().update_by(&maria, filter));

    assert!(command
        .text
        .ends_with(&test.quoted("WHERE ([region] = @_region) ;")));
    assert_eq!(command.param("region"), Some(&Value::from("US")));
    assert_eq!(command.param("_region"), Some(&Value::from("EU")));
    assert_bound(&command);
}

fn update_without_a_primary_key_fails(test: &mut DbTest) {
    let registry = test.registry();
    let entry = LogLine::default();

    let err = assert_err!(registry.commands().update(&entry), is_missing_qualifier);
    assert!(err.to_string().contains("LogLine"), "{err}");
}

fn update_all_matches_each_row(test: &mut DbTest) {
    let registry = test.registry();
    let customers = [customer(1, "a"), customer(2, "b"), customer(3, "c")];

    let commands = assert_ok!(registry.commands().update_all(&customers, &[], 2));
    assert_eq!(commands.len(), 2);

    assert_eq!(
        &*commands[1].text,
        test.quoted(
            "UPDATE [Customers] SET [name] = @name_0, [EmailAddress] = @EmailAddress_0, \
             [region] = @region_0, [age] = @age_0 WHERE ([id] = @id_0) ;"
        )
    );
    assert_eq!(commands[0].param("id_1"), Some(&Value::I64(2)));
    assert_eq!(commands[1].param("id_0"), Some(&Value::I64(3)));

    for command in &commands {
        assert_bound(command);
    }
}

fn update_all_on_explicit_qualifiers(test: &mut DbTest) {
    let registry = test.registry();
    let mut maria = customer(1, "Maria");
    maria.email = Some("maria@example.com".to_string());

    let commands = assert_ok!(registry
        .commands()
        .update_all(&[maria], &["email"], 10));

    assert_eq!(
        &*commands[0].text,
        test.quoted(
            "UPDATE [Customers] SET [name] = @name_0, [region] = @region_0, [age] = @age_0 \
             WHERE ([EmailAddress] = @EmailAddress_0) ;"
        )
    );
    assert_eq!(
        commands[0].param("EmailAddress_0"),
        Some(&Value::from("maria@example.com"))
    );
    assert_bound(&commands[0]);
}

fn update_all_rejects_unknown_qualifiers(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();
    let rows = [customer(1, "Maria")];

    let err = assert_err!(
        commands.update_all(&rows, &["Missing"], 10),
        is_invalid_qualifier
    );
    assert!(err.to_string().contains("Missing"), "{err}");

    // Same error kind as the batched merge.
    if test.dialect() != Dialect::Sqlite {
        assert_err!(
            commands.merge_all(&rows, &["Missing"], 10),
            is_invalid_qualifier
        );
    }
}

fn merge_upserts_on_the_primary_key(test: &mut DbTest) {
    let registry = test.registry();
    let result = registry.commands().merge(&tag("a"));

    if test.dialect() == Dialect::Sqlite {
        let err = assert_err!(result, is_unsupported_feature);
        assert_eq!(err.to_string(), "unsupported feature: merge is not supported by SQLite");
        return;
    }

    let command = assert_ok!(result);
    let expected = test.pick(
        "MERGE [Tag] AS T USING ( SELECT @code AS [code], @label AS [label] ) AS S \
         ON ( S.[code] = T.[code] ) \
         WHEN NOT MATCHED THEN INSERT ( [code], [label] ) VALUES ( S.[code], S.[label] ) \
         WHEN MATCHED THEN UPDATE SET T.[label] = S.[label] \
         OUTPUT INSERTED.[code] AS [Result] ;",
        "",
        "INSERT INTO `Tag` ( `code`, `label` ) VALUES ( @code, @label ) \
         ON DUPLICATE KEY UPDATE `label` = VALUES(`label`) ; SELECT @code AS `Result` ;",
    );

    assert_eq!(&*command.text, expected);
    assert_bound(&command);
}

fn merge_on_other_qualifiers(test: &mut DbTest) {
    if test.dialect() != Dialect::SqlServer {
        return;
    }

    let registry = test.registry();
    let command = assert_ok!(registry
        .commands()
        .merge_on(&customer(0, "Maria"), &["email"]));

    assert!(command
        .text
        .contains("ON ( S.[EmailAddress] = T.[EmailAddress] )"));
    assert!(command.text.ends_with("OUTPUT INSERTED.[id] AS [Result] ;"));
    assert_bound(&command);

    // Qualifiers must be mapped columns.
    assert_err!(
        registry.commands().merge_on(&customer(0, "Maria"), &["nickname"]),
        is_invalid_qualifier
    );
}

fn merge_all_tracks_row_positions(test: &mut DbTest) {
    let registry = test.registry();
    let tags: Vec<_> = ["a", "b", "c"].into_iter().map(tag).collect();
    let result = registry.commands().merge_all(&tags, &[], 2);

    if test.dialect() == Dialect::Sqlite {
        assert_err!(result, is_unsupported_feature);
        return;
    }

    let commands = assert_ok!(result);
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[1].param("code_0"), Some(&Value::from("c")));
    assert_eq!(commands[1].param("__OrderColumn_0"), Some(&Value::I64(2)));

    for command in &commands {
        assert_bound(command);
    }
}

fn query_everything(test: &mut DbTest) {
    let registry = test.registry();
    let command = assert_ok!(registry.commands().query(Query::<Customer>::new()));

    assert_eq!(
        &*command.text,
        test.quoted(&format!("SELECT {COLUMNS} FROM [Customers] ;"))
    );
    assert!(command.params.is_empty());
}

fn query_with_a_filter(test: &mut DbTest) {
    let registry = test.registry();
    let fields = Customer::fields();
    let filter = fields.region().eq("EU").and(fields.age().ge(18));

    let command = assert_ok!(registry.commands().query(filter));

    assert_eq!(
        &*command.text,
        test.quoted(&format!(
            "SELECT {COLUMNS} FROM [Customers] WHERE ([region] = @region AND [age] >= @age) ;"
        ))
    );
    assert_eq!(
        command.params,
        [
            sluice::Param::new("region", "EU"),
            sluice::Param::new("age", 18),
        ]
    );
}

fn query_with_top_and_order(test: &mut DbTest) {
    let registry = test.registry();
    let query = Query::new()
        .order_by(Customer::fields().name().asc())
        .order_by(Customer::fields().id().desc())
        .top(10);

    let command = assert_ok!(registry.commands().query(query));

    let expected = match test.dialect() {
        Dialect::SqlServer => format!(
            "SELECT TOP (10) {COLUMNS} FROM [Customers] ORDER BY [name] ASC, [id] DESC ;"
        ),
        _ => test.quoted(&format!(
            "SELECT {COLUMNS} FROM [Customers] ORDER BY [name] ASC, [id] DESC LIMIT 10 ;"
        )),
    };
    assert_eq!(&*command.text, expected);
}

fn query_hints_only_on_sql_server(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands().hints("WITH (NOLOCK)");
    let result = commands.query(Customer::fields().id().eq(1));

    if test.dialect() == Dialect::SqlServer {
        let command = assert_ok!(result);
        assert!(command
            .text
            .starts_with(&format!("SELECT {COLUMNS} FROM [Customers] WITH (NOLOCK) WHERE")));
    } else {
        assert_err!(result, is_unsupported_feature);
    }
}

fn batch_query_pages(test: &mut DbTest) {
    let registry = test.registry();
    let query = Query::new()
        .filter(Customer::fields().region().eq("EU"))
        .order_by(Customer::fields().id().asc());

    let command = assert_ok!(registry.commands().batch_query(query.clone(), 2, 10));
    assert_bound(&command);

    assert!(command.text.ends_with(&test.quoted(test.pick(
        "ORDER BY [id] ASC OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY ;",
        "ORDER BY [id] ASC LIMIT 20, 10 ;",
        "ORDER BY [id] ASC LIMIT 20, 10 ;",
    ))));

    // Paging needs an order.
    let unordered = Query::<Customer>::new();
    assert_err!(
        registry.commands().batch_query(unordered, 0, 10),
        is_empty_order_by
    );
    assert_err!(
        registry.commands().batch_query(query, -1, 10),
        is_out_of_range
    );
}

fn skip_query_offsets(test: &mut DbTest) {
    let registry = test.registry();
    let query = Query::new()
        .filter(Customer::fields().name().eq("Maria"))
        .order_by(Customer::fields().id().asc());

    let command = assert_ok!(registry.commands().skip_query(query, 30, 10));

    if test.dialect() == Dialect::SqlServer {
        assert!(command.text.starts_with("WITH CTE AS ( SELECT ROW_NUMBER() OVER ( ORDER BY [id] ASC )"));
        assert!(command
            .text
            .ends_with("WHERE ([RowNumber] BETWEEN 31 AND 40) ORDER BY [RowNumber] ASC ;"));
    } else {
        assert_eq!(
            &*command.text,
            test.quoted(&format!(
                "SELECT {COLUMNS} FROM [Customers] WHERE ([name] = @name) \
                 ORDER BY [id] ASC LIMIT 30, 10 ;"
            ))
        );
    }
    assert_bound(&command);
    assert_eq!(command.param("name"), Some(&Value::from("Maria")));
}

fn delete_and_truncate(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();

    let command = assert_ok!(commands.delete(Filter::<Customer>::key(7i64)));
    assert_eq!(
        &*command.text,
        test.quoted("DELETE FROM [Customers] WHERE ([id] = @id) ;")
    );
    assert_eq!(command.param("id"), Some(&Value::I64(7)));

    let command = assert_ok!(commands.delete_all::<Customer>());
    assert_eq!(&*command.text, test.quoted("DELETE FROM [Customers] ;"));

    let command = assert_ok!(commands.truncate::<Customer>());
    assert_eq!(
        &*command.text,
        test.quoted(test.pick(
            "TRUNCATE TABLE [Customers] ;",
            "DELETE FROM [Customers] ;",
            "TRUNCATE TABLE [Customers] ;",
        ))
    );

    assert_err!(
        commands.delete(Filter::<LogLine>::key(1)),
        is_missing_qualifier
    );
}

fn key_filters_reject_lists(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();

    assert_err!(
        commands.delete(Filter::<Customer>::key(Value::list([1i64, 2]))),
        is_invalid_operation_value
    );
    assert_err!(
        commands.query(Query::<Customer>::new().filter(Filter::key(Value::list([1i64])))),
        is_invalid_operation_value
    );

    // A null key is still a plain null check.
    let command = assert_ok!(commands.delete(Filter::<Customer>::key(Value::Null)));
    assert_eq!(
        &*command.text,
        test.quoted("DELETE FROM [Customers] WHERE ([id] IS NULL) ;")
    );
    assert_empty!(command.params);
}

fn count_and_exists(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();
    let in_eu = || Customer::fields().region().eq("EU");

    let command = assert_ok!(commands.count(in_eu()));
    assert_eq!(
        &*command.text,
        test.quoted(&format!(
            "SELECT {} AS [CountValue] FROM [Customers] WHERE ([region] = @region) ;",
            test.pick("COUNT_BIG (1)", "COUNT(*)", "COUNT(*)")
        ))
    );
    assert_bound(&command);

    let command = assert_ok!(commands.count_all::<Customer>());
    assert!(command.text.ends_with(&test.quoted("AS [CountValue] FROM [Customers] ;")));

    let command = assert_ok!(commands.exists(in_eu()));
    assert_eq!(
        &*command.text,
        test.quoted(test.pick(
            "SELECT TOP (1) 1 AS [ExistsValue] FROM [Customers] WHERE ([region] = @region) ;",
            "SELECT 1 AS [ExistsValue] FROM [Customers] WHERE ([region] = @region) LIMIT 1 ;",
            "SELECT 1 AS [ExistsValue] FROM [Customers] WHERE ([region] = @region) LIMIT 1 ;",
        ))
    );
}

fn aggregates_use_mapped_columns(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();
    let fields = Customer::fields();

    let command = assert_ok!(commands.max(fields.email(), None));
    assert_eq!(
        &*command.text,
        test.quoted("SELECT MAX ([EmailAddress]) AS [MaxValue] FROM [Customers] ;")
    );

    let command = assert_ok!(commands.average(fields.age(), None));
    assert_eq!(
        &*command.text,
        test.quoted(test.pick(
            "SELECT AVG (CONVERT(FLOAT, [age])) AS [AverageValue] FROM [Customers] ;",
            "SELECT AVG ([age]) AS [AverageValue] FROM [Customers] ;",
            "SELECT AVG ([age]) AS [AverageValue] FROM [Customers] ;",
        ))
    );

    let command = assert_ok!(commands.sum(fields.age(), Some(fields.region().eq("EU").into())));
    assert_eq!(
        &*command.text,
        test.quoted("SELECT SUM ([age]) AS [SumValue] FROM [Customers] WHERE ([region] = @region) ;")
    );
    assert_bound(&command);

    let command = assert_ok!(commands.min(fields.age(), None));
    assert!(command.text.starts_with(&test.quoted("SELECT MIN ([age]) AS [MinValue]")));
}

fn every_filter_form_renders_alike(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();
    let fields = Customer::fields();

    let from_expr = assert_ok!(commands.count(fields.region().eq("EU").and(fields.age().ge(18))));

    let from_dynamic = assert_ok!(commands.count(Filter::<Customer>::from(dynamic! {
        "region" => "EU",
        "age" => Criterion::op(Operation::GreaterThanOrEqual, 18),
    })));

    let from_json = assert_ok!(commands.count(Filter::<Customer>::from(serde_json::json!({
        "region": "EU",
        "age": { "operation": ">=", "value": 18 },
    }))));

    let from_group = assert_ok!(commands.count(Filter::<Customer>::from(QueryGroup::new([
        assert_ok!(sluice::stmt::QueryField::equal("region", "EU")),
        assert_ok!(sluice::stmt::QueryField::new(
            "age",
            Operation::GreaterThanOrEqual,
            18
        )),
    ]))));

    assert_eq!(from_expr.text, from_dynamic.text);
    assert_eq!(from_expr.text, from_json.text);
    assert_eq!(from_expr.text, from_group.text);

    assert_eq!(from_expr.params, from_dynamic.params);
    assert_eq!(from_expr.params, from_group.params);
    assert_eq!(from_json.param("region"), Some(&Value::from("EU")));
}

fn json_null_filter_is_an_argument_error(test: &mut DbTest) {
    let registry = test.registry();
    let filter = Filter::<Customer>::from(serde_json::Value::Null);

    assert_err!(registry.commands().count(filter), is_argument_null);
}

fn statement_cache_shares_text_by_shape(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands();
    let by_name = |name: &str| Customer::fields().name().eq(name.to_string());

    let a = assert_ok!(commands.query(by_name("a")));
    let b = assert_ok!(commands.query(by_name("b")));
    assert!(Arc::ptr_eq(&a.text, &b.text));
    assert_ne!(a.params, b.params);

    let uncached = test.registry_with(|builder| {
        builder.statement_cache(false);
    });
    let commands = uncached.commands();
    let a = assert_ok!(commands.query(by_name("a")));
    let b = assert_ok!(commands.query(by_name("b")));
    assert!(!Arc::ptr_eq(&a.text, &b.text));
    assert_eq!(a.text, b.text);
}

fn commands_for_another_dialect(test: &mut DbTest) {
    let registry = test.registry();
    let commands = registry.commands_for(Dialect::Mysql);

    assert_eq!(registry.commands().dialect(), test.dialect());
    assert_eq!(commands.dialect(), Dialect::Mysql);

    let command = assert_ok!(commands.delete_all::<Customer>());
    assert_eq!(&*command.text, "DELETE FROM `Customers` ;");
}

tests!(
    insert_returns_the_identity,
    insert_echoes_a_bound_primary_key,
    insert_without_a_key_returns_null,
    insert_all_splits_into_batches,
    insert_all_edge_cases,
    update_matches_the_primary_key,
    update_by_prefixes_colliding_parameters,
    update_without_a_primary_key_fails,
    update_all_matches_each_row,
    update_all_on_explicit_qualifiers,
    update_all_rejects_unknown_qualifiers,
    merge_upserts_on_the_primary_key,
    merge_on_other_qualifiers,
    merge_all_tracks_row_positions,
    query_everything,
    query_with_a_filter,
    query_with_top_and_order,
    query_hints_only_on_sql_server,
    batch_query_pages,
    skip_query_offsets,
    delete_and_truncate,
    key_filters_reject_lists,
    count_and_exists,
    aggregates_use_mapped_columns,
    every_filter_form_renders_alike,
    json_null_filter_is_an_argument_error,
    statement_cache_shares_text_by_shape,
    commands_for_another_dialect,
);
