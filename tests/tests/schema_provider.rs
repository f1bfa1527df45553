use tests::prelude::*;
use tests::prelude::assert_eq;

/// Keys come from the database only.
#[derive(Debug, Default, Entity)]
struct Ticket {
    ticket_no: i64,
    subject: String,
}

#[derive(Debug, Default, Entity)]
struct Account {
    #[key]
    #[auto]
    #[column(type = "BIGINT")]
    id: i64,
    owner: String,
}

#[derive(Debug, Default, Entity)]
struct Note {
    #[key]
    #[auto]
    id: i32,
    text: String,
}

fn ticket() -> Ticket {
    Ticket {
        ticket_no: 0,
        subject: "printer on fire".to_string(),
    }
}

fn keys_come_from_the_schema(test: &mut DbTest) {
    test.schema().table(
        "Ticket",
        [
            DbField::new("ticket_no")
                .primary()
                .identity()
                .database_type("BIGINT"),
            DbField::new("subject"),
        ],
    );
    let registry = test.registry();

    let primary = assert_ok!(registry.primary::<Ticket>()).unwrap();
    assert_eq!(primary.name, "ticket_no");
    let identity = assert_ok!(registry.identity::<Ticket>()).unwrap();
    assert_eq!(identity.database_type.as_deref(), Some("BIGINT"));

    let command = assert_ok!(registry.commands().insert(&ticket()));
    assert_eq!(
        &*command.text,
        test.quoted(&format!(
            "INSERT INTO [Ticket] ( [subject] ) VALUES ( @subject ) ; SELECT {} AS [Result] ;",
            test.pick(
                "CONVERT(BIGINT, SCOPE_IDENTITY())",
                "CAST(last_insert_rowid() AS BIGINT)",
                "LAST_INSERT_ID()",
            )
        ))
    );
}

fn schema_types_fill_in_entity_keys(test: &mut DbTest) {
    test.schema()
        .table("Note", [DbField::new("id").primary().database_type("INT")]);
    let registry = test.registry();

    let identity = assert_ok!(registry.identity::<Note>()).unwrap();
    assert!(identity.is_identity);
    assert_eq!(identity.database_type.as_deref(), Some("INT"));

    let note = Note {
        id: 0,
        text: "hello".to_string(),
    };
    let command = assert_ok!(registry.commands().insert(&note));
    assert!(command.text.ends_with(&test.quoted(test.pick(
        "SELECT CONVERT(INT, SCOPE_IDENTITY()) AS [Result] ;",
        "SELECT CAST(last_insert_rowid() AS INT) AS [Result] ;",
        "SELECT LAST_INSERT_ID() AS [Result] ;",
    ))));
}

fn declared_types_win_over_the_schema(test: &mut DbTest) {
    test.schema()
        .table("account", [DbField::new("ID").primary().database_type("INT")]);
    let registry = test.registry();

    let identity = assert_ok!(registry.identity::<Account>()).unwrap();
    assert_eq!(identity.database_type.as_deref(), Some("BIGINT"));

    if test.dialect() == Dialect::SqlServer {
        let account = Account {
            id: 0,
            owner: "Maria".to_string(),
        };
        let command = assert_ok!(registry.commands().insert(&account));
        assert!(command
            .text
            .ends_with("SELECT CONVERT(BIGINT, SCOPE_IDENTITY()) AS [Result] ;"));
    }
}

fn lookups_are_memoized_per_table(test: &mut DbTest) {
    test.schema()
        .table("Ticket", [DbField::new("ticket_no").primary()]);
    let registry = test.registry();

    for _ in 0..3 {
        assert_ok!(registry.commands().insert(&ticket()));
        assert_ok!(registry.primary::<Ticket>());
    }
    assert_ok!(registry.db_fields("TICKET"));
    assert_eq!(test.schema().calls(), 1);

    let columns = assert_ok!(registry.db_fields("ticket"));
    assert_eq!(columns.len(), 1);
    assert_eq!(test.schema().calls(), 1);

    // Unknown tables are remembered as empty.
    assert!(assert_ok!(registry.db_fields("Missing")).is_empty());
    assert!(assert_ok!(registry.db_fields("missing")).is_empty());
    assert_eq!(test.schema().calls(), 2);
}

fn without_a_key_tickets_bind_everything(test: &mut DbTest) {
    let registry = test.registry();

    assert_eq!(assert_ok!(registry.primary::<Ticket>()), None);

    let command = assert_ok!(registry.commands().insert(&ticket()));
    assert_eq!(
        &*command.text,
        test.quoted(
            "INSERT INTO [Ticket] ( [ticket_no], [subject] ) VALUES ( @ticket_no, @subject ) ; \
             SELECT NULL AS [Result] ;"
        )
    );
}

#[test]
fn no_provider_means_no_columns() {
    let registry = Registry::new();

    assert!(assert_ok!(registry.db_fields("Ticket")).is_empty());
    assert_eq!(assert_ok!(registry.primary::<Ticket>()), None);
}

tests!(
    keys_come_from_the_schema,
    schema_types_fill_in_entity_keys,
    declared_types_win_over_the_schema,
    lookups_are_memoized_per_table,
    without_a_key_tickets_bind_everything,
);
