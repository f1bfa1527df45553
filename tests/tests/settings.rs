use tests::prelude::*;
use tests::prelude::assert_eq;

use sluice::{Conversion, Settings};
use serde_json::json;

#[test]
fn defaults() {
    let settings = Settings::default();

    assert_eq!(settings.dialect, Dialect::SqlServer);
    assert_eq!(settings.conversion, Conversion::Default);
    assert!(settings.statement_cache);

    assert_eq!(Registry::new().settings(), &settings);
}

#[test]
fn deserialize_from_json() {
    let settings: Settings = assert_ok!(serde_json::from_value(json!({
        "dialect": "sqlite",
        "conversion": "automatic",
        "statement_cache": false,
    })));

    assert_eq!(
        settings,
        Settings {
            dialect: Dialect::Sqlite,
            conversion: Conversion::Automatic,
            statement_cache: false,
        }
    );
}

#[test]
fn missing_keys_take_their_default() {
    let settings: Settings = assert_ok!(serde_json::from_value(json!({ "dialect": "mysql" })));
    assert_eq!(settings.dialect, Dialect::Mysql);
    assert!(settings.statement_cache);

    let settings: Settings = assert_ok!(serde_json::from_value(json!({})));
    assert_eq!(settings, Settings::default());
}

#[test]
fn sql_server_aliases() {
    for name in ["sql_server", "mssql", "sqlserver"] {
        let settings: Settings = assert_ok!(serde_json::from_value(json!({ "dialect": name })));
        assert_eq!(settings.dialect, Dialect::SqlServer, "{name}");
    }

    assert_err!(serde_json::from_value::<Settings>(json!({ "dialect": "oracle" })));
}

#[test]
fn builder_applies_settings() {
    let settings = Settings {
        dialect: Dialect::Mysql,
        conversion: Conversion::Automatic,
        statement_cache: false,
    };

    let registry = Registry::builder().settings(settings.clone()).build();
    assert_eq!(registry.settings(), &settings);
    assert_eq!(registry.commands().dialect(), Dialect::Mysql);

    // Later calls override single settings.
    let registry = Registry::builder()
        .settings(settings)
        .dialect(Dialect::Sqlite)
        .build();
    assert_eq!(registry.settings().dialect, Dialect::Sqlite);
    assert_eq!(registry.settings().conversion, Conversion::Automatic);
}
