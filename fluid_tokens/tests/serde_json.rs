// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading token tables from JSON and serializing effective views.

#![cfg(feature = "serde")]

use fluid_tokens::{TokenAccessor, TokenTable, TokenValue};

const TOKENS_JSON: &str = r##"{
    "FLUID_SPACING_SMALL": "8px",
    "FLUID_LAYOUT_DENSE": 0.5,
    "FLUID_Z_INDEX": 10,
    "THEMES": {
        "ABYSS": { "FLUID_COLOR_BACKGROUND": "#14141f" },
        "SURFACE": { "FLUID_COLOR_BACKGROUND": "#ffffff" }
    }
}"##;

#[test]
fn deserialize_nested_table() {
    let table: TokenTable = serde_json::from_str(TOKENS_JSON).unwrap();

    assert_eq!(table.len(), 4);
    assert_eq!(
        table.get("FLUID_SPACING_SMALL").and_then(TokenValue::as_str),
        Some("8px")
    );
    assert_eq!(
        table.get("FLUID_Z_INDEX").and_then(TokenValue::as_number),
        Some(10.0)
    );

    let surface = table
        .get("THEMES")
        .and_then(TokenValue::as_group)
        .and_then(|themes| themes.get("SURFACE"))
        .and_then(TokenValue::as_group)
        .unwrap();
    assert_eq!(
        surface.get("FLUID_COLOR_BACKGROUND").and_then(TokenValue::as_str),
        Some("#ffffff")
    );
}

#[test]
fn unsupported_json_types_are_rejected() {
    assert!(serde_json::from_str::<TokenTable>(r#"{ "A": true }"#).is_err());
    assert!(serde_json::from_str::<TokenTable>(r#"{ "A": null }"#).is_err());
    assert!(serde_json::from_str::<TokenTable>(r#"{ "A": [1, 2] }"#).is_err());
    assert!(serde_json::from_str::<TokenTable>(r#"["A"]"#).is_err());
}

#[test]
fn serialized_view_includes_override_only_tokens() {
    let table: TokenTable = serde_json::from_str(r#"{ "A": "1", "B": "2" }"#).unwrap();
    let mut accessor = TokenAccessor::new(table);
    accessor.set_override("B", 20_i32);
    accessor.set_override("C", "3");

    let json = serde_json::to_value(accessor.tokens()).unwrap();
    assert_eq!(json, serde_json::json!({ "A": "1", "B": 20.0, "C": "3" }));
}

#[test]
fn table_round_trips_through_json() {
    let table: TokenTable = serde_json::from_str(TOKENS_JSON).unwrap();
    let text = serde_json::to_string(&table).unwrap();
    let back: TokenTable = serde_json::from_str(&text).unwrap();
    assert_eq!(table, back);
}
