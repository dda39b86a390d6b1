//! Document commands: flatten, nest, get, set, remove, keys, key, count, merge

use crate::common::{TestWorkspace, MENU_JSON};
use anyhow::Result;
use serde_json::json;

#[test]
fn test_flatten_expands_dotted_and_nested_keys() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", MENU_JSON)?;

    let result = ws.command(&["flatten", "messages.json"]).assert_success()?;
    assert_eq!(
        result.json()?,
        json!({
            "menu.edit.copy": "Copy",
            "menu.file.open": "Open",
            "menu.file.save": "Save",
            "title": "App"
        })
    );
    Ok(())
}

#[test]
fn test_nest_flat_document() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("flat.json", r#"{"a.b.c": 1, "a.d": true}"#)?;

    let result = ws.command(&["nest", "flat.json"]).assert_success()?;
    assert_eq!(result.json()?, json!({"a": {"b": {"c": 1}, "d": true}}));
    Ok(())
}

#[test]
fn test_nest_collisions_follow_document_order() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("leaf_last.json", r#"{"a.b": 2, "a": 1}"#)?;
    ws.write("leaf_first.json", r#"{"a": 1, "a.b": 2}"#)?;

    for _ in 0..5 {
        let leaf_last = ws.command(&["nest", "leaf_last.json"]).assert_success()?;
        assert_eq!(leaf_last.json()?, json!({"a": 1}));

        let leaf_first = ws.command(&["nest", "leaf_first.json"]).assert_success()?;
        assert_eq!(leaf_first.json()?, json!({"a": {"b": 2}}));
    }
    Ok(())
}

#[test]
fn test_get_leaf_and_subtree() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", MENU_JSON)?;

    let leaf = ws
        .command(&["get", "messages.json", "menu.file.open"])
        .assert_success()?;
    assert_eq!(leaf.line(), "Open");

    let subtree = ws
        .command(&["get", "messages.json", "menu.file"])
        .assert_success()?;
    assert_eq!(subtree.json()?, json!({"open": "Open", "save": "Save"}));
    Ok(())
}

#[test]
fn test_get_missing_key_fails() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", MENU_JSON)?;

    for key in ["menu.view", "menu.file.open.deeper", "menu..file", ""] {
        let result = ws.command(&["get", "messages.json", key]).assert_failure()?;
        assert_eq!(result.exit_code, 1);
        assert!(result.contains_stderr("Key not found"), "stderr: {}", result.stderr);
    }
    Ok(())
}

#[test]
fn test_set_prints_updated_document() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", r#"{"title": "App"}"#)?;

    let result = ws
        .command(&["set", "messages.json", "menu.file.open", "Open"])
        .assert_success()?;
    assert_eq!(
        result.json()?,
        json!({"title": "App", "menu": {"file": {"open": "Open"}}})
    );

    // Without --write the file is untouched
    assert_eq!(ws.read("messages.json")?, r#"{"title": "App"}"#);
    Ok(())
}

#[test]
fn test_set_write_parses_json_values() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", r#"{"title": "App"}"#)?;

    ws.command(&["set", "messages.json", "limits.max", "10", "--write"])
        .assert_success()?;
    ws.command(&["set", "messages.json", "title", "-", "--write"])
        .assert_success()?;

    let written: serde_json::Value = serde_json::from_str(&ws.read("messages.json")?)?;
    assert_eq!(written, json!({"title": "-", "limits": {"max": 10}}));
    Ok(())
}

#[test]
fn test_set_replaces_leaf_with_branch() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", r#"{"a": "leaf"}"#)?;

    let result = ws
        .command(&["set", "messages.json", "a.b", "deep"])
        .assert_success()?;
    assert_eq!(result.json()?, json!({"a": {"b": "deep"}}));
    Ok(())
}

#[test]
fn test_set_rejects_malformed_key() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", "{}")?;

    let result = ws
        .command(&["set", "messages.json", "a..b", "x"])
        .assert_failure()?;
    assert!(result.contains_stderr("empty segment"), "stderr: {}", result.stderr);
    Ok(())
}

#[test]
fn test_remove_prunes_empty_branches() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", r#"{"a": {"b": {"c": 1}}, "d": 2}"#)?;

    let result = ws
        .command(&["remove", "messages.json", "a.b.c"])
        .assert_success()?;
    assert_eq!(result.json()?, json!({"d": 2}));
    Ok(())
}

#[test]
fn test_remove_missing_key_is_noop() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", r#"{"d": 2}"#)?;

    ws.command(&["remove", "messages.json", "x.y", "--write"])
        .assert_success()?;
    let written: serde_json::Value = serde_json::from_str(&ws.read("messages.json")?)?;
    assert_eq!(written, json!({"d": 2}));
    Ok(())
}

#[test]
fn test_keys_key_and_count() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.json", MENU_JSON)?;

    let keys = ws.command(&["keys", "messages.json"]).assert_success()?;
    assert_eq!(
        keys.stdout.lines().collect::<Vec<_>>(),
        vec!["menu.edit.copy", "menu.file.open", "menu.file.save", "title"]
    );

    let second = ws.command(&["key", "messages.json", "1"]).assert_success()?;
    assert_eq!(second.line(), "menu.file.open");

    ws.command(&["key", "messages.json", "4"]).assert_failure()?;

    let count = ws.command(&["count", "messages.json"]).assert_success()?;
    assert_eq!(count.line(), "4");
    Ok(())
}

#[test]
fn test_merge_later_overlays_win() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("base.json", MENU_JSON)?;
    ws.write("fr.json", r#"{"menu.file.open": "Ouvrir", "title": "Appli"}"#)?;
    ws.write("fix.json", r#"{"title": {"short": "A"}}"#)?;

    let result = ws
        .command(&["merge", "base.json", "fr.json", "fix.json", "-o", "out.json"])
        .assert_success()?;
    assert!(result.contains_stderr("out.json"));

    let merged: serde_json::Value = serde_json::from_str(&ws.read("out.json")?)?;
    assert_eq!(
        merged,
        json!({
            "menu": {
                "file": {"open": "Ouvrir", "save": "Save"},
                "edit": {"copy": "Copy"}
            },
            "title": {"short": "A"}
        })
    );
    Ok(())
}

#[test]
fn test_merge_rejects_non_object_overlay() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("base.json", "{}")?;
    ws.write("list.json", "[1, 2]")?;

    ws.command(&["merge", "base.json", "list.json"]).assert_failure()?;
    Ok(())
}

#[test]
fn test_toml_documents() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("messages.toml", "title = \"App\"\n\n[menu.file]\nopen = \"Open\"\n")?;

    let result = ws
        .command(&["flatten", "messages.toml"])
        .assert_success()?;
    assert_eq!(result.json()?, json!({"menu.file.open": "Open", "title": "App"}));

    ws.command(&["set", "messages.toml", "menu.file.save", "Save", "--write"])
        .assert_success()?;
    let written: toml::Value = toml::from_str(&ws.read("messages.toml")?)?;
    assert_eq!(written["menu"]["file"]["save"].as_str(), Some("Save"));

    let as_toml = ws
        .command(&["--format", "toml", "get", "messages.toml", "menu"])
        .assert_success()?;
    let parsed: toml::Value = toml::from_str(&as_toml.stdout)?;
    assert_eq!(parsed["file"]["open"].as_str(), Some("Open"));
    Ok(())
}
