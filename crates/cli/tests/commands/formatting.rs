//! Runtime commands: translate, plural, number, date, config

use crate::common::TestWorkspace;
use crate::m17n;
use anyhow::Result;

const CATALOG: &str = r#"{
  "greeting": { "hello": "Hello {name}!" },
  "farewell": "Goodbye"
}"#;

#[test]
fn test_translate_nested_catalog() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("catalog.json", CATALOG)?;

    let plain = ws
        .command(&["translate", "catalog.json", "farewell"])
        .assert_success()?;
    assert_eq!(plain.line(), "Goodbye");

    let with_args = ws
        .command(&["translate", "catalog.json", "greeting.hello", "--args", r#"{"name": "Ada"}"#])
        .assert_success()?;
    assert_eq!(with_args.line(), "Hello Ada!");
    Ok(())
}

#[test]
fn test_translate_unresolved_key_prints_empty() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("catalog.json", CATALOG)?;

    for key in ["greeting", "missing", "farewell.extra"] {
        let result = ws
            .command(&["translate", "catalog.json", key])
            .assert_success()?;
        assert_eq!(result.line(), "", "key {}", key);
    }
    Ok(())
}

#[test]
fn test_translate_indexed_catalog() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("catalog.json", r#"["zero", "one"]"#)?;

    let result = ws
        .command(&["translate", "catalog.json", "1"])
        .assert_success()?;
    assert_eq!(result.line(), "one");
    Ok(())
}

#[test]
fn test_plural_cases() -> Result<()> {
    let ws = TestWorkspace::new()?;
    let cases = r#"{"0": "no items", "one": "one item", "other": "many items"}"#;

    let cases_for = |count: &str| -> Result<String> {
        Ok(ws
            .command(&["plural", count, cases])
            .assert_success()?
            .line()
            .to_string())
    };
    assert_eq!(cases_for("0")?, "no items");
    assert_eq!(cases_for("1")?, "one item");
    assert_eq!(cases_for("5")?, "many items");
    assert_eq!(cases_for("1.5")?, "many items");
    Ok(())
}

#[test]
fn test_plural_offset_and_ordinal() -> Result<()> {
    let ws = TestWorkspace::new()?;

    let offset = ws
        .command(&[
            "plural",
            "2",
            r#"{"one": "you and one other", "other": "you and others"}"#,
            "--offset",
            "1",
        ])
        .assert_success()?;
    assert_eq!(offset.line(), "you and one other");

    let ordinals = r#"{"one": "st", "two": "nd", "few": "rd", "other": "th"}"#;
    for (count, suffix) in [("1", "st"), ("2", "nd"), ("3", "rd"), ("4", "th"), ("11", "th"), ("22", "nd")] {
        let result = ws
            .command(&["plural", count, ordinals, "--ordinal"])
            .assert_success()?;
        assert_eq!(result.line(), suffix, "count {}", count);
    }
    Ok(())
}

#[test]
fn test_plural_rejects_bad_cases() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.command(&["plural", "1", "not json"]).assert_failure()?;
    Ok(())
}

#[test]
fn test_number_styles() -> Result<()> {
    let ws = TestWorkspace::new()?;

    let number = |args: &[&str]| -> Result<String> {
        let mut full = vec!["number"];
        full.extend_from_slice(args);
        Ok(ws.command(&full).assert_success()?.line().to_string())
    };
    assert_eq!(number(&["1234.5"])?, "1,234.5");
    assert_eq!(number(&["0.25", "--style", "percent"])?, "25%");
    assert_eq!(number(&["10.01", "--style", "currency"])?, "$10.01");
    assert_eq!(number(&["10.01", "--style", "-1"])?, "$10.01");
    assert_eq!(number(&["1.5", "--style", "EUR"])?, "€1.50");
    assert_eq!(number(&["-5", "--style", "USD"])?, "-$5.00");
    assert_eq!(number(&["7", "--style", "3"])?, "007");
    Ok(())
}

#[test]
fn test_number_invalid_style_fails() -> Result<()> {
    let ws = TestWorkspace::new()?;

    let result = ws
        .command(&["number", "1", "--style", "EURO"])
        .assert_failure()?;
    assert!(result.contains_stderr("invalid currency code"));

    let result = ws.command(&["number", "1", "--style", "0"]).assert_failure()?;
    assert!(result.contains_stderr("unknown number format id"));
    Ok(())
}

#[test]
fn test_number_uses_configured_locale() -> Result<()> {
    let ws = TestWorkspace::with_locale("de-DE", "EUR")?;

    let result = ws
        .command(&["number", "1234.5", "--style", "currency"])
        .assert_success()?;
    assert_eq!(result.line(), "1.234,50\u{a0}€");
    Ok(())
}

#[test]
fn test_date_styles() -> Result<()> {
    let ws = TestWorkspace::new()?;
    let ts = "2017-01-02T03:04:05Z";

    let date = |style: &str| -> Result<String> {
        Ok(ws
            .command(&["date", ts, "--style", style])
            .assert_success()?
            .line()
            .to_string())
    };
    assert_eq!(date("0")?, "1/2/2017");
    assert_eq!(date("3")?, "Monday, January 2, 2017");
    assert_eq!(date("4")?, "3:04 AM");
    assert_eq!(date("6")?, "3:04:05 AM UTC");

    let default_style = ws.command(&["date", ts]).assert_success()?;
    assert_eq!(default_style.line(), "1/2/2017");
    Ok(())
}

#[test]
fn test_date_errors() -> Result<()> {
    let ws = TestWorkspace::new()?;

    let result = ws
        .command(&["date", "2017-01-02T03:04:05Z", "--style", "8"])
        .assert_failure()?;
    assert!(result.contains_stderr("unknown date style"));

    ws.command(&["date", "yesterday"]).assert_failure()?;
    Ok(())
}

#[test]
fn test_date_uses_configured_locale() -> Result<()> {
    let ws = TestWorkspace::with_locale("en-GB", "GBP")?;

    let result = ws
        .command(&["date", "2017-01-02T03:04:05Z", "--style", "0"])
        .assert_success()?;
    assert_eq!(result.line(), "02/01/2017");
    Ok(())
}

#[test]
fn test_config_shows_source() -> Result<()> {
    let ws = TestWorkspace::with_locale("fr-FR", "EUR")?;
    let config_path = ws.config_path();

    let result = m17n!(ws.path(), "--config", config_path.to_str().unwrap(), "config")
        .assert_success()?;
    assert!(result.contains_stdout("\"fr-FR\""));
    assert!(result.contains_stdout("\"EUR\""));
    assert!(result.contains_stdout("config.toml"));
    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let ws = TestWorkspace::new()?;
    ws.write("config.toml", "[locale]\ncurrency = \"dollars\"\n")?;

    let result = ws.command(&["config"]).assert_failure()?;
    assert!(result.contains_stderr("three-letter"));
    Ok(())
}

#[test]
fn test_missing_explicit_config_fails() -> Result<()> {
    let ws = TestWorkspace::new()?;
    let missing = ws.path().join("missing.toml");

    m17n!(ws.path(), "--config", missing.to_str().unwrap(), "count", "x.json")
        .assert_failure()?;
    Ok(())
}
