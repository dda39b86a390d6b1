//! Look up and render a catalog message
//!
//! Catalog strings may reference arguments as `{name}`; such strings are
//! compiled into render functions that substitute values from `--args`.

use super::Context;
use crate::document;
use ahash::AHashMap;
use anyhow::{Context as _, Result};
use m17n_runtime::{Catalog, CatalogEntry, Message, MessageKey};
use serde_json::Value;
use std::path::Path;

pub async fn run(ctx: &Context, catalog: &Path, key: &str, args: Option<&str>) -> Result<()> {
    let catalog = compile(document::load_value(catalog).await?);
    let args: Value = match args {
        Some(raw) => serde_json::from_str(raw).context("--args must be valid JSON")?,
        None => Value::Null,
    };

    let runtime = ctx.runtime().with_catalog(catalog);
    let text = runtime.translate(MessageKey::Path(key), &args);
    println!("{}", text);
    Ok(())
}

/// Objects become nested catalogs, arrays become indexed catalogs
pub fn compile(value: Value) -> Catalog {
    match value {
        Value::Object(map) => Catalog::Nested(compile_group(map)),
        Value::Array(items) => Catalog::Indexed(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => compile_message(text),
                    other => Message::Text(other.to_string()),
                })
                .collect(),
        ),
        _ => Catalog::default(),
    }
}

fn compile_group(map: serde_json::Map<String, Value>) -> AHashMap<String, CatalogEntry> {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(text) => Some((key, CatalogEntry::Message(compile_message(text)))),
            Value::Object(children) => Some((key, CatalogEntry::Group(compile_group(children)))),
            _ => None,
        })
        .collect()
}

fn compile_message(text: String) -> Message {
    if !text.contains('{') {
        return Message::Text(text);
    }
    Message::render(move |args, _| interpolate(&text, args))
}

/// Replace `{name}` with `args[name]`; unknown names are kept verbatim
pub fn interpolate(template: &str, args: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = after[..close].trim();
        match args.get(name) {
            Some(Value::String(text)) => out.push_str(text),
            Some(Value::Null) | None => out.push_str(&rest[open..open + close + 2]),
            Some(other) => out.push_str(&other.to_string()),
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    out
}
