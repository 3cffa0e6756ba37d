//! Dotted-path resolution over nested records
//!
//! A field key like `content.basics.description` is split into segments
//! once, then lookup walks the record one segment at a time, giving up
//! as soon as an intermediate value is missing. Resolved values are
//! rendered to plain text before normalization; unresolved paths render
//! to a fixed placeholder instead of being skipped.

use serde_json::Value;

/// Split a dotted path into its segments.
pub(crate) fn split_path(path: &str) -> Vec<String> {
    path.split('.').map(str::to_owned).collect()
}

/// Walk `record` along `segments`.
///
/// Object segments are looked up by key; array segments by numeric
/// index. Returns `None` the moment a segment cannot be resolved, never
/// an error.
pub(crate) fn resolve<'v>(record: &'v Value, segments: &[String]) -> Option<&'v Value> {
    let mut current = record;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Render a resolved value as the text the matcher searches.
///
/// Leaf values render in their natural text form, arrays join their
/// rendered elements with commas, and nested objects collapse to an
/// opaque marker. An unresolved path renders as the literal placeholder
/// `"undefined"`, so a missing field still participates as ordinary
/// (non-matching) text rather than being skipped.
pub(crate) fn render_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_owned(),
        Some(Value::Null) => "null".to_owned(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| render_value(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object]".to_owned(),
    }
}
