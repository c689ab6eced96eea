//! Normalize a raw recognizer result into newline-joined text.
//!
//! PaddleOCR has returned its results in different shapes across releases.
//! Two are understood here:
//!
//! - a list of mappings, each carrying the recognized strings under
//!   `rec_texts` (the 3.x output);
//! - a list of pages, each a list of `[box, [text, score]]` lines (the 2.x
//!   `ocr` output).
//!
//! Anything else is skipped without error, record by record, so a partly
//! unfamiliar result still yields the text that could be found.
use serde_json::Value;

/// Collect every recognized text fragment in `result`, in engine order,
/// joined by `\n` and trimmed.
pub fn flatten_text(result: &Value) -> String {
    let mut texts: Vec<String> = Vec::new();

    for record in records(result) {
        if !is_truthy(record) {
            continue;
        }
        match record {
            Value::Object(map) => {
                if let Some(Value::Array(rec_texts)) = map.get("rec_texts") {
                    texts.extend(rec_texts.iter().filter(|t| is_truthy(t)).map(stringify));
                }
            }
            Value::Array(lines) => texts.extend(lines.iter().filter_map(line_text)),
            _ => {}
        }
    }

    texts.join("\n").trim().to_string()
}

// Only a list holds records; a bare mapping yields nothing.
fn records(result: &Value) -> &[Value] {
    match result {
        Value::Array(records) => records,
        _ => &[],
    }
}

/// `[box, [text, score, ..], ..]` -> `text`
fn line_text(line: &Value) -> Option<String> {
    let [_, recognized, ..] = line.as_array()?.as_slice() else {
        return None;
    };
    let text = recognized.as_array()?.first()?;
    is_truthy(text).then(|| stringify(text))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings verbatim, anything else in its JSON form (`true`, `["a"]`), which
/// differs from Python's `str` (`True`, `['a']`).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
