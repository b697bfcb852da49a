use serde_json::Value;

/// Renders a model's populated fields as `Name(...)` with one field per
/// line and four spaces of indentation per nesting level. Null fields are
/// skipped; nested objects recurse. Debug/logging only.
pub fn render(name: &str, raw: &Value) -> String {
    format!("{}{}", name, render_value(raw, 0))
}

fn render_value(value: &Value, level: usize) -> String {
    match value {
        Value::Object(map) => {
            let indent = "    ".repeat(level);
            let lines: Vec<String> = map
                .iter()
                .filter(|(_, field)| !field.is_null())
                .map(|(key, field)| {
                    format!("{}    {}={}", indent, key, render_value(field, level + 1))
                })
                .collect();
            format!("(\n{}\n{})", lines.join(",\n"), indent)
        }
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| render_value(item, level))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}
