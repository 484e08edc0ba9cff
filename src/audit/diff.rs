//! Field-level diffs for audit entries

use serde_json::Value;

/// Describe top-level changes between two JSON values
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let changes = match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes: Vec<String> = before_obj
                .iter()
                .filter_map(|(key, old)| match after_obj.get(key) {
                    Some(new) if new != old => {
                        Some(format!("{}: {} -> {}", key, format_value(old), format_value(new)))
                    }
                    Some(_) => None,
                    None => Some(format!("{}: {} -> (removed)", key, format_value(old))),
                })
                .collect();

            changes.extend(
                after_obj
                    .iter()
                    .filter(|(key, _)| !before_obj.contains_key(*key))
                    .map(|(key, new)| format!("{}: (added) -> {}", key, format_value(new))),
            );
            changes
        }
        _ if before != after => vec![format!("{} -> {}", format_value(before), format_value(after))],
        _ => Vec::new(),
    };

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        Value::String(s) => format!("\"{}\"", s),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_changes() {
        let value = json!({"description": "Coffee"});
        assert_eq!(generate_diff(&value, &value), None);
    }

    #[test]
    fn test_changed_fields() {
        let before = json!({"description": "Coffee", "category": "Food & Dining"});
        let after = json!({"description": "Latte", "category": "Food & Dining"});
        assert_eq!(
            generate_diff(&before, &after).unwrap(),
            "description: \"Coffee\" -> \"Latte\""
        );
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"a": 1});
        let after = json!({"b": [1, 2]});
        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("a: 1 -> (removed)"));
        assert!(diff.contains("b: (added) -> [2 items]"));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(generate_diff(&json!(100), &json!(250)).unwrap(), "100 -> 250");
    }

    #[test]
    fn test_long_strings_truncated() {
        let long = "x".repeat(80);
        let diff = generate_diff(&json!({"d": "short"}), &json!({"d": long})).unwrap();
        assert!(diff.ends_with("...\""));
    }
}
