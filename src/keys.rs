use serde_json::Value;
use std::collections::BTreeSet;

// Collect every key reachable from the root as a dot path. Object elements of
// arrays are entered with the path extended by [index]; other values are leaves.
// A non-object root contributes no keys.
pub fn collect_keys(value: &Value) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_into(value, None, &mut keys);
    keys
}

fn collect_into(value: &Value, prefix: Option<&str>, keys: &mut BTreeSet<String>) {
    if let Value::Object(obj) = value {
        for (k, val) in obj.iter() {
            let full = match prefix {
                Some(p) if !p.is_empty() => format!("{}.{}", p, k),
                _ => k.clone(),
            };
            keys.insert(full.clone());
            match val {
                Value::Object(_) => collect_into(val, Some(&full), keys),
                Value::Array(arr) => {
                    for (i, item) in arr.iter().enumerate() {
                        if item.is_object() {
                            collect_into(item, Some(&format!("{}[{}]", full, i)), keys);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_nested_and_array_keys() {
        let value = json!({
            "a": {"b": {"c": 1}},
            "d": [{"e": 1}, {"f": 2}, "plain"],
            "g": "x"
        });
        let keys = collect_keys(&value);
        let expected: BTreeSet<String> = ["a", "a.b", "a.b.c", "d", "d[0].e", "d[1].f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn non_object_root_has_no_keys() {
        assert!(collect_keys(&json!([1, 2, 3])).is_empty());
        assert!(collect_keys(&json!("hello")).is_empty());
        assert!(collect_keys(&json!(null)).is_empty());
    }

    #[test]
    fn scalar_array_elements_do_not_extend_paths() {
        let value = json!({"list": [1, "two", true]});
        let keys = collect_keys(&value);
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("list"));
    }
}
