//! Raw-text pass over a language file: first-seen key order for report
//! sorting, and duplicate-key detection that survives last-value-wins parsing.
//!
//! Nesting is tracked by counting braces before each quoted key token, so the
//! scan misreads files whose string values contain literal `{` or `}`, and
//! sibling objects inside an array share one rebuilt parent path. Known
//! limitation, kept in favour of a full tokenizer.

use indexmap::IndexSet;
use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(Debug, Default)]
pub struct RawScan {
    /// Keys from `known_keys` in order of first appearance in the text.
    pub order: IndexSet<String>,
    /// Dot paths whose key name occurs more than once under the same parent.
    pub duplicates: Vec<String>,
}

pub fn scan_raw(content: &str, known_keys: &BTreeSet<String>) -> RawScan {
    let key_token = Regex::new(r#"["']([^"']+)["']\s*:"#).unwrap();

    let mut order: IndexSet<String> = IndexSet::new();
    let mut duplicates: BTreeSet<String> = BTreeSet::new();
    let mut seen: HashMap<String, HashSet<String>> = HashMap::new();
    let mut stack: Vec<String> = Vec::new();
    let mut depth: i64 = 0;
    let mut scanned_to = 0usize;

    for caps in key_token.captures_iter(content) {
        let Some(m) = caps.get(1) else { continue };
        let key = m.as_str();

        for b in content[scanned_to..m.start()].bytes() {
            match b {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => {}
            }
        }
        scanned_to = m.start();

        if depth == 1 {
            stack.clear();
            stack.push(key.to_string());
        } else if depth > 1 {
            // Rebuild the dot path from the brace level; levels skipped by
            // non-object nesting (arrays) collapse onto the nearest parent.
            stack.truncate(depth as usize - 1);
            stack.push(key.to_string());
        } else {
            continue;
        }

        let full_key = stack.join(".");
        let parent = stack[..stack.len() - 1].join(".");
        if !seen.entry(parent).or_default().insert(key.to_string()) {
            duplicates.insert(full_key.clone());
        }
        if known_keys.contains(&full_key) {
            order.insert(full_key);
        }
    }

    RawScan {
        order,
        duplicates: duplicates.into_iter().collect(),
    }
}
