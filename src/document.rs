use crate::keys::collect_keys;
use crate::scan::scan_raw;
use anyhow::{Context, Result};
use indexmap::IndexSet;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// One parsed language file. Immutable after loading.
#[derive(Debug)]
pub struct LocaleDocument {
    pub name: String,
    /// Dot paths from the parsed structure (duplicates already collapsed,
    /// last value wins).
    pub keys: BTreeSet<String>,
    /// Duplicate dot paths found by the raw-text scan.
    pub duplicates: Vec<String>,
    /// First-seen text order of keys, for report sorting.
    pub order: IndexSet<String>,
}

pub fn load_document(path: &Path) -> Result<LocaleDocument> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let raw = fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
    let value: Value =
        serde_json::from_str(&raw).with_context(|| format!("Parsing JSON {:?}", path))?;

    let keys = collect_keys(&value);
    let scan = scan_raw(&raw, &keys);
    Ok(LocaleDocument {
        name,
        keys,
        duplicates: scan.duplicates,
        order: scan.order,
    })
}
