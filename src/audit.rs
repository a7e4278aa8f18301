use crate::document::{LocaleDocument, load_document};
use crate::errors::LangCheckError;
use anyhow::{Context, Result};
use indexmap::IndexSet;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Presence counts and the expected/unexpected partition across all
/// successfully loaded documents.
#[derive(Debug)]
pub struct KeyStatistics {
    pub key_count: HashMap<String, usize>,
    pub total_documents: usize,
    /// A key is expected when it appears in at least this many documents,
    /// i.e. ceil(total / 2).
    pub threshold: usize,
    pub expected: BTreeSet<String>,
    pub unexpected: BTreeSet<String>,
}

impl KeyStatistics {
    pub fn compute(docs: &[LocaleDocument]) -> Self {
        let mut key_count: HashMap<String, usize> = HashMap::new();
        for doc in docs {
            for key in &doc.keys {
                *key_count.entry(key.clone()).or_insert(0) += 1;
            }
        }
        let total_documents = docs.len();
        let threshold = (total_documents + 1) / 2;
        let expected: BTreeSet<String> = key_count
            .iter()
            .filter(|(_, count)| **count >= threshold)
            .map(|(key, _)| key.clone())
            .collect();
        let unexpected: BTreeSet<String> = key_count
            .keys()
            .filter(|key| !expected.contains(*key))
            .cloned()
            .collect();
        Self {
            key_count,
            total_documents,
            threshold,
            expected,
            unexpected,
        }
    }
}

/// Deviations for one document, pre-sorted for display. `missing` and `extra`
/// carry the key's presence count across all documents.
#[derive(Debug)]
pub struct DocumentIssues {
    pub missing: Vec<(String, usize)>,
    pub extra: Vec<(String, usize)>,
    pub duplicates: Vec<String>,
}

#[derive(Debug)]
pub struct AuditReport {
    pub total_documents: usize,
    pub threshold: usize,
    pub expected_count: usize,
    pub unexpected_count: usize,
    /// Documents with at least one deviation, keyed by file name.
    pub issues: BTreeMap<String, DocumentIssues>,
}

impl AuditReport {
    /// Extra keys alone do not fail the audit; a locale may legitimately
    /// carry keys the others lack.
    pub fn all_complete(&self) -> bool {
        self.issues
            .values()
            .all(|i| i.missing.is_empty() && i.duplicates.is_empty())
    }
}

fn display_rank(order: &IndexSet<String>, key: &str) -> usize {
    order.get_index_of(key).unwrap_or(usize::MAX)
}

pub fn audit(dir: &Path) -> Result<AuditReport> {
    if !dir.is_dir() {
        return Err(LangCheckError::DirectoryNotFound(dir.to_path_buf()).into());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Listing {:?}", dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    files.sort();

    let mut docs: Vec<LocaleDocument> = Vec::new();
    for file in &files {
        match load_document(file) {
            Ok(doc) => docs.push(doc),
            Err(err) => error!(file = %file.display(), %err, "Skipping language file"),
        }
    }
    if docs.is_empty() {
        return Err(LangCheckError::NoValidDocuments(dir.to_path_buf()).into());
    }
    info!(count = docs.len(), dir = %dir.display(), "Loaded language files");

    let stats = KeyStatistics::compute(&docs);

    // The document with the most keys orders the missing-key reports, since a
    // missing key has no position in the file that lacks it. First wins on
    // ties, matching the sorted load order.
    let mut reference = &docs[0];
    for doc in &docs[1..] {
        if doc.keys.len() > reference.keys.len() {
            reference = doc;
        }
    }
    let reference_order = reference.order.clone();

    let mut issues: BTreeMap<String, DocumentIssues> = BTreeMap::new();
    for doc in &docs {
        let missing: Vec<&String> = stats.expected.difference(&doc.keys).collect();
        let extra: Vec<&String> = doc.keys.intersection(&stats.unexpected).collect();
        if missing.is_empty() && extra.is_empty() && doc.duplicates.is_empty() {
            continue;
        }

        let count_of = |key: &str| stats.key_count.get(key).copied().unwrap_or(0);

        let mut missing: Vec<(String, usize)> = missing
            .into_iter()
            .map(|key| (key.clone(), count_of(key)))
            .collect();
        missing.sort_by_key(|(key, _)| (display_rank(&reference_order, key), key.clone()));

        let mut extra: Vec<(String, usize)> = extra
            .into_iter()
            .map(|key| (key.clone(), count_of(key)))
            .collect();
        extra.sort_by_key(|(key, _)| (display_rank(&doc.order, key), key.clone()));

        let mut duplicates = doc.duplicates.clone();
        duplicates.sort_by_key(|key| (display_rank(&doc.order, key), key.clone()));

        issues.insert(
            doc.name.clone(),
            DocumentIssues {
                missing,
                extra,
                duplicates,
            },
        );
    }

    Ok(AuditReport {
        total_documents: stats.total_documents,
        threshold: stats.threshold,
        expected_count: stats.expected.len(),
        unexpected_count: stats.unexpected.len(),
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::load_document;

    fn doc(name: &str, json: &str) -> LocaleDocument {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        fs::write(&path, json).unwrap();
        load_document(&path).unwrap()
    }

    #[test]
    fn threshold_rounds_up() {
        let docs = vec![
            doc("a.json", "{}"),
            doc("b.json", "{}"),
            doc("c.json", "{}"),
            doc("d.json", "{}"),
            doc("e.json", "{}"),
        ];
        assert_eq!(KeyStatistics::compute(&docs).threshold, 3);
        assert_eq!(KeyStatistics::compute(&docs[..4]).threshold, 2);
        assert_eq!(KeyStatistics::compute(&docs[..1]).threshold, 1);
    }

    #[test]
    fn expected_and_unexpected_partition_the_universe() {
        let docs = vec![
            doc("a.json", r#"{"x": 1, "solo": 1}"#),
            doc("b.json", r#"{"x": 1, "y": 1}"#),
            doc("c.json", r#"{"x": 1, "y": 1}"#),
        ];
        let stats = KeyStatistics::compute(&docs);
        assert_eq!(stats.threshold, 2);
        assert!(stats.expected.contains("x"));
        assert!(stats.expected.contains("y"));
        assert!(stats.unexpected.contains("solo"));
        assert!(stats.expected.is_disjoint(&stats.unexpected));
        let universe: BTreeSet<String> = stats.key_count.keys().cloned().collect();
        let union: BTreeSet<String> = stats.expected.union(&stats.unexpected).cloned().collect();
        assert_eq!(universe, union);
    }

    #[test]
    fn count_at_threshold_is_expected() {
        // 4 documents, threshold (4 + 1) / 2 = 2: count 2 passes, count 1 does not.
        let docs = vec![
            doc("a.json", r#"{"base": 1, "pair": 1, "solo": 1}"#),
            doc("b.json", r#"{"base": 1, "pair": 1}"#),
            doc("c.json", r#"{"base": 1}"#),
            doc("d.json", r#"{"base": 1}"#),
        ];
        let stats = KeyStatistics::compute(&docs);
        assert_eq!(stats.threshold, 2);
        assert!(stats.expected.contains("pair"));
        assert!(stats.unexpected.contains("solo"));
    }
}
