use crate::audit::AuditReport;
use std::fmt::Write as _;

// Extra and missing lists are cut off after this many entries; duplicates are
// always shown in full.
const TRUNCATE_LIMIT: usize = 10;

fn key_word(n: usize) -> &'static str {
    if n == 1 { "key" } else { "keys" }
}

pub fn render(report: &AuditReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Checked {} language files", report.total_documents);
    let _ = writeln!(
        out,
        "Threshold: keys need to exist in at least {} files to be considered expected",
        report.threshold
    );
    let _ = writeln!(out, "Expected keys: {}", report.expected_count);
    let _ = writeln!(out, "Unexpected keys: {}", report.unexpected_count);
    out.push('\n');

    if report.issues.is_empty() {
        let _ = writeln!(out, "All language files have complete keys!");
        return out;
    }

    let _ = writeln!(out, "Issues found:");
    let _ = writeln!(out, "  Missing keys: exist in most files but not in current file");
    let _ = writeln!(out, "  Extra keys: don't exist in most files but exist in current file");
    let _ = writeln!(out, "  Duplicate keys: keys that appear multiple times in the same file");
    out.push('\n');

    for (name, issues) in &report.issues {
        let _ = writeln!(out, "  {}:", name);

        if !issues.extra.is_empty() {
            let _ = writeln!(out, "    {} Extra {}:", issues.extra.len(), key_word(issues.extra.len()));
            for (key, count) in issues.extra.iter().take(TRUNCATE_LIMIT) {
                let _ = writeln!(
                    out,
                    "      - {} (exists in only {}/{} files)",
                    key, count, report.total_documents
                );
            }
            if issues.extra.len() > TRUNCATE_LIMIT {
                let _ = writeln!(
                    out,
                    "      ... {} more keys not shown",
                    issues.extra.len() - TRUNCATE_LIMIT
                );
            }
        }

        if !issues.missing.is_empty() {
            let _ = writeln!(out, "    {} Missing {}:", issues.missing.len(), key_word(issues.missing.len()));
            for (key, count) in issues.missing.iter().take(TRUNCATE_LIMIT) {
                let _ = writeln!(
                    out,
                    "      - {} (exists in {}/{} files)",
                    key, count, report.total_documents
                );
            }
            if issues.missing.len() > TRUNCATE_LIMIT {
                let _ = writeln!(
                    out,
                    "      ... {} more keys not shown",
                    issues.missing.len() - TRUNCATE_LIMIT
                );
            }
        }

        if !issues.duplicates.is_empty() {
            let _ = writeln!(
                out,
                "    {} Duplicate {}:",
                issues.duplicates.len(),
                key_word(issues.duplicates.len())
            );
            for key in &issues.duplicates {
                let _ = writeln!(out, "      - {}", key);
            }
        }

        out.push('\n');
    }

    out
}
