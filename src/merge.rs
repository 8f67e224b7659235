//! The template merge engine.
//!
//! Combines multiple template bodies into one deduplicated document. Bodies
//! are processed strictly in input order; two sets scoped to one merge call
//! track every comment line and every pattern line already emitted, keyed on
//! lowercased trimmed text, so the earliest occurrence of a line wins and
//! later duplicates are dropped silently.
//!
//! Invariants of the output:
//! - no two pattern lines are equal after case-insensitive trimming
//! - no two comment lines are equal after case-insensitive trimming
//! - no section contains two consecutive blank lines
//! - sections are joined by exactly one blank line
//!
//! Re-merging the same bodies in the same order is byte-for-byte
//! deterministic. Merging is not commutative: reordering the input changes
//! which duplicate survives, though the surviving set of lines is the same.

use crate::models::TemplateBody;
use std::collections::HashSet;

/// Merges template bodies into a single deduplicated ignore-file document.
///
/// Each body becomes one section of the output, prefixed by its label as a
/// header comment. A body whose every line is filtered out (all duplicates)
/// contributes no section at all. An empty input produces an empty string.
#[must_use]
pub fn merge_templates(bodies: &[TemplateBody]) -> String {
    let mut seen_patterns: HashSet<String> = HashSet::new();
    let mut seen_comments: HashSet<String> = HashSet::new();
    let mut sections: Vec<String> = Vec::new();

    for body in bodies {
        let section = filter_body(&body.as_section(), &mut seen_patterns, &mut seen_comments);
        if !section.is_empty() {
            sections.push(section);
        }
    }

    sections.join("\n\n")
}

/// Filters one body's lines against the merge-wide dedup state.
///
/// Returns the section text with consecutive blank lines collapsed and
/// leading/trailing blank lines removed, or an empty string if nothing
/// survived filtering.
fn filter_body(
    text: &str,
    seen_patterns: &mut HashSet<String>,
    seen_comments: &mut HashSet<String>,
) -> String {
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            // Collapse blank runs; never start a section with a blank
            if matches!(lines.last(), Some(last) if !last.trim().is_empty()) {
                lines.push("");
            }
            continue;
        }

        let normalized = trimmed.to_lowercase();
        if trimmed.starts_with('#') {
            if seen_comments.insert(normalized) {
                lines.push(line);
            }
        } else if seen_patterns.insert(normalized) {
            lines.push(line);
        }
    }

    // A trailing blank would bleed into the section separator
    while matches!(lines.last(), Some(last) if last.trim().is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
