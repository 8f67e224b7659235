//! Reconciliation of generated content with a pre-existing ignore file.
//!
//! Two modes:
//!
//! - **Create mode** (no existing file, or `--force`): a header block
//!   recording the detected stacks, followed by the generated document.
//! - **Merge mode**: every line of the existing file is preserved verbatim
//!   and in place; pattern lines from the generated document that are not
//!   already present (case-insensitive, trimmed comparison) are appended
//!   under a marked section. Running merge mode twice on its own output is
//!   a no-op.
//!
//! Write failures are fatal and surfaced to the caller with the underlying
//! cause; nothing here is silently swallowed.

use crate::error::WriteError;
use std::collections::HashSet;
use std::path::Path;

/// Comment line marking the section of patterns appended during a merge.
const APPENDED_SECTION_MARKER: &str = "# Added by stackignore";

/// Builds the header block used in create mode.
///
/// Records the detected stack list and a note that regeneration merges
/// rather than overwrites.
#[must_use]
pub fn generate_header(stacks: &[String]) -> String {
    let detected = if stacks.is_empty() {
        "none (default template)".to_string()
    } else {
        stacks.join(", ")
    };

    format!(
        "# .gitignore generated by stackignore\n\
         # Detected stacks: {detected}\n\
         # User rules are preserved on regeneration.\n\n"
    )
}

/// Merges generated content into an existing ignore file's text.
///
/// Existing lines are kept byte-for-byte in their original order. Pattern
/// lines from `generated` that the existing file does not already contain
/// are appended under a marker comment; comments and blank lines from the
/// generated document are never appended. When nothing is missing, the
/// existing text is returned unchanged, which makes this operation
/// idempotent.
#[must_use]
pub fn merge_existing(existing: &str, generated: &str, stacks: &[String]) -> String {
    let present: HashSet<String> = existing
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();

    let mut appended: HashSet<String> = HashSet::new();
    let mut missing: Vec<&str> = Vec::new();

    for line in generated.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let normalized = trimmed.to_lowercase();
        if !present.contains(&normalized) && appended.insert(normalized) {
            missing.push(trimmed);
        }
    }

    if missing.is_empty() {
        return existing.to_string();
    }

    let detected = if stacks.is_empty() {
        String::new()
    } else {
        format!(" (stacks: {})", stacks.join(", "))
    };

    let mut result = existing.trim_end_matches('\n').to_string();
    result.push_str("\n\n");
    result.push_str(APPENDED_SECTION_MARKER);
    result.push_str(&detected);
    result.push('\n');
    for line in missing {
        result.push_str(line);
        result.push('\n');
    }
    result
}

/// Writes the final text to the ignore file path.
///
/// Any I/O failure (permission denied, missing parent directory) is fatal
/// for the invocation.
pub fn write(path: &Path, text: &str) -> Result<(), WriteError> {
    std::fs::write(path, text).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}
