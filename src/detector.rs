//! Stack detection from directory listings.
//!
//! Detection is a table lookup through [`crate::registry::DETECTION_MAP`]
//! plus a few suffix-pattern rules (any `*.java` file implies `java`, any
//! TypeScript marker implies `node`). The result is a sorted, deduplicated
//! list of stack identifiers.

use crate::registry::stacks_for_marker;
use std::collections::BTreeSet;

/// Detects technology stacks from the names found at a project's top level.
///
/// The input is whatever [`crate::scanner::Scanner::scan`] produced; the
/// output is sorted so downstream ordering is deterministic.
#[must_use]
pub fn detect(names: &[String]) -> Vec<String> {
    let mut stacks = BTreeSet::new();

    for name in names {
        if let Some(marker_stacks) = stacks_for_marker(name) {
            for stack in marker_stacks {
                stacks.insert((*stack).to_string());
            }
        }
    }

    detect_by_pattern(names, &mut stacks);

    stacks.into_iter().collect()
}

/// Suffix-pattern rules that the exact-name table cannot express.
fn detect_by_pattern(names: &[String], stacks: &mut BTreeSet<String>) {
    // Java sources without a build file still mean a Java project
    if names.iter().any(|n| n.ends_with(".java")) {
        stacks.insert("java".to_string());
    }

    // TypeScript projects are covered by the node template set
    if names
        .iter()
        .any(|n| n == "tsconfig.json" || n.ends_with(".ts"))
    {
        stacks.insert("node".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    /// # Single Marker Detection
    ///
    /// Verifies the scenario from the design: a directory containing only
    /// `go.mod` detects exactly the go stack.
    ///
    /// ## Test Scenario
    /// - Runs detection over a listing with just `go.mod`
    ///
    /// ## Expected Outcome
    /// - The result is exactly `["go"]`
    #[test]
    fn test_detect_go_only() {
        assert_eq!(detect(&names(&["go.mod"])), vec!["go".to_string()]);
    }

    /// # Multi-Stack Markers
    ///
    /// Verifies that one marker can contribute several stacks.
    ///
    /// ## Test Scenario
    /// - Runs detection over `pom.xml` and `manage.py`
    ///
    /// ## Expected Outcome
    /// - java, maven, python, and django are all detected, sorted
    #[test]
    fn test_detect_multi_stack_markers() {
        let detected = detect(&names(&["pom.xml", "manage.py"]));
        assert_eq!(detected, vec!["django", "java", "maven", "python"]);
    }

    /// # Deduplication Across Markers
    ///
    /// Verifies that overlapping markers do not duplicate stacks.
    ///
    /// ## Test Scenario
    /// - Runs detection over several node markers at once
    ///
    /// ## Expected Outcome
    /// - node appears once; yarn comes from the lockfile
    #[test]
    fn test_detect_deduplicates() {
        let detected = detect(&names(&["package.json", "yarn.lock", "node_modules"]));
        assert_eq!(detected, vec!["node", "yarn"]);
    }

    /// # Suffix Pattern Rules
    ///
    /// Verifies the `*.java` and TypeScript suffix rules.
    ///
    /// ## Test Scenario
    /// - Runs detection over a bare `Main.java` and over `index.ts`
    ///
    /// ## Expected Outcome
    /// - `*.java` yields java; `*.ts` yields node
    #[test]
    fn test_detect_by_suffix() {
        assert_eq!(detect(&names(&["Main.java"])), vec!["java".to_string()]);
        assert_eq!(detect(&names(&["index.ts"])), vec!["node".to_string()]);
        assert_eq!(detect(&names(&["tsconfig.json"])), vec!["node".to_string()]);
    }

    /// # Empty Listing
    ///
    /// Verifies that no markers yield an empty stack set.
    ///
    /// ## Test Scenario
    /// - Runs detection over an empty listing and over unknown names
    ///
    /// ## Expected Outcome
    /// - Both produce an empty result
    #[test]
    fn test_detect_empty() {
        assert!(detect(&[]).is_empty());
        assert!(detect(&names(&["README.md", "LICENSE"])).is_empty());
    }
}
