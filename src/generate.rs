//! Three-tier template generation with whole-batch fallback.
//!
//! Tier 1 fetches per-identifier templates from the github/gitignore
//! repository; identifiers it cannot serve are covered by local template
//! files without aborting the batch. Only when the repository itself is
//! unreachable (every attempted fetch fails, none succeed) does tier 2
//! issue one batched gitignore.io call over the whitelist-filtered
//! identifiers. If that also fails, tier 3 falls back to a local template
//! (first identifier with a file, else `default.gitignore`, else a built-in
//! literal). Every tier transition is a warning, never a hard failure: the
//! operation always terminates with non-empty content.
//!
//! Which tier produced the content is reported on the output so fallback
//! behavior stays observable in logs and tests.

use crate::error::FetchError;
use crate::fetch::TemplateProvider;
use crate::merge::merge_templates;
use crate::models::{GeneratedContent, SourceTier, TemplateBody, normalize_stack};
use crate::registry::{github_template_name, is_valid_api_stack};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Header label of the always-included essential block.
const ESSENTIAL_LABEL: &str = "Essential (OS, IDEs, env, logs)";

/// Rules included regardless of detected stacks, used when no
/// `essential.gitignore` exists in the templates directory.
const BUILTIN_ESSENTIAL: &str = "\
# OS
.DS_Store
Thumbs.db

# IDEs
.idea/
.vscode/

# Environment
.env
.env.local
.env.*.local

# Logs
*.log

# Temporary
*.tmp
.cache/";

/// Last-resort template used when no local template files exist at all.
const BUILTIN_DEFAULT: &str = "\
# OS
.DS_Store
Thumbs.db

# IDEs
.idea/
.vscode/
*.swp
*.swo
*~

# Logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*

# Dependencies
node_modules/
vendor/

# Environment
.env
.env.local
.env.*.local

# Build
dist/
build/
*.class
*.jar
*.war";

/// Outcome of one tier-1 lookup: a fetched remote body, an identifier the
/// registry does not carry (deferred to local templates), or a fetch
/// attempt that failed outright (counts toward tier unreachability).
enum Tier1Outcome {
    Fetched(TemplateBody),
    Deferred(String),
    Failed(String),
}

/// Generates merged ignore-file content for a set of detected stacks.
pub struct Generator<P: TemplateProvider> {
    provider: P,
    templates_dir: PathBuf,
}

impl<P: TemplateProvider> Generator<P> {
    /// Creates a generator over a template provider and a local templates
    /// directory.
    pub fn new(provider: P, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            templates_dir: templates_dir.into(),
        }
    }

    /// Generates ignore-file content for the given stacks.
    ///
    /// The essential block is always the first body. Stacks are processed
    /// in input order; remote fetch results are re-joined in that order
    /// before merging so the output is deterministic.
    pub async fn generate(&self, stacks: &[String]) -> GeneratedContent {
        let essential = self.essential_body();

        if stacks.is_empty() {
            debug!("no stacks detected, using default template");
            let fallback = self.fallback_body(&[]);
            return GeneratedContent {
                text: merge_templates(&[essential, fallback]),
                tier: SourceTier::LocalFallback,
            };
        }

        let normalized: Vec<String> = stacks.iter().map(|s| normalize_stack(s)).collect();

        // Tier 1: per-identifier GitHub templates
        match self.fetch_github_bodies(&normalized).await {
            Some(mut bodies) => {
                let mut all = vec![essential];
                all.append(&mut bodies);
                GeneratedContent {
                    text: merge_templates(&all),
                    tier: SourceTier::GithubTemplates,
                }
            }
            None => {
                warn!("GitHub templates unavailable, falling back to gitignore.io");
                self.generate_from_api(essential, &normalized).await
            }
        }
    }

    /// Tier-1 batch: fetch each mapped identifier concurrently, re-joining
    /// results in input order. Not-found identifiers (unmapped, or a 404
    /// from the registry) defer to local templates without escalating.
    /// Returns None only when the registry is unreachable for the whole
    /// batch: at least one fetch was attempted, every attempt failed, and
    /// none succeeded. That escalates to tier 2.
    async fn fetch_github_bodies(&self, stacks: &[String]) -> Option<Vec<TemplateBody>> {
        let lookups = stacks.iter().map(|stack| async move {
            let Some(name) = github_template_name(stack) else {
                debug!(%stack, "no GitHub template mapping, deferring to local");
                return Tier1Outcome::Deferred(stack.clone());
            };
            match self.provider.fetch_github_template(name).await {
                Ok(text) => {
                    debug!(%stack, template = name, "fetched GitHub template");
                    Tier1Outcome::Fetched(TemplateBody::new(name, text))
                }
                Err(FetchError::NotFound { .. }) => {
                    debug!(%stack, template = name, "no GitHub template, deferring to local");
                    Tier1Outcome::Deferred(stack.clone())
                }
                Err(err) => {
                    warn!(%stack, template = name, %err, "GitHub template fetch failed");
                    Tier1Outcome::Failed(stack.clone())
                }
            }
        });
        let outcomes = futures::future::join_all(lookups).await;

        let mut bodies = Vec::new();
        let mut deferred = Vec::new();
        let mut fetched_any = false;
        let mut failed_any = false;
        for outcome in outcomes {
            match outcome {
                Tier1Outcome::Fetched(body) => {
                    fetched_any = true;
                    bodies.push(body);
                }
                Tier1Outcome::Deferred(stack) => deferred.push(stack),
                Tier1Outcome::Failed(stack) => {
                    failed_any = true;
                    deferred.push(stack);
                }
            }
        }

        if failed_any && !fetched_any {
            return None;
        }

        // Local coverage for identifiers GitHub could not serve
        for stack in deferred {
            if let Some(text) = self.local_template(&stack) {
                bodies.push(TemplateBody::new(format!("{stack} (local)"), text));
            }
        }
        Some(bodies)
    }

    /// Tier 2: one batched gitignore.io call over the valid subset, with
    /// tier 3 as the final fallback.
    async fn generate_from_api(
        &self,
        essential: TemplateBody,
        stacks: &[String],
    ) -> GeneratedContent {
        let valid = filter_valid_stacks(stacks);
        if !valid.is_empty() {
            match self.provider.fetch_api_batch(&valid).await {
                Ok(text) => {
                    return GeneratedContent {
                        text: merge_templates(&[
                            essential,
                            TemplateBody::new("gitignore.io", text),
                        ]),
                        tier: SourceTier::GitignoreIoApi,
                    };
                }
                Err(err) => {
                    warn!(%err, "gitignore.io API unavailable, falling back to local templates");
                }
            }
        } else {
            warn!("no stacks valid for the gitignore.io API, falling back to local templates");
        }

        let fallback = self.fallback_body(stacks);
        GeneratedContent {
            text: merge_templates(&[essential, fallback]),
            tier: SourceTier::LocalFallback,
        }
    }

    /// The always-included essential block, from `essential.gitignore` when
    /// present, else the built-in literal.
    fn essential_body(&self) -> TemplateBody {
        let path = self.templates_dir.join("essential.gitignore");
        let text = read_template(&path).unwrap_or_else(|| BUILTIN_ESSENTIAL.to_string());
        TemplateBody::new(ESSENTIAL_LABEL, text)
    }

    /// Tier-3 selection: first identifier with a local template file, else
    /// `default.gitignore`, else the built-in literal.
    fn fallback_body(&self, stacks: &[String]) -> TemplateBody {
        for stack in stacks {
            if let Some(text) = self.local_template(stack) {
                return TemplateBody::new(format!("{stack} (local)"), text);
            }
        }

        let default_path = self.templates_dir.join("default.gitignore");
        match read_template(&default_path) {
            Some(text) => TemplateBody::new("Default", text),
            None => TemplateBody::new("Default", BUILTIN_DEFAULT),
        }
    }

    /// Reads `<templates_dir>/<stack>.gitignore` if it exists.
    fn local_template(&self, stack: &str) -> Option<String> {
        read_template(&self.templates_dir.join(format!("{stack}.gitignore")))
    }
}

/// Filters to identifiers the gitignore.io API accepts, deduplicated and
/// sorted. Unknown identifiers are dropped silently.
#[must_use]
pub fn filter_valid_stacks(stacks: &[String]) -> Vec<String> {
    let mut valid: Vec<String> = stacks
        .iter()
        .map(|s| normalize_stack(s))
        .filter(|s| !s.is_empty() && is_valid_api_stack(s))
        .collect();
    valid.sort();
    valid.dedup();
    valid
}

/// Reads a template file, treating unreadable or absent files as missing.
fn read_template(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}
