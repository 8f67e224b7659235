//! Data model and CLI argument definitions.
//!
//! The types here flow through the whole pipeline: detected stack identifiers
//! are plain lowercase `String` tokens, template text travels as
//! [`TemplateBody`] values tagged with a provenance label, and the generator
//! reports which fallback tier produced its output via [`SourceTier`].

use clap::Parser;

/// One stack's (or the essential block's) ignore rules.
///
/// The label is used only for the human-readable section header; merge logic
/// never consults it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBody {
    /// Provenance label shown as the section comment (e.g. `Node`, `go (local)`).
    pub label: String,
    /// Raw template text, line-oriented.
    pub text: String,
}

impl TemplateBody {
    /// Creates a template body with a provenance label.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Renders the body as a section: a `# label` header line followed by the text.
    #[must_use]
    pub fn as_section(&self) -> String {
        format!("# {}\n{}", self.label, self.text)
    }
}

/// Which fallback tier produced the generated content.
///
/// Kept on the generator output so fallback behavior stays inspectable for
/// logging and tests instead of being buried in control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTier {
    /// Tier 1: per-identifier fetches from the github/gitignore repository.
    GithubTemplates,
    /// Tier 2: one batched call to the gitignore.io API.
    GitignoreIoApi,
    /// Tier 3: local template files or the built-in default.
    LocalFallback,
}

impl std::fmt::Display for SourceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceTier::GithubTemplates => write!(f, "github"),
            SourceTier::GitignoreIoApi => write!(f, "gitignore.io"),
            SourceTier::LocalFallback => write!(f, "local"),
        }
    }
}

/// Final merged ignore-file content plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedContent {
    /// The deduplicated, section-joined document text.
    pub text: String,
    /// Fallback tier that supplied the stack templates.
    pub tier: SourceTier,
}

/// Normalizes a stack identifier: lowercase, surrounding whitespace removed.
#[must_use]
pub fn normalize_stack(stack: &str) -> String {
    stack.trim().to_lowercase()
}

/// Command-line arguments.
#[derive(Parser, Clone, Debug)]
#[command(
    name = "stackignore",
    version,
    about = "Generates .gitignore files from the stacks detected in a project directory"
)]
pub struct Args {
    /// Directory to scan (defaults to the current directory)
    pub path: Option<String>,

    // Generation
    /// Overwrite an existing .gitignore instead of merging into it
    #[arg(short, long, help_heading = "Generation")]
    pub force: bool,

    /// Directory holding local fallback templates (<stack>.gitignore files)
    #[arg(long, help_heading = "Generation")]
    pub templates_dir: Option<String>,

    // Configuration
    /// Write a sample config file to the XDG config directory and exit
    #[arg(long, help_heading = "Configuration")]
    pub create_config: bool,

    // Logging
    /// Log level (trace, debug, info, warn, error); logging is off when unset
    #[arg(long, help_heading = "Logging")]
    pub log_level: Option<String>,

    /// Log to this file instead of stderr
    #[arg(long, help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Log format (text or json) [default: text]
    #[arg(long, help_heading = "Logging")]
    pub log_format: Option<String>,
}
