//! # stackignore
//!
//! A library for generating `.gitignore` files from the technology stacks
//! detected in a project directory. This library provides:
//!
//! - Directory scanning and marker-file stack detection
//! - A three-tier template fetcher (GitHub templates, gitignore.io, local
//!   files) that always produces content
//! - A deduplicating template merge engine
//! - Reconciliation with existing ignore files that preserves user rules
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use stackignore::{Config, generate_ignore_file};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let path = generate_ignore_file(std::path::Path::new("."), false, &config).await?;
//! println!("Wrote {}", path.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod fetch;
pub mod generate;
pub mod logging;
pub mod merge;
pub mod models;
pub mod reconcile;
pub mod registry;
pub mod scanner;

// Re-export commonly used types for convenience
pub use config::Config;
pub use generate::Generator;
pub use models::{Args, GeneratedContent, SourceTier, TemplateBody};
pub use scanner::Scanner;

use crate::fetch::HttpTemplateProvider;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

/// Core result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs the whole pipeline: scan, detect, generate, reconcile, write.
///
/// Writes the final text to `<target_dir>/.gitignore` and returns that path.
/// With `force`, or when no ignore file exists, a fresh file with a
/// detection header is written; otherwise the existing file is merged into,
/// preserving every user-authored line.
///
/// Only scan and write failures propagate; remote provider failures are
/// absorbed by the fallback tiers.
pub async fn generate_ignore_file(target_dir: &Path, force: bool, config: &Config) -> Result<PathBuf> {
    let gitignore_path = target_dir.join(".gitignore");

    let scanner = Scanner::new(target_dir);
    let names = scanner.scan().map_err(error::StackignoreError::Scan)?;
    let stacks = detector::detect(&names);
    info!(?stacks, "detected stacks");

    let provider = HttpTemplateProvider::new(
        config.github_base_url(),
        config.api_base_url(),
        config.timeout(),
    )
    .map_err(error::StackignoreError::Fetch)?;
    let generator = Generator::new(provider, config.templates_dir());
    let generated = generator.generate(&stacks).await;
    info!(tier = %generated.tier, "generated ignore content");

    let final_text = if gitignore_path.exists() && !force {
        let existing = std::fs::read_to_string(&gitignore_path).with_context(|| {
            format!("Failed to read existing {}", gitignore_path.display())
        })?;
        reconcile::merge_existing(&existing, &generated.text, &stacks)
    } else {
        let mut text = reconcile::generate_header(&stacks);
        text.push_str(&generated.text);
        text.push('\n');
        text
    };

    reconcile::write(&gitignore_path, &final_text).map_err(error::StackignoreError::Write)?;
    info!(path = %gitignore_path.display(), "wrote ignore file");
    Ok(gitignore_path)
}
