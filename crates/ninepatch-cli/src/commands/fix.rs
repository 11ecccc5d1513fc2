//! Fix command - strip red artifacts from every nine-patch under a path.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use ninepatch_adapters::{FsNinePatchSource, PngFileStore};
use ninepatch_core::{fix_tree, AlphaPolicy, BorderFixer, FixOptions, ProgressSink, RunSummary};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{ConsoleReporter, JsonOutput, SpinnerReporter};

/// Output format for progress and results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable progress lines
    #[default]
    Text,
    /// JSON Lines (one report per nine-patch file)
    Jsonl,
}

/// Alpha handling for corrected pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlphaMode {
    /// Keep the original alpha channel
    Preserve,
    /// Make corrected pixels fully transparent
    Clear,
}

impl From<AlphaMode> for AlphaPolicy {
    fn from(mode: AlphaMode) -> Self {
        match mode {
            AlphaMode::Preserve => Self::Preserve,
            AlphaMode::Clear => Self::Clear,
        }
    }
}

impl From<AlphaPolicy> for AlphaMode {
    fn from(policy: AlphaPolicy) -> Self {
        match policy {
            AlphaPolicy::Preserve => Self::Preserve,
            AlphaPolicy::Clear => Self::Clear,
        }
    }
}

/// Arguments for the fix command.
#[derive(Args, Clone, Debug)]
pub struct FixArgs {
    /// Resource directory or single .9.png file to fix
    pub path: Option<PathBuf>,

    /// Report what would change without writing any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Alpha handling for corrected pixels
    #[arg(long, value_enum)]
    pub alpha: Option<AlphaMode>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show a spinner instead of one line per path
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output (errors are still printed)
    #[arg(short, long)]
    pub quiet: bool,
}

impl FixArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    #[must_use]
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Boolean flags: CLI can only switch on, config fills in otherwise
        if !args.dry_run {
            args.dry_run = config.general.dry_run.unwrap_or(false);
            if args.dry_run {
                info!("Dry run enabled by configuration file");
            }
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }
        if !args.quiet {
            args.quiet = config.output.quiet.unwrap_or(false);
        }

        if args.alpha.is_none() {
            if let Some(alpha) = config.fix.alpha {
                info!("Alpha handling set to {alpha:?} by configuration file");
                args.alpha = Some(alpha.into());
            }
        }

        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_deref()
                .and_then(|s| match s {
                    "text" => Some(OutputFormat::Text),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        args
    }

    /// Get alpha policy with fallback to preserving alpha.
    fn alpha_policy(&self) -> AlphaPolicy {
        self.alpha.map_or_else(AlphaPolicy::default, AlphaPolicy::from)
    }

    /// Get output format with fallback to text.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}

/// Result of running the fix command.
pub struct FixResult {
    /// Totals for the traversal.
    pub summary: RunSummary,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the fix command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &FixArgs) -> Result<FixResult> {
    let Some(root) = args.path.as_deref() else {
        anyhow::bail!("No path specified");
    };
    info!("Fixing nine-patch borders under {}", root.display());

    let options = FixOptions {
        alpha: args.alpha_policy(),
        dry_run: args.dry_run,
    };
    debug!("Fix options: {options:?}");

    let source = FsNinePatchSource::new(root);
    let store = PngFileStore::new();
    let fixer = BorderFixer::new(options);
    let sink = build_sink(args);

    let summary = fix_tree(&source, &store, &fixer, sink.as_ref());

    let exit_code = if summary.has_failures() {
        ExitCode::Failures
    } else {
        ExitCode::Success
    };

    Ok(FixResult { summary, exit_code })
}

/// Pick the progress sink for the requested output.
fn build_sink(args: &FixArgs) -> Box<dyn ProgressSink> {
    match args.format() {
        OutputFormat::Jsonl => Box::new(JsonOutput::stdout()),
        OutputFormat::Text if args.progress && !args.quiet => Box::new(SpinnerReporter::new()),
        OutputFormat::Text => Box::new(ConsoleReporter::new(args.quiet)),
    }
}
