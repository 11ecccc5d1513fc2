//! Configuration file support for ninepatch-fix.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/ninepatch-fix/config.toml` (lowest priority)
//! - Project-local: `.ninepatch-fix.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use ninepatch_core::AlphaPolicy;
use serde::Deserialize;
use tracing::{debug, info};

/// Name of the project-local config file.
const PROJECT_CONFIG: &str = ".ninepatch-fix.toml";

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Pixel correction settings.
    pub fix: FixConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Never write files, only report.
    pub dry_run: Option<bool>,
}

/// Pixel correction configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FixConfig {
    /// Alpha handling: "preserve" or "clear".
    pub alpha: Option<AlphaPolicy>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "jsonl".
    pub format: Option<String>,
    /// Show a spinner instead of per-path lines.
    pub progress: Option<bool>,
    /// Suppress progress output.
    pub quiet: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/ninepatch-fix/config.toml`
    /// 2. Project-local: `.ninepatch-fix.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref f) = self.output.format {
            if f != "text" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'text' or 'jsonl', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        self.general.dry_run = other.general.dry_run.or(self.general.dry_run);

        self.fix.alpha = other.fix.alpha.or(self.fix.alpha);

        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.progress = other.output.progress.or(self.output.progress);
        self.output.quiet = other.output.quiet.or(self.output.quiet);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ninepatch-fix").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.ninepatch-fix.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(PROJECT_CONFIG))
        .find(|path| path.exists())
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
