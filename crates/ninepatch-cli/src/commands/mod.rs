//! CLI command definitions and handlers.

pub mod fix;

use clap::Parser;

/// ninepatch-fix - strip the red tint from nine-patch PNG borders
#[derive(Parser)]
#[command(name = "ninepatch-fix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fix arguments (path, alpha handling, output flags).
    #[command(flatten)]
    pub fix: fix::FixArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every nine-patch file was processed.
    Success = 0,
    /// At least one file or directory could not be processed.
    Failures = 1,
    /// No path was given.
    Usage = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
