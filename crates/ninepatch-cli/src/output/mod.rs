//! Output formatting for CLI.

mod console;
mod json;
mod progress;

pub use console::ConsoleReporter;
pub use json::JsonOutput;
pub use progress::SpinnerReporter;
