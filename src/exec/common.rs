//! Shared output helpers
//!
//! User-facing output is colourised and prefixed with the subject of the
//! operation (a repository, a record id, an app name) in cyan/bold so that
//! lines are easy to scan.

use colored::*;

/// Logger with consistent formatting for the utilities' stdout output
///
/// ```rust,no_run
/// use opskit::exec::Logger;
///
/// let logger = Logger;
/// logger.info("octocat/hello", "Creating repository");
/// logger.success("octocat/hello", "Repository created");
/// ```
#[derive(Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    pub fn info(&self, subject: &str, msg: &str) {
        println!("{} | {}", subject.cyan().bold(), msg);
    }

    pub fn success(&self, subject: &str, msg: &str) {
        println!("{} | {}", subject.cyan().bold(), msg.green());
    }

    pub fn warn(&self, subject: &str, msg: &str) {
        println!("{} | {}", subject.cyan().bold(), msg.yellow());
    }
}
