//! Terminal status output
//!
//! Status lines go to stdout; failures are printed by `main` to stderr.

use console::Style;
use std::path::Path;

/// Prints progress for a command run
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    verbose: bool,
}

impl Reporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// A lifecycle step, shown only in verbose mode
    pub fn step(&self, label: &str, detail: impl std::fmt::Display) {
        if self.verbose {
            println!("{} {}", Style::new().cyan().bold().apply_to(label), detail);
        }
    }

    /// A page that passed, shown only in verbose mode
    pub fn page_ok(&self, path: &Path) {
        if self.verbose {
            println!("  {} {}", Style::new().green().apply_to("ok"), path.display());
        }
    }

    /// Final summary line
    pub fn success(&self, message: impl std::fmt::Display) {
        println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
    }
}
