//! Terminal progress reporting via indicatif.

use indicatif::{ProgressBar, ProgressStyle};

use crate::ports::ProgressListener;

/// Progress bar for interactive acquisition runs.
pub struct TerminalProgress {
    bar: ProgressBar,
}

impl TerminalProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressListener for TerminalProgress {
    fn begin(&self, target: u64) {
        self.bar.set_length(target);
        self.bar.set_position(0);
        self.bar.set_message("Downloading");
    }

    fn advance(&self, fetched: u64, target: u64) {
        self.bar.set_length(target);
        self.bar.set_position(fetched.min(target));
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
