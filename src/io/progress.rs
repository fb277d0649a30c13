//! Progress display for batch generation

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Artworks: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many artworks of a batch have been written
///
/// Single artworks get no bar; the display only appears for batches.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    total: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create an idle progress manager
    pub const fn new() -> Self {
        Self {
            bar: None,
            total: 0,
            completed: 0,
        }
    }

    /// Prepare the display for `total` artworks
    pub fn initialize(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        if total > 1 {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Record one finished artwork
    pub fn complete_artwork(&mut self, profile_id: &str) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(profile_id.to_string());
            bar.inc(1);
        }
    }

    /// Number of artworks finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of artworks expected
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Clean up the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All artworks written");
        }
    }
}
