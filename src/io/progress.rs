//! Item progress display for generation runs

use crate::io::configuration::{MIN_ITEMS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static ITEM_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the items of one run
///
/// Runs too short to be worth a bar draw nothing.
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    completed: usize,
}

impl ProgressManager {
    /// Create a progress manager with no active bar
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a bar for `total` items
    pub fn initialize(&mut self, total: usize, label: &str) {
        self.completed = 0;
        if total < MIN_ITEMS_FOR_PROGRESS {
            self.bar = None;
            return;
        }

        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        bar.set_style(ITEM_STYLE.clone());
        bar.set_prefix(label.to_string());
        self.bar = Some(bar);
    }

    /// Mark one more item as written
    pub fn complete_item(&mut self) {
        self.completed += 1;
        if let Some(ref bar) = self.bar {
            bar.set_position(self.completed as u64);
        }
    }

    /// Items completed since the last `initialize`
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Remove the bar from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
