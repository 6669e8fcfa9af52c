//! Progress display for long shuffles

use crate::io::configuration::{MIN_STEPS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Shifting: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Step counter shown while the origin wanders
///
/// Short runs and quiet mode get a hidden bar so callers can report
/// unconditionally.
pub struct StepProgress {
    bar: ProgressBar,
}

impl StepProgress {
    /// Create a progress display for `total` steps
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible && total >= MIN_STEPS_FOR_PROGRESS {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(STEP_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Whether anything is drawn to the terminal
    pub fn is_visible(&self) -> bool {
        !self.bar.is_hidden()
    }

    /// Handle to the underlying bar for use inside update hooks
    ///
    /// Clones share state, so increments from a hook show on this display.
    pub fn handle(&self) -> ProgressBar {
        self.bar.clone()
    }

    /// Steps counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
