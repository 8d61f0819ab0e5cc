//! Progress display for generation attempts

use crate::algorithm::selection::GridSurvey;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks eliminations of one attempt against the work it started with
///
/// The bar length is the number of eliminations needed to collapse every
/// cell when the attempt starts; propagation advances it in jumps.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display on stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a new attempt
    pub fn start_attempt(&self, attempt: usize, attempts: usize, initial: &GridSurvey) {
        self.bar.set_prefix(format!("attempt {attempt}/{attempts}"));
        self.bar.set_length(initial.remaining as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Report the current grid state
    pub fn update(&self, survey: &GridSurvey) {
        let total = self.bar.length().unwrap_or(0);
        self.bar
            .set_position(total.saturating_sub(survey.remaining as u64));
        self.bar.set_message(format!(
            "{} collapsed, {} contradicted",
            survey.collapsed, survey.contradicted
        ));
    }

    /// Position of the bar in eliminations
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display with a closing message
    pub fn finish(&self, message: String) {
        self.bar.finish_with_message(message);
    }
}
