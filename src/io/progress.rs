//! Terminal display of partition statistics

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::partition::statistics::Statistics;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STATISTICS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Completion bar spanning both axes
///
/// Length is `W + H`; the position advances through the columns and then
/// through the rows, so the bar mirrors the overall completion fraction.
pub struct StatisticsDisplay {
    bar: ProgressBar,
}

impl Default for StatisticsDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsDisplay {
    /// Create a display drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STATISTICS_STYLE.clone());
        Self { bar }
    }

    /// Create a display that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a freshly loaded image
    pub fn start(&self, name: &str, statistics: &Statistics) {
        self.bar.reset();
        self.bar.set_prefix(name.to_string());
        self.update(statistics);
    }

    /// Show new statistics
    pub fn update(&self, statistics: &Statistics) {
        self.bar.set_length(statistics.overall_total as u64);
        self.bar.set_position(statistics.overall_done as u64);
        self.bar.set_message(render_message(statistics));
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Text shown next to the bar, e.g. `"1 of 2 - 3/8 (18.75%)"`
pub fn render_message(statistics: &Statistics) -> String {
    format!(
        "{} ({})",
        statistics.progress_label(),
        statistics.percentage_label()
    )
}
