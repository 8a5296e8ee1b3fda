//! In-place running counter for count-objects
//!
//! Shows the running total while pages are still being fetched, updating a
//! single terminal line. Suppressed in quiet, JSON, and no-progress modes.

use super::OutputConfig;

/// Running object counter
#[derive(Debug)]
pub struct CountDisplay {
    bar: Option<indicatif::ProgressBar>,
}

impl CountDisplay {
    /// Create a counter display respecting the output configuration
    pub fn new(config: &OutputConfig) -> Self {
        let bar = if config.quiet || config.json || config.no_progress {
            None
        } else {
            let bar = indicatif::ProgressBar::new_spinner();
            bar.set_style(
                indicatif::ProgressStyle::default_spinner()
                    .template("{spinner:.green} counted {human_pos} objects")
                    .expect("valid template"),
            );
            Some(bar)
        };

        Self { bar }
    }

    /// Update the running total in place
    pub fn update(&self, count: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(count);
        }
    }

    /// Remove the counter line so the final total can be printed
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }

    /// Check if the counter is visible
    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }
}
