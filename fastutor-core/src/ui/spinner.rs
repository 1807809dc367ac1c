//! Loading spinner shown while a generation call is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A wrapper around indicatif's ProgressBar for easy spinner management
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.tick();

        Self { pb }
    }

    /// Finish the spinner and clear the line
    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_is_cleared_on_finish() {
        let spinner = Spinner::new("Generating explanation...");
        assert!(spinner.pb.length().is_none());
        spinner.finish_and_clear();
        assert!(spinner.pb.is_finished());
    }

    #[test]
    fn dropping_an_active_spinner_finishes_it() {
        let pb = {
            let spinner = Spinner::new("Generating answer...");
            spinner.pb.clone()
        };
        assert!(pb.is_finished());
    }
}
