// file: src/utils/progress.rs
// description: loading spinner and fixed-delay stand-in for long-running work
// reference: uses indicatif for progress display

use crate::utils::telemetry::OperationTimer;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SLOW_MARGIN: Duration = Duration::from_millis(500);

pub struct LoadingIndicator {
    bar: Option<ProgressBar>,
}

impl LoadingIndicator {
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar: Some(bar) }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn finish(self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

/// Waits out a fixed delay while a spinner runs. No cancellation.
pub async fn simulate_work(label: &str, delay: Duration, show_progress: bool) -> Duration {
    let timer = OperationTimer::new(label);
    let indicator = LoadingIndicator::start(label, show_progress);

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    indicator.finish();
    timer.warn_if_slow(delay + SLOW_MARGIN, "simulated delay overran");
    timer.finish()
}
