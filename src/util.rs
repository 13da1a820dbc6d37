//! Shared utilities

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Rolling average of full-frame render times
///
/// The fractal pass is a blocking recompute that only runs when the view
/// changed, so frames-per-second is the wrong metric here; what matters
/// is how long one recompute takes at the current iteration cap.
pub struct RenderTimer {
    samples: VecDeque<f32>,
    sample_count: usize,
}

impl RenderTimer {
    /// Create a timer with the given rolling-window size
    pub fn new(sample_count: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(sample_count),
            sample_count,
        }
    }

    /// Time a render pass and record it. Returns the elapsed time.
    pub fn time<F: FnOnce()>(&mut self, f: F) -> Duration {
        let start = Instant::now();
        f();
        let elapsed = start.elapsed();
        self.record(elapsed);
        elapsed
    }

    /// Add a sample to the rolling window
    pub fn record(&mut self, elapsed: Duration) {
        self.samples.push_back(elapsed.as_secs_f32());
        if self.samples.len() > self.sample_count {
            self.samples.pop_front();
        }
    }

    /// Most recent render time in milliseconds
    pub fn last_ms(&self) -> f32 {
        self.samples.back().copied().unwrap_or(0.0) * 1000.0
    }

    /// Average render time over the window, in milliseconds
    pub fn avg_ms(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f32>() / self.samples.len() as f32 * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_timer_reports_zero() {
        let timer = RenderTimer::new(4);
        assert_eq!(timer.last_ms(), 0.0);
        assert_eq!(timer.avg_ms(), 0.0);
    }

    #[test]
    fn test_record_and_average() {
        let mut timer = RenderTimer::new(4);
        timer.record(Duration::from_millis(10));
        timer.record(Duration::from_millis(30));
        assert!((timer.last_ms() - 30.0).abs() < 0.01);
        assert!((timer.avg_ms() - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_window_evicts_oldest_sample() {
        let mut timer = RenderTimer::new(2);
        timer.record(Duration::from_millis(100));
        timer.record(Duration::from_millis(20));
        timer.record(Duration::from_millis(40));
        // The 100 ms sample fell out of the window
        assert!((timer.avg_ms() - 30.0).abs() < 0.01);
    }

    #[test]
    fn test_time_runs_the_closure() {
        let mut timer = RenderTimer::new(4);
        let mut ran = false;
        timer.time(|| ran = true);
        assert!(ran);
        assert_eq!(timer.samples.len(), 1);
    }
}
