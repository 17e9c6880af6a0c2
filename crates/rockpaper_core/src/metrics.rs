//! Step counters and logging bootstrap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Running totals for a simulation session.
pub struct Metrics {
    steps: AtomicU64,
    conversions: AtomicU64,
    samples: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: AtomicU64::new(0),
            conversions: AtomicU64::new(0),
            samples: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records one driver tick: a batch of steps followed by a sample.
    pub fn record_batch(&self, steps: usize, conversions: usize, duration: Duration) {
        self.steps.fetch_add(steps as u64, Ordering::Relaxed);
        self.conversions
            .fetch_add(conversions as u64, Ordering::Relaxed);
        let samples = self.samples.fetch_add(1, Ordering::Relaxed) + 1;

        // Log at info level every 100 samples
        if samples % 100 == 0 {
            tracing::info!(
                samples = samples,
                steps = self.steps(),
                conversions = self.conversions(),
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn conversions(&self) -> u64 {
        self.conversions.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn samples(&self) -> u64 {
        self.samples.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn reset(&self) {
        self.steps.store(0, Ordering::Relaxed);
        self.conversions.store(0, Ordering::Relaxed);
        self.samples.store(0, Ordering::Relaxed);
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `default_level`. Output goes to stderr so stdout can
/// carry data.
pub fn init_logging(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
