//! Sampling loop driver.
//!
//! Ties the sampler, the history buffer and the frame pipeline together:
//! each tick samples once, pushes the CPU reading into history, composes a
//! frame and presents it, then sleeps until the next tick boundary.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::Local;
use tracing::debug;

use crate::collector::{MetricSource, Sampler};
use crate::config::DashboardConfig;
use crate::history::HistoryBuffer;

use super::frame::compose;
use super::terminal::FrameSink;

/// Granularity of the interruptible inter-tick sleep.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Lifecycle of the sampling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Constructed, not yet running.
    Idle,
    /// Inside the tick loop.
    Running,
    /// Exited the tick loop; the sink has been restored.
    Stopped,
}

/// The dashboard application: owns the sampler, history and loop state.
pub struct App<S: MetricSource> {
    sampler: Sampler<S>,
    history: HistoryBuffer,
    config: DashboardConfig,
    state: LoopState,
    iteration: u64,
}

impl<S: MetricSource> App<S> {
    /// Creates an idle app over the given metrics source.
    pub fn new(source: S, config: DashboardConfig) -> Self {
        let history = HistoryBuffer::new(config.history_len);
        Self {
            sampler: Sampler::new(source),
            history,
            config,
            state: LoopState::Idle,
            iteration: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of completed ticks.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Runs the sampling loop until `running` is cleared (the interrupt
    /// signal) or the sink fails.
    ///
    /// The sink is restored exactly once on every exit path, including the
    /// error path, before this returns. The tick period is fixed; no
    /// catch-up is attempted if a tick overruns.
    pub fn run<K: FrameSink>(&mut self, sink: &mut K, running: &AtomicBool) -> io::Result<()> {
        debug!("sampling loop starting");
        self.state = LoopState::Running;
        let result = self.tick_loop(sink, running);
        self.state = LoopState::Stopped;
        let restored = sink.restore();
        debug!("sampling loop stopped after {} ticks", self.iteration);
        result.and(restored)
    }

    fn tick_loop<K: FrameSink>(&mut self, sink: &mut K, running: &AtomicBool) -> io::Result<()> {
        while running.load(Ordering::SeqCst) {
            self.iteration += 1;
            let snapshot = self.sampler.sample();
            self.history.push(snapshot.cpu_percent);
            let frame = compose(
                &snapshot,
                &self.history,
                self.iteration,
                Local::now(),
                &self.config,
            );
            sink.present(&frame)?;
            self.sleep_until_next_tick(running);
        }
        Ok(())
    }

    /// Sleeps for the tick period in short slices, polling the shutdown
    /// flag between slices so an interrupt is observed promptly.
    fn sleep_until_next_tick(&self, running: &AtomicBool) {
        let mut remaining = self.config.tick;
        while remaining > Duration::ZERO && running.load(Ordering::SeqCst) {
            let step = remaining.min(SLEEP_SLICE);
            thread::sleep(step);
            remaining = remaining.saturating_sub(step);
        }
    }
}
