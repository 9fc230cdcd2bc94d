//! Frame pacing.
//!
//! A [`Pacer`] decides when the next frame may start and whether the
//! simulation should go on at all.

use std::io::BufRead;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::FRAME_INTERVAL;
use crate::error::Result;

/// What the loop should do once a pacer returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Render and step another frame.
    Continue,
    /// Leave the loop.
    Stop,
}

/// Decides when the next frame starts and whether the loop goes on.
pub trait Pacer {
    /// Called when a new frame starts, before it is rendered.
    fn begin_frame(&mut self) {}

    /// Blocks until the next frame may start.
    fn wait(&mut self) -> Result<Pace>;
}

/// Source of time for pacing.
pub trait Clock {
    /// Current timestamp.
    fn now(&self) -> Instant;

    /// Time passed since `since`, zero if `since` is in the future.
    fn elapsed(&self, since: Instant) -> Duration {
        self.now().saturating_duration_since(since)
    }

    /// Blocks the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Wall clock backed by [`Instant`] and [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Steps once per line of input; stops at end of input.
///
/// Lines are raw bytes, so input in any encoding advances the simulation.
pub struct LinePacer<R: BufRead> {
    input: R,
    line: Vec<u8>,
}

impl<R: BufRead> LinePacer<R> {
    /// Wraps a buffered reader, usually locked stdin.
    pub fn new(input: R) -> Self {
        LinePacer {
            input,
            line: Vec::new(),
        }
    }
}

impl<R: BufRead> Pacer for LinePacer<R> {
    fn wait(&mut self) -> Result<Pace> {
        self.line.clear();
        match self.input.read_until(b'\n', &mut self.line)? {
            0 => Ok(Pace::Stop),
            _ => Ok(Pace::Continue),
        }
    }
}

/// Holds every frame to a fixed duration by sleeping off whatever time the
/// frame did not use.
pub struct FixedRatePacer<C: Clock> {
    clock: C,
    interval: Duration,
    frame_start: Instant,
}

impl FixedRatePacer<SystemClock> {
    /// A pacer running at [`FRAME_INTERVAL`] on the wall clock.
    pub fn system() -> Self {
        FixedRatePacer::new(SystemClock, FRAME_INTERVAL)
    }
}

impl<C: Clock> FixedRatePacer<C> {
    /// A pacer holding frames to `interval` as measured by `clock`.
    pub fn new(clock: C, interval: Duration) -> Self {
        let frame_start = clock.now();
        FixedRatePacer {
            clock,
            interval,
            frame_start,
        }
    }

    /// Target duration of one frame.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl<C: Clock> Pacer for FixedRatePacer<C> {
    fn begin_frame(&mut self) {
        self.frame_start = self.clock.now();
    }

    fn wait(&mut self) -> Result<Pace> {
        let elapsed = self.clock.elapsed(self.frame_start);
        if let Some(remaining) = self.interval.checked_sub(elapsed) {
            if !remaining.is_zero() {
                self.clock.sleep(remaining);
            }
        } else {
            log::debug!("frame overran interval by {:?}", elapsed - self.interval);
        }
        Ok(Pace::Continue)
    }
}
