//! The periodic driver: a two-state machine that owns the rotation's
//! cadence and fires ticks when they come due.

use std::time::{Duration, Instant};

use crate::animation::composer;
use crate::host::FlowHost;
use crate::rotation::state::RotationState;

/// Observable driver state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DriverState {
    /// No rotation in progress; pumping does nothing.
    Stopped,
    /// A rotation is live and ticks fire on the captured cadence.
    Running,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Stopped,
    Running {
        /// `None` until the first tick fires: the first tick is due
        /// immediately at start.
        next_due: Option<Instant>,
        period: Duration,
    },
}

/// Cancellable recurring tick source for one widget instance.
///
/// There is no internal thread or OS timer: the host pumps the driver from
/// its own single context, and the driver fires at most one due tick per
/// pump, so all visible-state writes stay serialized on that context. The
/// cadence (`fade + hold`) is captured at [`PeriodicDriver::start`] and never
/// changes for the lifetime of the rotation.
///
/// [`PeriodicDriver::stop`] disarms the deadline synchronously: once it
/// returns, no further tick can fire. Both transitions are idempotent.
#[derive(Clone, Debug)]
pub struct PeriodicDriver {
    phase: Phase,
}

impl PeriodicDriver {
    /// A stopped driver.
    pub fn new() -> Self {
        Self {
            phase: Phase::Stopped,
        }
    }

    /// Observable state.
    pub fn state(&self) -> DriverState {
        match self.phase {
            Phase::Stopped => DriverState::Stopped,
            Phase::Running { .. } => DriverState::Running,
        }
    }

    /// Whether a rotation is live.
    pub fn is_running(&self) -> bool {
        self.state() == DriverState::Running
    }

    /// Begin a rotation: the first tick is due on the next pump, then every
    /// `fade + hold` milliseconds.
    ///
    /// No-op while already running (exactly one live rotation per widget) and
    /// no-op with an empty frame sequence (an inert configuration is refused
    /// silently, not an error).
    pub fn start<F: Clone>(&mut self, state: &RotationState<F>) {
        if self.is_running() {
            return;
        }
        if state.is_empty() {
            tracing::debug!("refusing to start with an empty frame sequence");
            return;
        }
        let period = Duration::from_millis(state.config().period_ms());
        self.phase = Phase::Running {
            next_due: None,
            period,
        };
        tracing::debug!(period_ms = period.as_millis() as u64, "rotation started");
    }

    /// Cancel the rotation. Idempotent; after this returns no further tick
    /// fires. Already-dispatched animation groups keep playing in the host.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.phase = Phase::Stopped;
            tracing::debug!("rotation stopped");
        }
    }

    /// Fire at most one due tick. Returns whether a tick fired.
    ///
    /// The next deadline is scheduled at `now + period` from the actual
    /// firing time, so a host that pumps late gets no catch-up burst. A tick
    /// that fails stops the rotation (the widget stays usable and can be
    /// restarted); the error never propagates to the caller.
    pub fn pump<F, H>(&mut self, now: Instant, state: &mut RotationState<F>, host: &mut H) -> bool
    where
        F: Clone,
        H: FlowHost<F>,
    {
        let Phase::Running { next_due, period } = &mut self.phase else {
            return false;
        };
        let due = match *next_due {
            None => true,
            Some(deadline) => now >= deadline,
        };
        if !due {
            return false;
        }
        *next_due = Some(now + *period);

        if let Err(err) = composer::run_tick(state, host) {
            tracing::error!(error = %err, "tick failed; stopping rotation");
            self.phase = Phase::Stopped;
        }
        true
    }
}

impl Default for PeriodicDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
