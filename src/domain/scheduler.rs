use super::{LifeError, LifeGrid, StepEngine};

/// Seconds between steps when nothing else is configured
pub const DEFAULT_INTERVAL: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
}

/// Scheduler drives autoplay from the host's frame loop.
///
/// Each frame reports how much time passed. While running, the scheduler
/// waits out one interval at a time and fires a single step whenever a wait
/// completes. There is only ever one wait in flight, so calling `play` twice
/// cannot double the step rate, and `stop` discards the pending wait so no
/// further step happens.
#[derive(Clone, Debug)]
pub struct Scheduler {
    state: SchedulerState,
    interval: f32,
    /// Length of the wait in flight, fixed when the wait started
    wait: f32,
    waited: f32,
}

impl Scheduler {
    pub fn new(interval: f32) -> Result<Self, LifeError> {
        validate_interval(interval)?;
        Ok(Self {
            state: SchedulerState::Idle,
            interval,
            wait: interval,
            waited: 0.0,
        })
    }

    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    pub const fn interval(&self) -> f32 {
        self.interval
    }

    /// Start autoplay. Returns false if it was already running.
    pub fn play(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = SchedulerState::Running;
        self.start_wait();
        log::info!("autoplay started, {}s per step", self.interval);
        true
    }

    /// Stop autoplay. Returns false if it was already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = SchedulerState::Idle;
        self.waited = 0.0;
        log::info!("autoplay stopped");
        true
    }

    /// Change the interval; the wait in flight keeps its length
    pub fn set_interval(&mut self, seconds: f32) -> Result<(), LifeError> {
        validate_interval(seconds).inspect_err(|err| log::warn!("{err}"))?;
        self.interval = seconds;
        Ok(())
    }

    /// Set the speed in steps per second
    pub fn set_rate(&mut self, steps_per_second: f32) -> Result<(), LifeError> {
        self.set_interval(1.0 / steps_per_second)
    }

    /// Let `delta` seconds pass. Returns true when a step is due.
    pub fn advance(&mut self, delta: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.waited += delta;
        if self.waited < self.wait {
            return false;
        }
        self.start_wait();
        true
    }

    /// Let `delta` seconds pass and step the grid if a wait completed.
    /// Returns whether a step happened.
    pub fn tick(&mut self, delta: f32, grid: &mut LifeGrid, engine: &StepEngine) -> bool {
        let due = self.advance(delta);
        if due {
            engine.step(grid);
            log::debug!("scheduled step");
        }
        due
    }

    fn start_wait(&mut self) {
        self.wait = self.interval;
        self.waited = 0.0;
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            state: SchedulerState::Idle,
            interval: DEFAULT_INTERVAL,
            wait: DEFAULT_INTERVAL,
            waited: 0.0,
        }
    }
}

fn validate_interval(seconds: f32) -> Result<(), LifeError> {
    if seconds > 0.0 && seconds.is_finite() {
        Ok(())
    } else {
        Err(LifeError::InvalidInterval(seconds))
    }
}
