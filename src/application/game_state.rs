use crate::domain::{Blueprint, LifeError, LifeGrid, Scheduler, StepEngine, default_rule};
use super::SimulationConfig;

pub const MIN_STEPS_PER_SECOND: f32 = 0.5;
pub const MAX_STEPS_PER_SECOND: f32 = 30.0;

/// Everything a control surface can ask the simulation to do
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ControlAction {
    Play,
    Stop,
    TogglePlay,
    Clear,
    Randomize,
    Stamp(&'static Blueprint),
    /// Change the speed by this many steps per second
    AdjustSpeed(f32),
}

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub grid: LifeGrid,
    pub engine: StepEngine,
    pub scheduler: Scheduler,
    pub generation: u64,
    pub steps_per_second: f32,
    pub last_step_time_ms: f32,   // Step performance metric
    pub last_render_time_ms: f32, // Render performance metric
    /// Last recoverable error, shown to the user
    pub status: Option<String>,
}

impl GameState {
    /// Build the grid, engine and scheduler described by `config`
    pub fn new(config: &SimulationConfig) -> Result<Self, LifeError> {
        let grid = LifeGrid::new(config.grid_width, config.grid_height)?;
        let mut scheduler = Scheduler::default();
        // Reject nonsense first, then pull the rate into the adjustable range
        scheduler.set_rate(config.steps_per_second)?;
        let steps_per_second = config.steps_per_second.clamp(MIN_STEPS_PER_SECOND, MAX_STEPS_PER_SECOND);
        scheduler.set_rate(steps_per_second)?;
        let engine = StepEngine::new(default_rule(), config.algorithm);
        log::info!(
            "created {}x{} {} grid, {} steps/s, {} stepping",
            config.grid_width,
            config.grid_height,
            engine.rule().name(),
            steps_per_second,
            config.algorithm.name()
        );

        Ok(Self {
            grid,
            engine,
            scheduler,
            generation: 0,
            steps_per_second,
            last_step_time_ms: 0.0,
            last_render_time_ms: 0.0,
            status: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn play(mut self) -> Self {
        self.scheduler.play();
        self
    }

    pub fn stop(mut self) -> Self {
        self.scheduler.stop();
        self
    }

    /// Toggle play/stop state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.stop() } else { self.play() }
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.grid.clear();
        self.generation = 0;
        self.status = None;
        self
    }

    /// Randomize grid and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.grid.randomize();
        self.generation = 0;
        self.status = None;
        self
    }

    /// Stamp a blueprint, keeping the failure as the status line
    pub fn stamp(mut self, blueprint: &Blueprint) -> Self {
        self.status = self.try_stamp(blueprint).err().map(|err| err.to_string());
        self
    }

    pub fn try_stamp(&mut self, blueprint: &Blueprint) -> Result<(), LifeError> {
        self.generation = 0;
        blueprint.stamp_on(&mut self.grid)
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        let rate = (self.steps_per_second + delta).clamp(MIN_STEPS_PER_SECOND, MAX_STEPS_PER_SECOND);
        match self.scheduler.set_rate(rate) {
            Ok(()) => self.steps_per_second = rate,
            Err(err) => self.status = Some(err.to_string()),
        }
        self
    }

    /// Paint or erase the cell under the pointer
    pub fn paint(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set_alive(x, y, alive);
    }

    pub fn apply(self, action: ControlAction) -> Self {
        match action {
            ControlAction::Play => self.play(),
            ControlAction::Stop => self.stop(),
            ControlAction::TogglePlay => self.toggle_running(),
            ControlAction::Clear => self.clear(),
            ControlAction::Randomize => self.randomize(),
            ControlAction::Stamp(blueprint) => self.stamp(blueprint),
            ControlAction::AdjustSpeed(delta) => self.adjust_speed(delta),
        }
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta_time: f32) -> Self {
        let start = std::time::Instant::now();
        if self.scheduler.tick(delta_time, &mut self.grid, &self.engine) {
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
            self.generation += 1;
        }
        self
    }
}
