mod camera;
mod config;
mod game_state;

pub use camera::{Camera, ViewFrame};
pub use config::SimulationConfig;
pub use game_state::{ControlAction, GameState, MAX_STEPS_PER_SECOND, MIN_STEPS_PER_SECOND};
