// Domain layer - Simulation core
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Blueprint, CellState, LifeError, LifeGrid, Scheduler, StepEngine, presets};
pub use application::{Camera, ControlAction, GameState, SimulationConfig, ViewFrame};
