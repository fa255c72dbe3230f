mod cell;
mod error;
mod grid;
mod rules;
mod step;
mod patterns;
mod scheduler;
mod algorithm;

pub use cell::{CellState, Transition};
pub use error::LifeError;
pub use grid::{LifeGrid, wrap};
pub use rules::{Rule, ConwayRule, default_rule};
pub use step::StepEngine;
pub use patterns::{Blueprint, presets};
pub use scheduler::{Scheduler, SchedulerState, DEFAULT_INTERVAL};
pub use algorithm::Algorithm;
