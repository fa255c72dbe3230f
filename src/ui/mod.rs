mod button;

pub use button::Button;

use macroquad::prelude::{Rect, screen_height, screen_width};
use crate::application::ControlAction;
use crate::domain::presets;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BUTTON_GAP: f32 = 8.0;
pub const CELL_SIZE: f32 = 10.0;
/// Steps per second added or removed by one press of Slower/Faster
pub const SPEED_STEP: f32 = 1.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Labels and actions of the control panel, top to bottom
pub fn controls() -> Vec<(&'static str, ControlAction)> {
    vec![
        ("Play", ControlAction::Play),
        ("Stop", ControlAction::Stop),
        ("Clear", ControlAction::Clear),
        ("Random", ControlAction::Randomize),
        ("Fish", ControlAction::Stamp(&presets::FISH)),
        ("Eel", ControlAction::Stamp(&presets::EEL)),
        ("Slower", ControlAction::AdjustSpeed(-SPEED_STEP)),
        ("Faster", ControlAction::AdjustSpeed(SPEED_STEP)),
    ]
}

/// Create UI buttons stacked down the panel
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    controls()
        .into_iter()
        .enumerate()
        .map(|(i, (label, action))| {
            let y = 20.0 + i as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(Rect::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT), label, action)
        })
        .collect()
}

/// Y position below the last button, where status text starts
pub fn status_y() -> f32 {
    20.0 + controls().len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP) + 10.0
}
