use macroquad::prelude::*;
use crate::application::{Camera, ControlAction, GameState};
use crate::domain::presets;
use crate::ui::{Button, CELL_SIZE, SPEED_STEP, grid_area_width};

/// Paint with the left button, erase with the right one.
/// Works while autoplay is running; edits land between steps.
pub fn handle_mouse_paint(state: &mut GameState, camera: &Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= grid_area_width() {
        return;
    }

    let alive = if is_mouse_button_down(MouseButton::Left) {
        true
    } else if is_mouse_button_down(MouseButton::Right) {
        false
    } else {
        return;
    };

    let (grid_x, grid_y) = camera.screen_to_grid(mouse_pos.0, mouse_pos.1, CELL_SIZE);
    let (grid_width, grid_height) = state.grid.dimensions();
    if grid_x < 0 || grid_y < 0 || grid_x >= grid_width as i32 || grid_y >= grid_height as i32 {
        return;
    }

    state.paint(grid_x as usize, grid_y as usize, alive);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    let bindings: [(KeyCode, ControlAction); 9] = [
        (KeyCode::Space, ControlAction::TogglePlay),
        (KeyCode::P, ControlAction::Play),
        (KeyCode::S, ControlAction::Stop),
        (KeyCode::C, ControlAction::Clear),
        (KeyCode::R, ControlAction::Randomize),
        (KeyCode::F, ControlAction::Stamp(&presets::FISH)),
        (KeyCode::E, ControlAction::Stamp(&presets::EEL)),
        (KeyCode::Up, ControlAction::AdjustSpeed(SPEED_STEP)),
        (KeyCode::Down, ControlAction::AdjustSpeed(-SPEED_STEP)),
    ];

    bindings.iter().fold(state, |s, &(key, action)| {
        if is_key_pressed(key) { s.apply(action) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(state: GameState, buttons: &[Button], mouse_pos: (f32, f32)) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| s.apply(btn.action()))
}
