use macroquad::prelude::*;
use crate::application::{Camera, GameState};
use crate::domain::{LifeGrid, Transition};
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, grid_area_height, grid_area_width, panel_x, status_y};

const BORN_COLOR: Color = Color::new(0.55, 1.0, 0.6, 1.0);
const DIED_COLOR: Color = Color::new(0.45, 0.12, 0.12, 1.0);
const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Color for a cell given how it changed in the last step
pub fn transition_color(transition: Transition) -> Color {
    match transition {
        Transition::Born => BORN_COLOR,
        Transition::Died => DIED_COLOR,
        Transition::Alive => ALIVE_COLOR,
        Transition::Dead => DEAD_COLOR,
    }
}

/// Draw the grid from committed previous/current flags
pub fn draw_grid(grid: &LifeGrid, camera: &Camera) {
    let cell_size = CELL_SIZE * camera.zoom;
    let area_width = grid_area_width();
    let area_height = grid_area_height();
    let draw_grid_lines = cell_size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (screen_x, screen_y) = camera.grid_to_screen(x, y, CELL_SIZE);

        // Skip if outside viewport
        if screen_x + cell_size < 0.0 || screen_x > area_width ||
           screen_y + cell_size < 0.0 || screen_y > area_height {
            continue;
        }

        draw_rectangle(screen_x, screen_y, cell_size, cell_size, transition_color(cell.transition()));
        if draw_grid_lines {
            draw_rectangle_lines(screen_x, screen_y, cell_size, cell_size, 1.0, GRID_LINE_COLOR);
        }
    }
}

/// Draw the control panel and status lines
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(25, 25, 30, 255));

    for button in buttons {
        button.draw(mouse_pos);
    }

    let (width, height) = state.grid.dimensions();
    let lines = [
        format!("Grid: {width}x{height}"),
        format!("Rule: {}", state.engine.rule().description()),
        format!("Generation: {}", state.generation),
        format!("Alive: {}", state.grid.live_count()),
        format!("Speed: {:.1} steps/s", state.steps_per_second),
        format!("State: {}", if state.is_running() { "running" } else { "stopped" }),
        format!("Step: {} {:.2}ms", state.engine.algorithm().name(), state.last_step_time_ms),
        format!("Render: {:.2}ms", state.last_render_time_ms),
    ];

    let mut y = status_y();
    for line in &lines {
        draw_text(line, px + 10.0, y, 18.0, LIGHTGRAY);
        y += 22.0;
    }

    if let Some(status) = &state.status {
        // Wrap long messages onto a few short lines
        let mut current = String::new();
        for word in status.split_whitespace() {
            if !current.is_empty() && current.len() + word.len() + 1 > 20 {
                draw_text(&current, px + 10.0, y, 16.0, ORANGE);
                y += 18.0;
                current.clear();
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            draw_text(&current, px + 10.0, y, 16.0, ORANGE);
        }
    }
}
