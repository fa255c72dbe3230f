use macroquad::prelude::*;
use toroidal_life::{
    Camera, GameState, SimulationConfig, ViewFrame,
    ui::{self, CELL_SIZE},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::from_env();
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot start simulation: {err}");
            return;
        }
    };

    // Grid dimensions never change, so the framing is fixed
    let (grid_width, grid_height) = state.grid.dimensions();
    let frame = ViewFrame::fit(grid_width, grid_height);

    loop {
        let mouse_pos = mouse_position();
        let camera = Camera::framed(frame, ui::grid_area_width(), ui::grid_area_height(), CELL_SIZE);
        let buttons = ui::create_buttons();

        // Process input
        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);
        input::handle_mouse_paint(&mut state, &camera, mouse_pos);

        // Update game state
        state = state.tick(get_frame_time());

        // Render (with timing)
        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        rendering::draw_grid(&state.grid, &camera);
        rendering::draw_controls(&state, &buttons, mouse_pos);
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
