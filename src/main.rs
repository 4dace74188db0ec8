use log::info;
use macroquad::prelude::*;
use life_viewer::{
    AppConfig, GameState, Viewport, VisibleBounds, presets, Algorithm,
    domain::all_rules,
    input::{self, InputState},
    ui::{self, Dropdown, DropdownClick},
    rendering,
};

fn window_conf() -> Conf {
    // window_conf runs before main, so logging starts here
    let _ = env_logger::try_init();
    let window = &AppConfig::shared().window;
    Conf {
        window_title: window.title.clone(),
        window_width: window.width,
        window_height: window.height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = AppConfig::shared();
    let mut state = GameState::from_config(&config.simulation);
    let mut viewport = Viewport::default();
    let mut input_state = InputState::new();
    info!(
        "starting: rule {}, {} gen/s, {}",
        state.rule.name(),
        state.updates_per_second,
        state.algorithm.name()
    );

    let px = ui::panel_x();

    let rules = all_rules();
    let rule_items: Vec<String> = rules.iter().map(|rule| rule.name().to_string()).collect();
    let mut rule_dropdown = Dropdown::new(px, ui::RULE_DROPDOWN_Y, ui::PANEL_WIDTH, "Rule", rule_items);
    if let Some(idx) = rules.iter().position(|rule| rule.name() == state.rule.name()) {
        rule_dropdown.set_selected(idx);
    }

    let algorithms = Algorithm::all();
    let algorithm_items: Vec<String> = algorithms.iter().map(|a| a.name().to_string()).collect();
    let mut algorithm_dropdown =
        Dropdown::new(px, ui::ALGORITHM_DROPDOWN_Y, ui::PANEL_WIDTH, "Algorithm", algorithm_items);
    if let Some(idx) = algorithms.iter().position(|&a| a == state.algorithm) {
        algorithm_dropdown.set_selected(idx);
    }

    let patterns = presets::all_patterns();
    let pattern_items: Vec<String> = patterns.iter().map(|p| p.name.to_string()).collect();
    let mut pattern_dropdown = Dropdown::new(px, ui::PATTERN_DROPDOWN_Y, ui::PANEL_WIDTH, "Pattern", pattern_items);

    loop {
        let mouse_pos = mouse_position();
        // Sampled once so every viewport call this frame agrees on size
        let canvas = ui::canvas_size();
        let visible = VisibleBounds::from_viewport(&viewport, canvas.0, canvas.1);

        let px = ui::panel_x();
        rule_dropdown.set_position(px, ui::RULE_DROPDOWN_Y);
        algorithm_dropdown.set_position(px, ui::ALGORITHM_DROPDOWN_Y);
        pattern_dropdown.set_position(px, ui::PATTERN_DROPDOWN_Y);

        let buttons = ui::create_buttons(state.is_running);

        let routed = ui::route_press(
            &mut [&mut rule_dropdown, &mut algorithm_dropdown, &mut pattern_dropdown],
            mouse_pos,
        );
        match routed {
            Some((0, DropdownClick::Picked(idx))) => {
                if let Some(rule) = all_rules().into_iter().nth(idx) {
                    state.set_rule(rule);
                }
            }
            Some((1, DropdownClick::Picked(idx))) => state.set_algorithm(algorithms[idx]),
            // Any pick enters placement mode, even re-picking the same pattern
            Some((2, DropdownClick::Picked(idx))) => {
                state.pending_pattern_index = Some(idx);
                state.set_running(false);
            }
            _ => {}
        }
        // A press taken by a dropdown never reaches the grid or the buttons
        let press_consumed = routed.is_some();
        if press_consumed {
            input_state.swallow_press();
        }

        let menu_has_pointer = [&rule_dropdown, &algorithm_dropdown, &pattern_dropdown]
            .iter()
            .any(|dd| dd.is_open() || dd.captures(mouse_pos));

        if let Some(pattern_idx) = state.pending_pattern_index {
            let pattern = &patterns[pattern_idx];

            // Right-click or Escape cancels placement
            if is_mouse_button_pressed(MouseButton::Right) || is_key_pressed(KeyCode::Escape) {
                state.pending_pattern_index = None;
            } else if is_mouse_button_pressed(MouseButton::Left)
                && !press_consumed
                && mouse_pos.0 < ui::grid_area_width()
                && !menu_has_pointer
            {
                let anchor = viewport.screen_to_cell(mouse_pos.0 as f64, mouse_pos.1 as f64, canvas.0, canvas.1);
                pattern.place_on(&mut state.grid, pattern.centered_origin(anchor));
                info!("placed {} at {}", pattern.name, anchor);
                state.pending_pattern_index = None;
                input_state.swallow_press();
            }
        }

        let toggle_blocked = menu_has_pointer || state.pending_pattern_index.is_some();
        input::handle_mouse_toggle(&mut state, &mut input_state, &viewport, mouse_pos, canvas, toggle_blocked);

        if !press_consumed {
            state = input::process_button_clicks(state, &buttons, mouse_pos, visible);
        }
        input::handle_zoom(&mut viewport, mouse_pos, canvas);
        input::handle_pan(&mut input_state, &mut viewport, mouse_pos);
        state = input::process_keyboard_input(state, &mut viewport, visible);

        state = state.tick(get_frame_time() as f64);

        let render_start = std::time::Instant::now();
        clear_background(BLACK);
        // Camera may have moved during input handling
        let visible = VisibleBounds::from_viewport(&viewport, canvas.0, canvas.1);
        rendering::draw_world(&state.grid, &viewport, visible, canvas);

        if let Some(idx) = state.pending_pattern_index {
            if mouse_pos.0 < ui::grid_area_width() {
                rendering::draw_pattern_preview(&patterns[idx], &viewport, mouse_pos, canvas);
            }
        }

        rendering::draw_controls(
            &state,
            &viewport,
            &buttons,
            &[&rule_dropdown, &algorithm_dropdown, &pattern_dropdown],
            mouse_pos,
        );
        state.last_render_time_ms = render_start.elapsed().as_secs_f32() * 1000.0;

        next_frame().await;
    }
}
