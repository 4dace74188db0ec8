use macroquad::prelude::*;

use crate::application::{GameState, Viewport, VisibleBounds, ZoomDirection};
use crate::domain::Cell;
use crate::ui::{Button, ButtonAction, grid_area_width};

/// Drag state carried between frames
#[derive(Debug, Default)]
pub struct InputState {
    /// Cell toggled last during the current left-drag
    last_toggled: Option<Cell>,
    /// Cursor position on the previous frame of a right-drag
    last_pan_pos: Option<(f32, f32)>,
    /// Left button is still held from a click consumed elsewhere
    press_swallowed: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the current left press until it is released
    pub fn swallow_press(&mut self) {
        self.press_swallowed = true;
    }

    /// Cell to toggle this frame of a drag, if the cursor entered a new one
    fn drag_toggle(&mut self, cell: Cell) -> Option<Cell> {
        if self.press_swallowed || self.last_toggled == Some(cell) {
            return None;
        }
        self.last_toggled = Some(cell);
        Some(cell)
    }

    fn end_toggle(&mut self) {
        self.last_toggled = None;
        self.press_swallowed = false;
    }

    /// Pixel delta since the previous frame of a pan drag
    fn drag_pan(&mut self, pos: (f32, f32)) -> Option<(f32, f32)> {
        let delta = self.last_pan_pos.map(|last| (pos.0 - last.0, pos.1 - last.1));
        self.last_pan_pos = Some(pos);
        delta
    }

    fn end_pan(&mut self) {
        self.last_pan_pos = None;
    }
}

fn over_grid(mouse_pos: (f32, f32)) -> bool {
    mouse_pos.0 < grid_area_width()
}

/// Zoom one notch per wheel event, anchored at the cursor
pub fn handle_zoom(viewport: &mut Viewport, mouse_pos: (f32, f32), canvas: (f64, f64)) {
    if !over_grid(mouse_pos) {
        return;
    }
    if let Some(direction) = ZoomDirection::from_wheel(mouse_wheel().1) {
        viewport.apply_zoom(direction, mouse_pos.0 as f64, mouse_pos.1 as f64, canvas.0, canvas.1);
    }
}

/// Pan with right mouse button drag
pub fn handle_pan(input: &mut InputState, viewport: &mut Viewport, mouse_pos: (f32, f32)) {
    if !is_mouse_button_down(MouseButton::Right) {
        input.end_pan();
        return;
    }
    if let Some((dx, dy)) = input.drag_pan(mouse_pos) {
        viewport.pan(dx as f64, dy as f64);
    }
}

/// Left press toggles the cell under the cursor; dragging toggles each
/// new cell the cursor enters. While `blocked`, nothing is toggled but a
/// release still ends the drag.
pub fn handle_mouse_toggle(
    state: &mut GameState,
    input: &mut InputState,
    viewport: &Viewport,
    mouse_pos: (f32, f32),
    canvas: (f64, f64),
    blocked: bool,
) {
    if !is_mouse_button_down(MouseButton::Left) {
        input.end_toggle();
        return;
    }
    if blocked || !over_grid(mouse_pos) {
        return;
    }

    let cell = viewport.screen_to_cell(mouse_pos.0 as f64, mouse_pos.1 as f64, canvas.0, canvas.1);
    if let Some(cell) = input.drag_toggle(cell) {
        state.grid.toggle(cell);
    }
}

fn apply_action(state: GameState, action: ButtonAction, visible: VisibleBounds) -> GameState {
    match action {
        ButtonAction::ToggleRunning => state.toggle_running(),
        ButtonAction::Step => state.step_once(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Randomize => state.randomize(visible.min_cell(), visible.max_cell()),
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState, viewport: &mut Viewport, visible: VisibleBounds) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step_once),
        (KeyCode::C, GameState::clear),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        state = apply_action(state, ButtonAction::Randomize, visible);
    }

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        viewport.reset();
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    visible: VisibleBounds,
) -> GameState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| apply_action(s, btn.action, visible))
}
