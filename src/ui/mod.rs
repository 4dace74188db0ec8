mod button;
mod dropdown;

pub use button::{Button, ButtonAction};
pub use dropdown::{Dropdown, DropdownClick, route_press};

use macroquad::prelude::{screen_width, screen_height, measure_text};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Y positions of the selector dropdowns, top to bottom
pub const RULE_DROPDOWN_Y: f32 = 20.0;
pub const ALGORITHM_DROPDOWN_Y: f32 = 70.0;
pub const PATTERN_DROPDOWN_Y: f32 = 120.0;

/// Axis-aligned screen rectangle used for widget hit-testing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Edges are inclusive
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the drawable world area left of the panel
pub fn grid_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Current canvas size in pixels; read once per frame and passed to
/// every viewport call in that frame.
pub fn canvas_size() -> (f64, f64) {
    (grid_area_width() as f64, grid_area_height() as f64)
}

/// Shorten `text` with a trailing "..." until `measure` says it fits
pub fn fit_text(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> String {
    if measure(text) <= max_width {
        return text.to_string();
    }
    let mut truncated = text.to_string();
    while !truncated.is_empty() && measure(&format!("{truncated}...")) > max_width {
        truncated.pop();
    }
    format!("{truncated}...")
}

/// `fit_text` measured with macroquad's default font
pub fn fit_label(text: &str, max_width: f32, font_size: u16) -> String {
    fit_text(text, max_width, |s| measure_text(s, None, font_size, 1.0).width)
}

/// Create UI buttons with standard layout
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x();
    let play_label = if is_running { "Pause" } else { "Play" };
    vec![
        Button::new(Rect::new(px, 470.0, PANEL_WIDTH, BUTTON_HEIGHT), play_label, ButtonAction::ToggleRunning),
        Button::new(Rect::new(px, 520.0, PANEL_WIDTH, BUTTON_HEIGHT), "Step", ButtonAction::Step),
        Button::new(Rect::new(px, 570.0, PANEL_WIDTH, BUTTON_HEIGHT), "Clear", ButtonAction::Clear),
        Button::new(Rect::new(px, 620.0, PANEL_WIDTH, BUTTON_HEIGHT), "Random", ButtonAction::Randomize),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    // 10px per char keeps the arithmetic obvious
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn test_rect_edges_inclusive() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(r.contains((10.0, 20.0)));
        assert!(r.contains((40.0, 60.0)));
        assert!(!r.contains((40.1, 30.0)));
        assert!(!r.contains((9.9, 30.0)));
    }

    #[test]
    fn test_fit_text_short_unchanged() {
        assert_eq!(fit_text("Glider", 100.0, mono), "Glider");
    }

    #[test]
    fn test_fit_text_truncates() {
        assert_eq!(fit_text("Gosper Glider Gun", 100.0, mono), "Gosper ...");
    }

    #[test]
    fn test_fit_text_degenerate_width() {
        assert_eq!(fit_text("Acorn", 5.0, mono), "...");
    }
}
