use macroquad::prelude::*;

use super::Rect;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    ToggleRunning,
    Step,
    Clear,
    Randomize,
}

/// Button UI component with hover and click detection
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    text: String,
    pub action: ButtonAction,
    color: Color,
    hover_color: Color,
}

impl Button {
    pub fn new(rect: Rect, text: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            rect,
            text: text.into(),
            action,
            color: Color::from_rgba(70, 130, 180, 255),
            hover_color: Color::from_rgba(100, 149, 237, 255),
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(mouse_pos)
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let Rect { x, y, w, h } = self.rect;
        let color = if self.is_hovered(mouse_pos) { self.hover_color } else { self.color };

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text_size = measure_text(&self.text, None, 20, 1.0);
        draw_text(
            &self.text,
            x + (w - text_size.width) / 2.0,
            y + (h + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
