use macroquad::prelude::*;

use super::{Rect, fit_label};

const ROW_HEIGHT: f32 = 30.0;
const FONT_SIZE: u16 = 16;

/// What a single press did to a dropdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownClick {
    /// Press missed the dropdown, which was closed
    Ignored,
    Opened,
    /// Header press or outside press dismissed the menu
    Closed,
    /// Item at this index was chosen, even if already selected
    Picked(usize),
}

impl DropdownClick {
    /// Whether the press belongs to the dropdown and nothing else
    pub fn consumed(self) -> bool {
        self != DropdownClick::Ignored
    }
}

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index; out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn header_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, ROW_HEIGHT)
    }

    fn item_rect(&self, index: usize) -> Rect {
        Rect::new(self.x, self.y + ROW_HEIGHT * (index as f32 + 1.0), self.width, ROW_HEIGHT)
    }

    fn menu_rect(&self) -> Rect {
        Rect::new(self.x, self.y + ROW_HEIGHT, self.width, ROW_HEIGHT * self.items.len() as f32)
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let header = self.header_rect();
        let header_color = if header.contains(mouse_pos) {
            Color::from_rgba(100, 149, 237, 255)
        } else {
            Color::from_rgba(70, 130, 180, 255)
        };
        draw_rectangle(header.x, header.y, header.w, header.h, header_color);
        draw_rectangle_lines(header.x, header.y, header.w, header.h, 2.0, WHITE);

        // Leave room for the arrow
        let text = fit_label(&self.items[self.selected], self.width - 30.0, FONT_SIZE);
        draw_text(&text, self.x + 5.0, self.y + 21.0, FONT_SIZE as f32, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if !self.is_open {
            return;
        }

        let menu = self.menu_rect();
        draw_rectangle(menu.x, menu.y, menu.w, menu.h, Color::from_rgba(30, 30, 30, 255));

        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_rect(i);
            let row_color = if row.contains(mouse_pos) {
                Color::from_rgba(100, 149, 237, 255)
            } else if i == self.selected {
                Color::from_rgba(50, 100, 150, 255)
            } else {
                Color::from_rgba(45, 45, 45, 255)
            };
            draw_rectangle(row.x, row.y, row.w, row.h, row_color);
            draw_rectangle_lines(row.x, row.y, row.w, row.h, 1.0, Color::from_rgba(80, 80, 80, 255));

            let text = fit_label(item, self.width - 10.0, FONT_SIZE);
            draw_text(&text, row.x + 5.0, row.y + 21.0, FONT_SIZE as f32, WHITE);
        }

        draw_rectangle_lines(menu.x, menu.y, menu.w, menu.h, 2.0, WHITE);
    }

    /// Header click opens/closes, item click selects and closes,
    /// click anywhere else closes an open menu.
    fn handle_click(&mut self, mouse_pos: (f32, f32), clicked: bool) -> DropdownClick {
        if !clicked {
            return DropdownClick::Ignored;
        }
        if self.header_rect().contains(mouse_pos) {
            self.is_open = !self.is_open;
            return if self.is_open { DropdownClick::Opened } else { DropdownClick::Closed };
        }
        if !self.is_open {
            return DropdownClick::Ignored;
        }

        self.is_open = false;
        match (0..self.items.len()).find(|&i| self.item_rect(i).contains(mouse_pos)) {
            Some(index) => {
                self.selected = index;
                DropdownClick::Picked(index)
            }
            None => DropdownClick::Closed,
        }
    }

    /// True while the pointer is over the header or the open menu
    pub fn captures(&self, mouse_pos: (f32, f32)) -> bool {
        self.header_rect().contains(mouse_pos) || (self.is_open && self.menu_rect().contains(mouse_pos))
    }
}

/// Deliver this frame's left press to a stack of dropdowns.
///
/// The open menu sees the press first since it is drawn over the others.
/// The first dropdown that consumes the press ends delivery, so a menu
/// row never also hits the header underneath it. Opening one closes the
/// rest. Returns the index of the consuming dropdown and what it did.
pub fn route_press(dropdowns: &mut [&mut Dropdown], mouse_pos: (f32, f32)) -> Option<(usize, DropdownClick)> {
    route_click(dropdowns, mouse_pos, is_mouse_button_pressed(MouseButton::Left))
}

fn route_click(
    dropdowns: &mut [&mut Dropdown],
    mouse_pos: (f32, f32),
    clicked: bool,
) -> Option<(usize, DropdownClick)> {
    let open = dropdowns.iter().position(|dd| dd.is_open());
    let order = open.into_iter().chain((0..dropdowns.len()).filter(move |&i| Some(i) != open));

    for index in order {
        let click = dropdowns[index].handle_click(mouse_pos, clicked);
        if !click.consumed() {
            continue;
        }
        if click == DropdownClick::Opened {
            dropdowns
                .iter_mut()
                .enumerate()
                .filter(|(i, _)| *i != index)
                .for_each(|(_, dd)| dd.close());
        }
        return Some((index, click));
    }
    None
}
