use macroquad::prelude::*;

use crate::application::{GameState, Viewport, VisibleBounds, grid_lines, should_draw_grid_lines, visible_cells};
use crate::domain::{Pattern, SparseGrid};
use crate::ui::{Button, Dropdown, panel_x, PANEL_WIDTH};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Format large numbers with K/M/B suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000_000 {
        format!("{:.1}B", n as f64 / 1_000_000_000.0)
    } else if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Traffic-light color for a frame-time budget
fn timing_color(ms: f32, good: f32, ok: f32, slow: f32) -> Color {
    if ms < good {
        Color::from_rgba(0, 255, 0, 255)
    } else if ms < ok {
        Color::from_rgba(255, 255, 0, 255)
    } else if ms < slow {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(255, 0, 0, 255)
    }
}

/// Draw grid lines and alive cells; only cells inside `visible` are touched
pub fn draw_world(grid: &SparseGrid, viewport: &Viewport, visible: VisibleBounds, canvas: (f64, f64)) {
    let (canvas_w, canvas_h) = canvas;

    if should_draw_grid_lines(viewport) {
        let lines = grid_lines(viewport, visible, canvas_w, canvas_h);
        for x in lines.vertical {
            draw_line(x as f32, 0.0, x as f32, canvas_h as f32, 1.0, GRID_LINE_COLOR);
        }
        for y in lines.horizontal {
            draw_line(0.0, y as f32, canvas_w as f32, y as f32, 1.0, GRID_LINE_COLOR);
        }
    }

    let cell_size = viewport.scaled_cell_size() as f32;
    for cell in visible_cells(grid, visible) {
        let (sx, sy) = viewport.world_to_screen(cell.x as f64, cell.y as f64, canvas_w, canvas_h);
        draw_rectangle(sx as f32, sy as f32, cell_size, cell_size, ALIVE_COLOR);
    }
}

/// Draw a semi-transparent preview of a pattern centered on the cursor
pub fn draw_pattern_preview(pattern: &Pattern, viewport: &Viewport, mouse_pos: (f32, f32), canvas: (f64, f64)) {
    let (canvas_w, canvas_h) = canvas;
    let cell_size = viewport.scaled_cell_size() as f32;

    let anchor = viewport.screen_to_cell(mouse_pos.0 as f64, mouse_pos.1 as f64, canvas_w, canvas_h);
    let origin = pattern.centered_origin(anchor);

    for cell in pattern.cells_at(origin) {
        let (sx, sy) = viewport.world_to_screen(cell.x as f64, cell.y as f64, canvas_w, canvas_h);
        draw_rectangle(sx as f32, sy as f32, cell_size, cell_size, Color::from_rgba(0, 255, 150, 120));
        draw_rectangle_lines(sx as f32, sy as f32, cell_size, cell_size, 1.5, Color::from_rgba(0, 255, 150, 200));
    }

    // Bounding box around entire pattern
    let (bx, by) = viewport.world_to_screen(origin.x as f64, origin.y as f64, canvas_w, canvas_h);
    draw_rectangle_lines(
        bx as f32,
        by as f32,
        pattern.width as f32 * cell_size,
        pattern.height as f32 * cell_size,
        2.0,
        Color::from_rgba(255, 255, 0, 180),
    );
}

fn draw_panel_background() {
    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));
}

/// Draw the control panel with buttons, dropdowns, and stats
pub fn draw_controls(
    state: &GameState,
    viewport: &Viewport,
    buttons: &[Button],
    dropdowns: &[&Dropdown],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    let controls = [
        ("Controls:", 190.0, 14.0, WHITE),
        ("LMB: Toggle cell", 205.0, 12.0, GRAY),
        ("RMB-drag: Pan", 218.0, 12.0, GRAY),
        ("Wheel: Zoom", 231.0, 12.0, GRAY),
        ("Space: Play  N: Step", 244.0, 12.0, GRAY),
        ("C: Clear  R: Random", 257.0, 12.0, GRAY),
        ("Up/Down: Speed  H: Home", 270.0, 12.0, GRAY),
    ];
    for (text, y, size, color) in controls {
        draw_text(text, px, y, size, color);
    }

    let evolve_ms = state.last_evolution_time_ms;
    let render_ms = state.last_render_time_ms;
    draw_text(&format!("Evolve: {:.1}ms", evolve_ms), px, 300.0, 13.0, timing_color(evolve_ms, 5.0, 33.0, 100.0));
    draw_text(&format!("Render: {:.1}ms", render_ms), px, 315.0, 13.0, timing_color(render_ms, 5.0, 16.0, 50.0));
    draw_text(
        &format!("{} | FPS: {}", state.algorithm.name(), get_fps()),
        px, 330.0, 12.0, GRAY,
    );
    draw_text(state.algorithm.description(), px, 344.0, 11.0, GRAY);

    let camera = viewport.state();
    let stats = [
        ("Population:", format_number(state.grid.count()), 360.0),
        ("Generation:", format!("{}", state.generation), 400.0),
        ("Speed:", format!("{:.0} gen/s", state.updates_per_second), 680.0),
        ("Zoom:", format!("{:.2}x  ({:.1}, {:.1})", camera.zoom, camera.x, camera.y), 720.0),
    ];
    for (label, value, y) in stats {
        draw_text(label, px, y, 16.0, WHITE);
        draw_text(&value, px, y + 18.0, 16.0, Color::from_rgba(0, 255, 150, 255));
    }

    let (status, status_color) = if state.pending_pattern_index.is_some() {
        ("Placing (Esc)", Color::from_rgba(255, 255, 0, 255))
    } else if state.is_running {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Paused", Color::from_rgba(255, 165, 0, 255))
    };
    draw_text(status, px, 440.0, 16.0, status_color);

    // Dropdowns last, the open one on top of everything
    dropdowns.iter().filter(|dd| !dd.is_open()).for_each(|dd| dd.draw(mouse_pos));
    if let Some(open) = dropdowns.iter().find(|dd| dd.is_open()) {
        open.draw(mouse_pos);
    }
}
