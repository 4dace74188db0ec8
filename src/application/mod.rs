mod viewport;
mod game_state;
pub mod render_plan;

pub use viewport::{Viewport, CameraState, ZoomDirection, CELL_SIZE, MIN_ZOOM, MAX_ZOOM, ZOOM_STEP};
pub use game_state::{GameState, MIN_SPEED, MAX_SPEED};
pub use render_plan::{VisibleBounds, GridLines, visible_cells, grid_lines, should_draw_grid_lines};
