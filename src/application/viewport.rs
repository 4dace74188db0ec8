use crate::domain::Cell;

/// Base cell size in pixels at zoom 1.0
pub const CELL_SIZE: f64 = 15.0;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 4.0;
/// Relative zoom change per wheel notch
pub const ZOOM_STEP: f64 = 0.1;

/// Camera center in world units plus zoom (1.0 = normal, 2.0 = 2x zoomed in)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

/// Which way a wheel notch zooms
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Only the sign of the wheel delta matters; zero means no zoom
    pub fn from_wheel(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(ZoomDirection::In)
        } else if delta < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }

    const fn sign(self) -> f64 {
        match self {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        }
    }
}

/// Viewport maps the unbounded world grid onto a finite pixel canvas.
/// The camera center always sits at the canvas center.
///
/// Every conversion takes the canvas size of the current frame; callers
/// must pass the same, post-resize dimensions to all calls in a frame.
#[derive(Clone, Debug)]
pub struct Viewport {
    state: CameraState,
}

impl Viewport {
    /// Camera centered on (x, y); zoom is clamped into range
    pub fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self {
            state: CameraState {
                x,
                y,
                zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            },
        }
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Pixels per world unit at the current zoom
    pub fn scaled_cell_size(&self) -> f64 {
        CELL_SIZE * self.state.zoom
    }

    pub fn world_to_screen(&self, world_x: f64, world_y: f64, canvas_w: f64, canvas_h: f64) -> (f64, f64) {
        let size = self.scaled_cell_size();
        (
            canvas_w / 2.0 + (world_x - self.state.x) * size,
            canvas_h / 2.0 + (world_y - self.state.y) * size,
        )
    }

    /// Exact inverse of [`world_to_screen`](Self::world_to_screen) for the same canvas
    pub fn screen_to_world(&self, screen_x: f64, screen_y: f64, canvas_w: f64, canvas_h: f64) -> (f64, f64) {
        let size = self.scaled_cell_size();
        (
            self.state.x + (screen_x - canvas_w / 2.0) / size,
            self.state.y + (screen_y - canvas_h / 2.0) / size,
        )
    }

    /// Grid cell under a screen pixel
    pub fn screen_to_cell(&self, screen_x: f64, screen_y: f64, canvas_w: f64, canvas_h: f64) -> Cell {
        let (wx, wy) = self.screen_to_world(screen_x, screen_y, canvas_w, canvas_h);
        Cell::new(wx.floor() as i64, wy.floor() as i64)
    }

    /// Pan by a screen-space pixel delta; the world follows the cursor
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let size = self.scaled_cell_size();
        self.state.x -= dx / size;
        self.state.y -= dy / size;
    }

    /// Zoom one step around a screen anchor, keeping the world point under
    /// the anchor fixed. Returns false (and changes nothing) when the zoom
    /// is already pinned at the bound in that direction.
    pub fn apply_zoom(
        &mut self,
        direction: ZoomDirection,
        anchor_x: f64,
        anchor_y: f64,
        canvas_w: f64,
        canvas_h: f64,
    ) -> bool {
        let old_zoom = self.state.zoom;
        let new_zoom = (old_zoom * (1.0 + direction.sign() * ZOOM_STEP)).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == old_zoom {
            return false;
        }

        let (before_x, before_y) = self.screen_to_world(anchor_x, anchor_y, canvas_w, canvas_h);
        self.state.zoom = new_zoom;
        let (after_x, after_y) = self.screen_to_world(anchor_x, anchor_y, canvas_w, canvas_h);

        self.state.x += before_x - after_x;
        self.state.y += before_y - after_y;
        true
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.state.x = x;
        self.state.y = y;
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f64 = 800.0;
    const H: f64 = 600.0;
    const EPS: f64 = 1e-9;

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < EPS && (a.1 - b.1).abs() < EPS
    }

    #[test]
    fn test_center_maps_to_canvas_center() {
        let vp = Viewport::new(12.5, -3.0, 2.0);
        assert!(close(vp.world_to_screen(12.5, -3.0, W, H), (W / 2.0, H / 2.0)));
    }

    #[test]
    fn test_world_to_screen_scales_with_zoom() {
        let vp = Viewport::new(0.0, 0.0, 2.0);
        assert_eq!(vp.scaled_cell_size(), 30.0);
        assert!(close(vp.world_to_screen(1.0, -1.0, W, H), (430.0, 270.0)));
    }

    #[test]
    fn test_new_clamps_zoom() {
        assert_eq!(Viewport::new(0.0, 0.0, 100.0).zoom(), MAX_ZOOM);
        assert_eq!(Viewport::new(0.0, 0.0, 0.01).zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_coordinate_round_trip() {
        let cameras = [
            Viewport::default(),
            Viewport::new(-250.75, 1e4, 0.5),
            Viewport::new(33.3, -0.125, 3.7),
        ];
        for vp in &cameras {
            for p in [(0.0, 0.0), (W, H), (123.4, 567.8), (W / 2.0, 1.0)] {
                let (wx, wy) = vp.screen_to_world(p.0, p.1, W, H);
                let back = vp.world_to_screen(wx, wy, W, H);
                assert!((back.0 - p.0).abs() < 1e-6 && (back.1 - p.1).abs() < 1e-6, "{p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_screen_to_cell_floors() {
        let vp = Viewport::default();
        // One pixel left/up of center lands in cell (-1, -1)
        assert_eq!(vp.screen_to_cell(W / 2.0 - 1.0, H / 2.0 - 1.0, W, H), Cell::new(-1, -1));
        assert_eq!(vp.screen_to_cell(W / 2.0, H / 2.0, W, H), Cell::new(0, 0));
        assert_eq!(vp.screen_to_cell(W / 2.0 + 14.9, H / 2.0 + 15.0, W, H), Cell::new(0, 1));
    }

    #[test]
    fn test_pan_grabs_canvas() {
        let mut vp = Viewport::default();
        vp.pan(30.0, -15.0);
        let state = vp.state();
        assert!(close((state.x, state.y), (-2.0, 1.0)));
    }

    #[test]
    fn test_pan_linearity() {
        let mut split = Viewport::new(4.0, 4.0, 1.7);
        split.pan(13.0, -7.5);
        split.pan(-40.25, 22.0);

        let mut once = Viewport::new(4.0, 4.0, 1.7);
        once.pan(13.0 - 40.25, -7.5 + 22.0);

        let (a, b) = (split.state(), once.state());
        assert!(close((a.x, a.y), (b.x, b.y)));
    }

    #[test]
    fn test_zoom_step_is_multiplicative() {
        let mut vp = Viewport::default();
        assert!(vp.apply_zoom(ZoomDirection::In, W / 2.0, H / 2.0, W, H));
        assert!((vp.zoom() - 1.1).abs() < EPS);
        assert!(vp.apply_zoom(ZoomDirection::Out, W / 2.0, H / 2.0, W, H));
        assert!((vp.zoom() - 0.99).abs() < EPS);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut vp = Viewport::default();
        for _ in 0..100 {
            vp.apply_zoom(ZoomDirection::In, 10.0, 20.0, W, H);
            assert!(vp.zoom() <= MAX_ZOOM);
        }
        assert_eq!(vp.zoom(), MAX_ZOOM);

        let pinned = vp.state();
        assert!(!vp.apply_zoom(ZoomDirection::In, 700.0, 5.0, W, H));
        assert_eq!(vp.state(), pinned);

        for _ in 0..100 {
            vp.apply_zoom(ZoomDirection::Out, 10.0, 20.0, W, H);
            assert!(vp.zoom() >= MIN_ZOOM);
        }
        assert_eq!(vp.zoom(), MIN_ZOOM);

        let pinned = vp.state();
        assert!(!vp.apply_zoom(ZoomDirection::Out, 0.0, 0.0, W, H));
        assert_eq!(vp.state(), pinned);
    }

    #[test]
    fn test_cursor_anchored_zoom() {
        let anchors = [(0.0, 0.0), (W, H), (123.0, 456.0), (W / 2.0, H / 2.0)];
        for direction in [ZoomDirection::In, ZoomDirection::Out] {
            for &(ax, ay) in &anchors {
                let mut vp = Viewport::new(-17.25, 42.5, 1.3);
                let before = vp.screen_to_world(ax, ay, W, H);
                assert!(vp.apply_zoom(direction, ax, ay, W, H));
                let after = vp.screen_to_world(ax, ay, W, H);
                assert!(close(before, after), "{direction:?} at ({ax}, {ay})");
            }
        }
    }

    #[test]
    fn test_zoom_at_center_keeps_position() {
        let mut vp = Viewport::new(5.0, 6.0, 1.0);
        vp.apply_zoom(ZoomDirection::In, W / 2.0, H / 2.0, W, H);
        let state = vp.state();
        assert!(close((state.x, state.y), (5.0, 6.0)));
    }

    #[test]
    fn test_wheel_sign() {
        assert_eq!(ZoomDirection::from_wheel(3.5), Some(ZoomDirection::In));
        assert_eq!(ZoomDirection::from_wheel(-0.1), Some(ZoomDirection::Out));
        assert_eq!(ZoomDirection::from_wheel(0.0), None);
    }

    #[test]
    fn test_reset() {
        let mut vp = Viewport::new(9.0, 9.0, 3.0);
        vp.reset();
        assert_eq!(vp.state(), CameraState { x: 0.0, y: 0.0, zoom: 1.0 });
    }
}
