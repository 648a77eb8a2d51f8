//! Pointer, wheel and programmatic input driving the map viewport.

use crate::config::MapConfig;
use crate::model::{LiftPath, Point};

use super::viewport::{BoundingBox, MIN_ZOOM, PanBounds, Size, ViewportState};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        origin: Point,
        start_pan: Point,
    },
}

#[derive(Clone, Debug)]
pub struct MapController {
    pub viewport: ViewportState,
    pub drag: DragState,
    pub config: MapConfig,
    pub pan_bounds: PanBounds,
    /// True while a zoom-to transition is settling; the layer animates its
    /// transform only then.
    pub animating: bool,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(MapConfig::default(), PanBounds::default())
    }
}

impl MapController {
    pub fn new(config: MapConfig, pan_bounds: PanBounds) -> Self {
        Self {
            viewport: ViewportState::default(),
            drag: DragState::Idle,
            config,
            pan_bounds,
            animating: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn set_pan_bounds(&mut self, bounds: PanBounds, container: Size) {
        self.pan_bounds = bounds;
        self.commit(self.viewport, container);
    }

    fn commit(&mut self, vp: ViewportState, container: Size) {
        self.viewport = self.pan_bounds.apply(vp, container);
    }

    pub fn pointer_down(&mut self, at: Point) {
        self.animating = false;
        self.drag = DragState::Dragging { origin: at, start_pan: self.viewport.pan };
    }

    /// Returns whether the viewport moved.
    pub fn pointer_move(&mut self, at: Point, container: Size) -> bool {
        let DragState::Dragging { origin, start_pan } = self.drag else {
            return false;
        };
        let pan = Point::new(start_pan.x + (at.x - origin.x), start_pan.y + (at.y - origin.y));
        self.commit(ViewportState { zoom: self.viewport.zoom, pan }, container);
        true
    }

    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Wheel zoom anchored at the cursor; scrolling up zooms in.
    pub fn wheel(&mut self, cursor: Point, delta_y: f64, container: Size) {
        self.animating = false;
        let delta = -delta_y * self.config.wheel_sensitivity;
        self.commit(self.viewport.zoom_at(cursor, delta), container);
    }

    /// Button zoom anchored at the container centre.
    pub fn zoom_by(&mut self, delta: f64, container: Size) {
        self.commit(self.viewport.zoom_at(container.center(), delta), container);
    }

    pub fn zoom_in(&mut self, container: Size) {
        self.zoom_by(self.config.button_zoom_step, container);
    }

    pub fn zoom_out(&mut self, container: Size) {
        self.zoom_by(-self.config.button_zoom_step, container);
    }

    pub fn fit_lift(&mut self, path: &LiftPath, container: Size) {
        if let Some(bbox) = BoundingBox::from_points(path.points()) {
            self.fit(&bbox, self.config.lift_fit_multiplier, MIN_ZOOM, container);
        }
    }

    /// Fly to a hut, always close enough for its marker to be drawn.
    pub fn fit_hut(&mut self, at: Point, container: Size) {
        let bbox = BoundingBox::around(at, self.config.hut_fit_half_extent);
        self.fit(&bbox, self.config.hut_fit_multiplier, self.config.hut_marker_min_zoom, container);
    }

    fn fit(&mut self, bbox: &BoundingBox, multiplier: f64, min_zoom: f64, container: Size) {
        if container.is_empty() {
            log::debug!("skipping fit on an unmeasured container");
            return;
        }
        let mut vp = ViewportState::fit_to(bbox, container, self.config.fit_padding_px, multiplier);
        if vp.zoom < min_zoom {
            vp = ViewportState::centered_on(bbox.center(), container, min_zoom);
        }
        self.drag = DragState::Idle;
        self.animating = true;
        self.commit(vp, container);
    }

    pub fn finish_animation(&mut self) {
        self.animating = false;
    }

    pub fn reset(&mut self) {
        self.drag = DragState::Idle;
        self.animating = false;
        self.viewport.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::viewport::MAX_ZOOM;

    const CONTAINER: Size = Size::new(800.0, 600.0);

    #[test]
    fn drag_moves_pan_relative_to_start() {
        let mut c = MapController::default();
        c.viewport.pan = Point::new(10.0, 20.0);
        assert!(!c.pointer_move(Point::new(50.0, 50.0), CONTAINER));
        c.pointer_down(Point::new(100.0, 100.0));
        assert!(c.is_dragging());
        assert!(c.pointer_move(Point::new(130.0, 90.0), CONTAINER));
        assert_eq!(c.viewport.pan, Point::new(40.0, 10.0));
        assert!(c.pointer_move(Point::new(90.0, 100.0), CONTAINER));
        assert_eq!(c.viewport.pan, Point::new(0.0, 20.0));
        c.pointer_up();
        assert!(!c.is_dragging());
        assert!(!c.pointer_move(Point::new(500.0, 500.0), CONTAINER));
        assert_eq!(c.viewport.pan, Point::new(0.0, 20.0));
    }

    #[test]
    fn leaving_the_map_ends_the_drag() {
        let mut c = MapController::default();
        c.pointer_down(Point::ORIGIN);
        c.pointer_leave();
        assert_eq!(c.drag, DragState::Idle);
    }

    #[test]
    fn wheel_zooms_while_dragging() {
        let mut c = MapController::default();
        c.pointer_down(Point::new(10.0, 10.0));
        c.wheel(Point::new(400.0, 300.0), -250.0, CONTAINER);
        assert!((c.viewport.zoom - 1.5).abs() < 1e-12);
        assert!(c.is_dragging());
        c.wheel(Point::new(400.0, 300.0), 10_000.0, CONTAINER);
        assert_eq!(c.viewport.zoom, MIN_ZOOM);
    }

    #[test]
    fn fit_hut_reaches_marker_zoom() {
        let mut c = MapController::default();
        c.fit_hut(Point::new(800.0, 600.0), CONTAINER);
        assert_eq!(c.viewport.zoom, MAX_ZOOM);
        assert!(c.viewport.zoom >= c.config.hut_marker_min_zoom);
        assert!(c.animating);
        let on_screen = c.viewport.project(Point::new(800.0, 600.0), CONTAINER);
        assert_eq!(on_screen, CONTAINER.center());
        c.finish_animation();
        assert!(!c.animating);
    }

    #[test]
    fn fit_hut_on_narrow_screens_still_shows_marker() {
        let hut = Point::new(420.0, 310.0);
        for (w, h) in [(360.0, 270.0), (320.0, 240.0), (240.0, 180.0)] {
            let container = Size::new(w, h);
            let mut c = MapController::default();
            c.fit_hut(hut, container);
            assert!(
                c.viewport.zoom >= c.config.hut_marker_min_zoom,
                "{w}x{h} stopped at zoom {}",
                c.viewport.zoom
            );
            let on_screen = c.viewport.project(hut, container);
            assert!((on_screen.x - w / 2.0).abs() < 1e-9 && (on_screen.y - h / 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fit_waits_for_a_measured_container() {
        let mut c = MapController::default();
        c.fit_hut(Point::new(800.0, 600.0), Size::default());
        assert_eq!(c.viewport, ViewportState::default());
        assert!(!c.animating);
    }

    #[test]
    fn fit_lift_uses_path_extents() {
        let mut c = MapController::default();
        let path = LiftPath::new(vec![Point::new(200.0, 200.0), Point::new(1400.0, 1000.0)]).unwrap();
        c.fit_lift(&path, CONTAINER);
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&c.viewport.zoom));
        let mid = c.viewport.project(Point::new(800.0, 600.0), CONTAINER);
        assert!((mid.x - 400.0).abs() < 1e-9 && (mid.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn contain_map_limits_drag() {
        let mut c = MapController::new(MapConfig::default(), PanBounds::ContainMap);
        c.pointer_down(Point::ORIGIN);
        c.pointer_move(Point::new(300.0, 300.0), CONTAINER);
        assert_eq!(c.viewport.pan, Point::ORIGIN);
        c.zoom_in(CONTAINER);
        c.pointer_down(Point::ORIGIN);
        c.pointer_move(Point::new(-5000.0, 0.0), CONTAINER);
        assert_eq!(c.viewport.pan.x, -400.0);
    }

    #[test]
    fn reset_after_interaction() {
        let mut c = MapController::default();
        c.pointer_down(Point::new(5.0, 5.0));
        c.pointer_move(Point::new(105.0, -45.0), CONTAINER);
        c.wheel(Point::new(17.0, 290.0), -180.0, CONTAINER);
        c.zoom_in(CONTAINER);
        c.reset();
        assert_eq!(c.viewport, ViewportState { zoom: 1.0, pan: Point::new(0.0, 0.0) });
        assert!(!c.is_dragging());
    }

    #[test]
    fn reset_during_fly_to_stops_the_transition() {
        let mut c = MapController::default();
        c.fit_hut(Point::new(300.0, 900.0), CONTAINER);
        assert!(c.animating);
        c.reset();
        assert!(!c.animating);
        assert_eq!(c.viewport, ViewportState::default());
    }
}
