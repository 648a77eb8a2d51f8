//! Zoom/pan model of the map viewer.
//!
//! Logical coordinates live in the fixed base-map space. The map layer is
//! first stretched to the container (`container / BASE_SIZE`), then scaled by
//! `zoom` around its top-left corner and shifted by `pan`, so
//! `screen = logical * (container / BASE_SIZE) * zoom + pan`.

use serde::{Deserialize, Serialize};

use crate::model::Point;

pub const BASE_SIZE: Size = Size::new(1600.0, 1200.0);
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 4.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Per-axis factor from logical units to unzoomed container pixels.
pub fn container_scale(container: Size) -> (f64, f64) {
    (container.width / BASE_SIZE.width, container.height / BASE_SIZE.height)
}

/// Logical point to the unzoomed, unpanned container pixel (layer space).
pub fn to_layer(point: Point, container: Size) -> Point {
    let (sx, sy) = container_scale(container);
    Point::new(point.x * sx, point.y * sy)
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() { MIN_ZOOM } else { zoom.clamp(MIN_ZOOM, MAX_ZOOM) }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| Self {
            min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        }))
    }

    pub fn around(center: Point, half_extent: f64) -> Self {
        Self {
            min: Point::new(center.x - half_extent, center.y - half_extent),
            max: Point::new(center.x + half_extent, center.y + half_extent),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub zoom: f64,
    /// Screen pixels.
    pub pan: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { zoom: MIN_ZOOM, pan: Point::ORIGIN }
    }
}

impl ViewportState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn project(&self, point: Point, container: Size) -> Point {
        let layer = to_layer(point, container);
        Point::new(layer.x * self.zoom + self.pan.x, layer.y * self.zoom + self.pan.y)
    }

    /// Inverse of [`project`](Self::project). Undefined for an empty container.
    pub fn invert(&self, screen: Point, container: Size) -> Point {
        let (sx, sy) = container_scale(container);
        Point::new(
            (screen.x - self.pan.x) / (sx * self.zoom),
            (screen.y - self.pan.y) / (sy * self.zoom),
        )
    }

    /// Change zoom by `delta` keeping the logical point under `cursor` fixed.
    pub fn zoom_at(&self, cursor: Point, delta: f64) -> Self {
        let zoom = clamp_zoom(self.zoom + delta);
        let ratio = zoom / self.zoom;
        Self {
            zoom,
            pan: Point::new(
                cursor.x - (cursor.x - self.pan.x) * ratio,
                cursor.y - (cursor.y - self.pan.y) * ratio,
            ),
        }
    }

    /// Center `bbox` and scale it to fill the container minus `padding` pixels
    /// on each side.
    pub fn fit_to(bbox: &BoundingBox, container: Size, padding: f64, multiplier: f64) -> Self {
        let (sx, sy) = container_scale(container);
        let w = bbox.width() * sx + 2.0 * padding;
        let h = bbox.height() * sy + 2.0 * padding;
        let fit = (container.width / w).min(container.height / h) * multiplier;
        let zoom = if fit.is_finite() { clamp_zoom(fit) } else { MAX_ZOOM };
        Self::centered_on(bbox.center(), container, zoom)
    }

    /// Viewport at `zoom` with the logical `point` in the middle of the container.
    pub fn centered_on(point: Point, container: Size, zoom: f64) -> Self {
        let zoom = clamp_zoom(zoom);
        let target = to_layer(point, container);
        let mid = container.center();
        Self { zoom, pan: Point::new(mid.x - target.x * zoom, mid.y - target.y * zoom) }
    }
}

/// How far the map may be dragged away from the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanBounds {
    #[default]
    Unbounded,
    /// The zoomed layer always covers the whole container.
    ContainMap,
}

impl PanBounds {
    pub fn apply(self, vp: ViewportState, container: Size) -> ViewportState {
        match self {
            PanBounds::Unbounded => vp,
            PanBounds::ContainMap => {
                let min_x = container.width * (1.0 - vp.zoom);
                let min_y = container.height * (1.0 - vp.zoom);
                ViewportState {
                    zoom: vp.zoom,
                    pan: Point::new(vp.pan.x.clamp(min_x, 0.0), vp.pan.y.clamp(min_y, 0.0)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPS && (actual.y - expected.y).abs() < EPS,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn project_then_invert_roundtrips() {
        let container = Size::new(937.0, 611.0);
        for zoom in [1.0, 1.37, 2.5, 4.0] {
            for pan in [Point::ORIGIN, Point::new(-320.5, 88.0), Point::new(1e4, -7.25)] {
                let vp = ViewportState { zoom, pan };
                for p in [Point::ORIGIN, Point::new(1600.0, 1200.0), Point::new(433.3, 912.1)] {
                    assert_point(vp.invert(vp.project(p, container), container), p);
                }
            }
        }
    }

    #[test]
    fn half_size_container_scales_path_endpoints() {
        let container = Size::new(800.0, 600.0);
        assert_eq!(container_scale(container), (0.5, 0.5));
        let vp = ViewportState::default();
        assert_point(vp.project(Point::ORIGIN, container), Point::ORIGIN);
        // The far corner of the map lands on the far corner of the container.
        assert_point(vp.project(Point::new(1600.0, 1200.0), container), Point::new(800.0, 600.0));
        assert_point(vp.project(Point::new(800.0, 600.0), container), Point::new(400.0, 300.0));
    }

    #[test]
    fn zoom_at_keeps_cursor_anchored() {
        let container = Size::new(800.0, 600.0);
        let before = ViewportState::default();
        let cursor = Point::new(400.0, 300.0);
        let after = before.zoom_at(cursor, 0.5);
        assert_eq!(after.zoom, 1.5);
        let logical = before.invert(cursor, container);
        assert_point(after.project(logical, container), cursor);
    }

    #[test]
    fn zoom_at_anchor_holds_when_clamped() {
        let container = Size::new(1024.0, 768.0);
        let before = ViewportState { zoom: 3.8, pan: Point::new(-900.0, -400.0) };
        let cursor = Point::new(130.0, 707.0);
        let after = before.zoom_at(cursor, 2.0);
        assert_eq!(after.zoom, MAX_ZOOM);
        assert_point(after.project(before.invert(cursor, container), container), cursor);

        let out = after.zoom_at(cursor, -10.0);
        assert_eq!(out.zoom, MIN_ZOOM);
        assert_point(out.project(after.invert(cursor, container), container), cursor);
    }

    #[test]
    fn fit_to_stays_in_zoom_range() {
        let container = Size::new(800.0, 600.0);
        let boxes = [
            BoundingBox::around(Point::new(700.0, 500.0), 0.0),
            BoundingBox::around(Point::new(700.0, 500.0), 40.0),
            BoundingBox { min: Point::new(-5000.0, -5000.0), max: Point::new(9000.0, 9000.0) },
            BoundingBox { min: Point::new(10.0, 10.0), max: Point::new(10.0, 900.0) },
        ];
        for b in &boxes {
            for padding in [0.0, 50.0] {
                let vp = ViewportState::fit_to(b, container, padding, 0.9);
                assert!((MIN_ZOOM..=MAX_ZOOM).contains(&vp.zoom), "{b:?} -> {}", vp.zoom);
                assert!(vp.pan.x.is_finite() && vp.pan.y.is_finite());
            }
        }
    }

    #[test]
    fn fit_to_centers_the_box() {
        let container = Size::new(800.0, 600.0);
        let b = BoundingBox { min: Point::new(600.0, 400.0), max: Point::new(1000.0, 800.0) };
        let vp = ViewportState::fit_to(&b, container, 0.0, 1.0);
        // 400x400 logical is 200x200 px, limited by height: 600 / 200.
        assert_eq!(vp.zoom, 3.0);
        assert_point(vp.project(b.center(), container), container.center());
    }

    #[test]
    fn centered_on_clamps_zoom() {
        let container = Size::new(360.0, 270.0);
        let target = Point::new(1500.0, 100.0);
        let vp = ViewportState::centered_on(target, container, 9.0);
        assert_eq!(vp.zoom, MAX_ZOOM);
        assert_point(vp.project(target, container), container.center());
        assert!(Size::new(0.0, 270.0).is_empty());
        assert!(!container.is_empty());
    }

    #[test]
    fn reset_restores_identity() {
        let container = Size::new(800.0, 600.0);
        let mut vp = ViewportState::fit_to(&BoundingBox::around(Point::new(5.0, 5.0), 1.0), container, 50.0, 1.0)
            .zoom_at(Point::new(13.0, 400.0), -1.7)
            .zoom_at(Point::new(700.0, 2.0), 0.4);
        vp.pan.x += 321.0;
        vp.reset();
        assert_eq!(vp, ViewportState { zoom: 1.0, pan: Point::new(0.0, 0.0) });
    }

    #[test]
    fn bounding_box_of_points() {
        let pts = [Point::new(3.0, 9.0), Point::new(-1.0, 4.0), Point::new(7.0, 5.0)];
        let b = BoundingBox::from_points(&pts).unwrap();
        assert_eq!(b.min, Point::new(-1.0, 4.0));
        assert_eq!(b.max, Point::new(7.0, 9.0));
        assert!(BoundingBox::from_points(&[] as &[Point]).is_none());
    }

    #[test]
    fn contain_map_clamps_pan() {
        let container = Size::new(800.0, 600.0);
        let vp = ViewportState { zoom: 2.0, pan: Point::new(100.0, -900.0) };
        let clamped = PanBounds::ContainMap.apply(vp, container);
        assert_eq!(clamped.pan, Point::new(0.0, -600.0));
        assert_eq!(PanBounds::Unbounded.apply(vp, container), vp);
    }
}
