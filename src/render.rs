//! Overlay drawing for the map view.
//!
//! The canvas lives inside the CSS-scaled map layer, so strokes are placed in
//! layer space (`logical * container / BASE_SIZE`) and only their widths react
//! to zoom. Hut markers are DOM nodes in the same layer, counter-scaled so
//! they keep their on-screen size.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::MapConfig;
use crate::model::{Hut, HutId, Lift, LiftId, Point};
use crate::palette::Palette;
use crate::state::selection::Selection;
use crate::state::viewport::{Size, to_layer};

const LINE_WIDTH: f64 = 2.0;
const LINE_ALPHA: f64 = 0.7;
const SELECTED_LINE_WIDTH: f64 = 3.0;
const GLOW_WIDTH: f64 = 9.0;
const GLOW_ALPHA: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub width: f64,
    pub alpha: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LiftStroke {
    pub lift_id: LiftId,
    /// Layer-space pixels.
    pub points: Vec<Point>,
    pub color: &'static str,
    pub width: f64,
    pub alpha: f64,
    pub glow: Option<Glow>,
}

/// Strokes for every drawable lift, selected lift last so it paints on top.
pub fn plan_lift_strokes(
    lifts: &[Lift],
    selection: Selection,
    container: Size,
    zoom: f64,
    palette: &Palette,
) -> Vec<LiftStroke> {
    let thin = 1.0 / zoom.max(f64::EPSILON).sqrt();
    let mut strokes: Vec<LiftStroke> = lifts
        .iter()
        .filter(|l| l.kind.is_traversable())
        .filter_map(|lift| {
            let path = lift.path.as_ref()?;
            let selected = selection.is_lift(lift.id);
            Some(LiftStroke {
                lift_id: lift.id,
                points: path.points().iter().map(|p| to_layer(*p, container)).collect(),
                color: palette.lift_status_color(lift.status),
                width: (if selected { SELECTED_LINE_WIDTH } else { LINE_WIDTH }) * thin,
                alpha: if selected { 1.0 } else { LINE_ALPHA },
                glow: selected.then(|| Glow { width: GLOW_WIDTH * thin, alpha: GLOW_ALPHA }),
            })
        })
        .collect();
    strokes.sort_by_key(|s| s.glow.is_some());
    strokes
}

#[derive(Clone, Debug, PartialEq)]
pub struct HutMarker {
    pub hut_id: HutId,
    /// Layer-space pixels of the marker centre.
    pub left: f64,
    pub top: f64,
    /// CSS scale cancelling the layer zoom.
    pub scale: f64,
    pub icon: &'static str,
    pub color: &'static str,
    pub selected: bool,
    pub seats_dot: bool,
}

/// Markers are only shown once the map is zoomed all the way in.
pub fn plan_hut_markers(
    huts: &[Hut],
    selection: Selection,
    container: Size,
    zoom: f64,
    config: &MapConfig,
    palette: &Palette,
) -> Vec<HutMarker> {
    if zoom < config.hut_marker_min_zoom {
        return Vec::new();
    }
    huts.iter()
        .map(|hut| {
            let at = to_layer(hut.coordinates, container);
            let selected = selection.is_hut(hut.id);
            HutMarker {
                hut_id: hut.id,
                left: at.x,
                top: at.y,
                scale: 1.0 / zoom,
                icon: palette.hut_icon(hut.kind),
                color: if selected { palette.hut_selected_color() } else { palette.hut_status_color(hut.status) },
                selected,
                seats_dot: hut.is_open() && hut.free_seats > 0,
            }
        })
        .collect()
}

/// Resize `canvas` to the container and paint `strokes` onto a cleared,
/// transparent surface.
pub fn draw_overlay(canvas: &HtmlCanvasElement, container: Size, strokes: &[LiftStroke]) {
    canvas.set_width(container.width.max(0.0) as u32);
    canvas.set_height(container.height.max(0.0) as u32);
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    ctx.clear_rect(0.0, 0.0, container.width, container.height);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    for stroke in strokes {
        ctx.set_stroke_style_str(stroke.color);
        if let Some(glow) = &stroke.glow {
            ctx.set_global_alpha(glow.alpha);
            trace(&ctx, &stroke.points, glow.width);
        }
        ctx.set_global_alpha(stroke.alpha);
        trace(&ctx, &stroke.points, stroke.width);
    }
    ctx.set_global_alpha(1.0);
}

fn trace(ctx: &CanvasRenderingContext2d, points: &[Point], width: f64) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.set_line_width(width);
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HutKind, HutStatus, LiftPath, LiftStatus, LiftType};

    fn lift(id: LiftId, kind: LiftType, pts: &[[f64; 2]]) -> Lift {
        Lift {
            id,
            kind,
            status: LiftStatus::Open,
            path: LiftPath::new(pts.iter().copied().map(Point::from).collect()),
            ..Default::default()
        }
    }

    fn hut(id: HutId, x: f64, y: f64, seats: u32) -> Hut {
        Hut {
            id,
            name: format!("hut {id}"),
            kind: HutKind::Cafe,
            description: String::new(),
            free_seats: seats,
            status: HutStatus::Open,
            coordinates: Point::new(x, y),
            elevation: 2000.0,
        }
    }

    #[test]
    fn diagonal_lift_on_half_size_container() {
        let lifts = [lift(1, LiftType::Gondola, &[[0.0, 0.0], [1600.0, 1200.0]])];
        let strokes =
            plan_lift_strokes(&lifts, Selection::None, Size::new(800.0, 600.0), 1.0, &Palette::default());
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].points, vec![Point::new(0.0, 0.0), Point::new(800.0, 600.0)]);
        assert_eq!(strokes[0].width, LINE_WIDTH);
        assert_eq!(strokes[0].alpha, LINE_ALPHA);
    }

    #[test]
    fn stations_and_pathless_lifts_are_skipped() {
        let lifts = [
            lift(1, LiftType::Station, &[[0.0, 0.0], [10.0, 10.0]]),
            lift(2, LiftType::Quad, &[[5.0, 5.0]]),
            lift(3, LiftType::TBar, &[[0.0, 0.0], [10.0, 10.0]]),
        ];
        let strokes =
            plan_lift_strokes(&lifts, Selection::None, Size::new(1600.0, 1200.0), 1.0, &Palette::default());
        let ids: Vec<_> = strokes.iter().map(|s| s.lift_id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn selected_lift_glows_and_draws_last() {
        let lifts = [
            lift(1, LiftType::Quad, &[[0.0, 0.0], [10.0, 10.0]]),
            lift(2, LiftType::Quad, &[[0.0, 0.0], [20.0, 20.0]]),
            lift(3, LiftType::Quad, &[[0.0, 0.0], [30.0, 30.0]]),
        ];
        let strokes =
            plan_lift_strokes(&lifts, Selection::Lift(1), Size::new(1600.0, 1200.0), 4.0, &Palette::default());
        let last = strokes.last().unwrap();
        assert_eq!(last.lift_id, 1);
        assert_eq!(last.alpha, 1.0);
        assert_eq!(last.width, SELECTED_LINE_WIDTH / 2.0);
        assert_eq!(last.glow, Some(Glow { width: GLOW_WIDTH / 2.0, alpha: GLOW_ALPHA }));
        assert!(strokes[..2].iter().all(|s| s.glow.is_none() && s.width == LINE_WIDTH / 2.0));
    }

    #[test]
    fn hut_markers_only_at_full_zoom() {
        let huts = [hut(1, 800.0, 600.0, 3), hut(2, 100.0, 100.0, 0)];
        let cfg = MapConfig::default();
        let palette = Palette::default();
        let container = Size::new(800.0, 600.0);
        assert!(plan_hut_markers(&huts, Selection::None, container, 3.9, &cfg, &palette).is_empty());

        let markers = plan_hut_markers(&huts, Selection::Hut(2), container, 4.0, &cfg, &palette);
        assert_eq!(markers.len(), 2);
        assert_eq!((markers[0].left, markers[0].top), (400.0, 300.0));
        assert_eq!(markers[0].scale, 0.25);
        assert!(markers[0].seats_dot);
        assert!(!markers[1].seats_dot);
        assert!(markers[1].selected);
        assert_eq!(markers[1].color, palette.hut_selected_color());
    }
}
