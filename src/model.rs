//! Data models for the resort dashboard.
//! Everything the backend sends is decoded into these types; the renderer and
//! the list views only ever see closed enums, never raw type/status strings.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

pub type ResortId = i64;
pub type LiftId = i64;
pub type HutId = i64;

/// A point in logical map space (the 1600x1200 base image).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A lift's physical route. Always holds at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct LiftPath(Vec<Point>);

impl LiftPath {
    pub fn new(points: Vec<Point>) -> Option<Self> {
        (points.len() >= 2).then_some(Self(points))
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

/// The backend stores geometry as JSON text in some tables and as arrays in
/// others, so both spellings are accepted.
#[derive(Deserialize)]
#[serde(untagged)]
enum Encoded<T> {
    Text(String),
    Value(T),
}

impl<T: for<'a> Deserialize<'a>> Encoded<T> {
    fn decode<E: de::Error>(self) -> Result<T, E> {
        match self {
            Encoded::Value(v) => Ok(v),
            Encoded::Text(s) => serde_json::from_str(&s).map_err(E::custom),
        }
    }
}

fn de_lift_path<'de, D>(d: D) -> Result<Option<LiftPath>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Encoded<Vec<Point>>> = Option::deserialize(d)?;
    match raw {
        None => Ok(None),
        Some(Encoded::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(enc) => Ok(LiftPath::new(enc.decode()?)),
    }
}

fn de_point<'de, D>(d: D) -> Result<Point, D::Error>
where
    D: Deserializer<'de>,
{
    Encoded::<Point>::deserialize(d)?.decode()
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resort {
    pub id: ResortId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub website_url: String,
    pub status: String,
    pub snow_depth: f64,
    pub weather_conditions: String,
    pub total_lifts: u32,
    pub open_lifts: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftStatus {
    Open,
    Closed,
    Hold,
    #[default]
    #[serde(other)]
    Unknown,
}

impl LiftStatus {
    pub const LEGEND: [LiftStatus; 3] = [LiftStatus::Open, LiftStatus::Closed, LiftStatus::Hold];

    pub fn label(self) -> &'static str {
        match self {
            LiftStatus::Open => "open",
            LiftStatus::Closed => "closed",
            LiftStatus::Hold => "hold",
            LiftStatus::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiftType {
    Express,
    Quad,
    ChairLift,
    MixedLift,
    Gondola,
    #[serde(alias = "t-bar")]
    TBar,
    Platter,
    #[serde(alias = "drag-lift")]
    DragLift,
    #[serde(alias = "magic-carpet")]
    MagicCarpet,
    /// Terminal building; has a map position but no route to draw.
    Station,
    Goods,
    RopeTow,
    Explosive,
    #[default]
    #[serde(other)]
    Unknown,
}

impl LiftType {
    pub fn label(self) -> &'static str {
        match self {
            LiftType::Express => "express",
            LiftType::Quad => "quad",
            LiftType::ChairLift => "chair lift",
            LiftType::MixedLift => "mixed lift",
            LiftType::Gondola => "gondola",
            LiftType::TBar => "t-bar",
            LiftType::Platter => "platter",
            LiftType::DragLift => "drag lift",
            LiftType::MagicCarpet => "magic carpet",
            LiftType::Station => "station",
            LiftType::Goods => "goods",
            LiftType::RopeTow => "rope tow",
            LiftType::Explosive => "explosive",
            LiftType::Unknown => "unknown",
        }
    }

    pub fn is_traversable(self) -> bool {
        !matches!(self, LiftType::Station)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Unknown => "unknown",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Lift {
    pub id: LiftId,
    pub name: String,
    pub status: LiftStatus,
    #[serde(rename = "type")]
    pub kind: LiftType,
    pub difficulty: Difficulty,
    #[serde(deserialize_with = "de_lift_path")]
    pub path: Option<LiftPath>,
    /// Minutes; absent when the backend has no estimate.
    #[serde(alias = "waitTime")]
    pub wait_time: Option<u32>,
    pub capacity: u32,
    #[serde(alias = "currentLoad")]
    pub current_load: u32,
    pub description: String,
    #[serde(alias = "imageUrl")]
    pub image_url: String,
    #[serde(alias = "webcamUrl")]
    pub webcam_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HutKind {
    Restaurant,
    Cafe,
    Bar,
    AlpineHut,
    WildernessHut,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HutKind {
    pub fn label(self) -> &'static str {
        match self {
            HutKind::Restaurant => "restaurant",
            HutKind::Cafe => "cafe",
            HutKind::Bar => "bar",
            HutKind::AlpineHut => "alpine hut",
            HutKind::WildernessHut => "wilderness hut",
            HutKind::Unknown => "hut",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HutStatus {
    Open,
    Closed,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hut {
    pub id: HutId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: HutKind,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub free_seats: u32,
    #[serde(default)]
    pub status: HutStatus,
    #[serde(deserialize_with = "de_point")]
    pub coordinates: Point,
    #[serde(default)]
    pub elevation: f64,
}

impl Hut {
    pub fn is_open(&self) -> bool {
        self.status == HutStatus::Open
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetectionResult {
    /// Base64 JPEG with bounding boxes drawn in.
    pub annotated_image: String,
    #[serde(default)]
    pub counts: BTreeMap<String, u32>,
}

#[derive(Clone, Debug, Serialize)]
pub struct DetectionRequest<'a> {
    pub base64: &'a str,
}

/// Closed lifts go last, then shortest wait first; lifts without an estimate
/// sort after those with one.
pub fn sort_lifts(lifts: &mut [Lift]) {
    lifts.sort_by(|a, b| {
        let closed_a = a.status == LiftStatus::Closed;
        let closed_b = b.status == LiftStatus::Closed;
        closed_a.cmp(&closed_b).then_with(|| match (a.wait_time, b.wait_time) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
}

/// Closed huts last; open huts by free seats descending; the rest by name.
pub fn sort_huts(huts: &mut [Hut]) {
    huts.sort_by(|a, b| {
        let closed_a = a.status == HutStatus::Closed;
        let closed_b = b.status == HutStatus::Closed;
        closed_a.cmp(&closed_b).then_with(|| {
            if a.is_open() && b.is_open() {
                b.free_seats.cmp(&a.free_seats)
            } else {
                a.name.cmp(&b.name)
            }
        })
    });
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HutSummary {
    pub open: usize,
    pub free_seats: u64,
}

pub fn summarize_huts(huts: &[Hut]) -> HutSummary {
    huts.iter()
        .filter(|h| h.is_open())
        .fold(HutSummary::default(), |acc, h| HutSummary {
            open: acc.open + 1,
            free_seats: acc.free_seats + u64::from(h.free_seats),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lift(id: LiftId, status: LiftStatus, wait: Option<u32>) -> Lift {
        Lift { id, status, wait_time: wait, ..Default::default() }
    }

    fn hut(id: HutId, name: &str, status: HutStatus, seats: u32) -> Hut {
        Hut {
            id,
            name: name.to_string(),
            kind: HutKind::Restaurant,
            description: String::new(),
            free_seats: seats,
            status,
            coordinates: Point::ORIGIN,
            elevation: 0.0,
        }
    }

    #[test]
    fn lift_path_accepts_array_and_string() {
        let a: Lift = serde_json::from_str(r#"{"id":1,"path":[[0,0],[10,20]]}"#).unwrap();
        let b: Lift = serde_json::from_str(r#"{"id":2,"path":"[[0,0],[10,20]]"}"#).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.path.unwrap().points()[1], Point::new(10.0, 20.0));
    }

    #[test]
    fn short_or_missing_path_is_not_drawable() {
        let one: Lift = serde_json::from_str(r#"{"id":1,"path":[[5,5]]}"#).unwrap();
        let none: Lift = serde_json::from_str(r#"{"id":2}"#).unwrap();
        let blank: Lift = serde_json::from_str(r#"{"id":3,"path":""}"#).unwrap();
        assert!(one.path.is_none());
        assert!(none.path.is_none());
        assert!(blank.path.is_none());
    }

    #[test]
    fn lift_type_aliases_and_unknowns() {
        let l: Lift = serde_json::from_str(r#"{"id":1,"type":"magic-carpet","status":"hold"}"#).unwrap();
        assert_eq!(l.kind, LiftType::MagicCarpet);
        assert_eq!(l.status, LiftStatus::Hold);
        let l: Lift = serde_json::from_str(r#"{"id":1,"type":"funicular","status":"??"}"#).unwrap();
        assert_eq!(l.kind, LiftType::Unknown);
        assert_eq!(l.status, LiftStatus::Unknown);
        let l: Lift = serde_json::from_str(r#"{"id":1,"type":"station"}"#).unwrap();
        assert!(!l.kind.is_traversable());
    }

    #[test]
    fn hut_coordinates_from_string() {
        let h: Hut = serde_json::from_str(
            r#"{"id":7,"name":"Alm","type":"alpine_hut","status":"open","free_seats":12,"coordinates":"[800, 600]"}"#,
        )
        .unwrap();
        assert_eq!(h.coordinates, Point::new(800.0, 600.0));
        assert_eq!(h.kind, HutKind::AlpineHut);
        assert!(h.is_open());
    }

    #[test]
    fn hut_without_coordinates_is_rejected() {
        assert!(serde_json::from_str::<Hut>(r#"{"id":7}"#).is_err());
    }

    #[test]
    fn lifts_sort_closed_last_then_by_wait() {
        let mut lifts = vec![
            lift(1, LiftStatus::Closed, Some(0)),
            lift(2, LiftStatus::Open, None),
            lift(3, LiftStatus::Open, Some(12)),
            lift(4, LiftStatus::Hold, Some(3)),
        ];
        sort_lifts(&mut lifts);
        let ids: Vec<_> = lifts.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn huts_sort_and_summary() {
        let mut huts = vec![
            hut(1, "Zirbe", HutStatus::Closed, 0),
            hut(2, "Adler", HutStatus::Open, 10),
            hut(3, "Berg", HutStatus::Open, 80),
            hut(4, "Alpen", HutStatus::Closed, 0),
        ];
        let summary = summarize_huts(&huts);
        assert_eq!(summary, HutSummary { open: 2, free_seats: 90 });
        sort_huts(&mut huts);
        let ids: Vec<_> = huts.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn detection_result_decodes() {
        let r: DetectionResult =
            serde_json::from_str(r#"{"annotated_image":"abc","counts":{"person":3,"skis":2}}"#).unwrap();
        assert_eq!(r.counts.get("person"), Some(&3));
        let body = serde_json::to_string(&DetectionRequest { base64: "xyz" }).unwrap();
        assert_eq!(body, r#"{"base64":"xyz"}"#);
    }
}
