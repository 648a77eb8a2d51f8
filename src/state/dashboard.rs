//! Page state of the dashboard, driven through `use_reducer`.

use std::rc::Rc;
use yew::Reducible;

use crate::api::MapImage;
use crate::error::FetchError;
use crate::model::{Hut, HutId, Lift, LiftId, Resort, ResortId};

use super::selection::{Selection, ZoomTarget};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub resorts: Vec<Resort>,
    pub selected_resort: Option<ResortId>,
    pub lifts: Vec<Lift>,
    pub huts: Vec<Hut>,
    pub map_image: Option<Rc<MapImage>>,
    pub selection: Selection,
    pub zoom_request: Option<ZoomTarget>,
    pub loading: bool,
    pub error: Option<String>,
    /// Bumped on every resort switch; responses carrying an older value are
    /// dropped.
    pub generation: u64,
}

/// Outcome of loading one resort, each part independently.
pub struct ResortData {
    pub lifts: Result<Vec<Lift>, FetchError>,
    pub huts: Result<Vec<Hut>, FetchError>,
    pub map: Result<MapImage, FetchError>,
}

pub enum DashboardAction {
    ResortsLoaded { resorts: Vec<Resort>, preferred: Option<ResortId> },
    ResortsFailed(FetchError),
    SelectResort(ResortId),
    ResortDataLoaded { generation: u64, data: ResortData },
    SelectLift(LiftId),
    SelectHut(HutId),
    ZoomComplete,
}

impl DashboardState {
    pub fn new() -> Self {
        Self { loading: true, ..Default::default() }
    }

    pub fn current_resort(&self) -> Option<&Resort> {
        let id = self.selected_resort?;
        self.resorts.iter().find(|r| r.id == id)
    }

    fn switch_to(&mut self, id: ResortId) {
        self.selected_resort = Some(id);
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.lifts.clear();
        self.huts.clear();
        self.selection.clear();
        self.zoom_request = None;
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use DashboardAction::*;
        let mut new = (*self).clone();
        match action {
            ResortsLoaded { resorts, preferred } => {
                let pick = preferred
                    .and_then(|id| resorts.iter().find(|r| r.id == id))
                    .or_else(|| resorts.first())
                    .map(|r| r.id);
                new.resorts = resorts;
                match pick {
                    Some(id) => new.switch_to(id),
                    None => {
                        new.loading = false;
                        new.error = Some("No resorts available".to_string());
                    }
                }
            }
            ResortsFailed(e) => {
                log::error!("failed to fetch resorts: {e}");
                new.loading = false;
                new.error = Some("Failed to load resorts".to_string());
            }
            SelectResort(id) => {
                if !new.resorts.iter().any(|r| r.id == id) {
                    log::error!("resort not found: {id}");
                    return self;
                }
                new.switch_to(id);
            }
            ResortDataLoaded { generation, data } => {
                if generation != new.generation {
                    log::debug!("dropping resort data of generation {generation}, now at {}", new.generation);
                    return self;
                }
                new.loading = false;
                let mut failed = false;
                match data.lifts {
                    Ok(lifts) => new.lifts = lifts,
                    Err(e) => {
                        log::error!("failed to fetch lifts: {e}");
                        new.lifts.clear();
                        failed = true;
                    }
                }
                match data.huts {
                    Ok(huts) => new.huts = huts,
                    Err(e) => {
                        log::error!("failed to fetch huts: {e}");
                        new.huts.clear();
                        failed = true;
                    }
                }
                match data.map {
                    Ok(map) => new.map_image = Some(Rc::new(map)),
                    Err(e) => {
                        log::error!("failed to fetch map image: {e}");
                        new.map_image = None;
                        failed = true;
                    }
                }
                new.error = failed.then(|| "Failed to load resort data".to_string());
            }
            SelectLift(id) => {
                new.selection.select_lift(id);
                new.zoom_request = Some(ZoomTarget::Lift(id));
            }
            SelectHut(id) => {
                new.selection.select_hut(id);
                new.zoom_request = Some(ZoomTarget::Hut(id));
            }
            ZoomComplete => new.zoom_request = None,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;

    fn resort(id: ResortId, name: &str) -> Resort {
        Resort { id, name: name.to_string(), ..Default::default() }
    }

    fn loaded(state: Rc<DashboardState>) -> Rc<DashboardState> {
        state.reduce(DashboardAction::ResortsLoaded {
            resorts: vec![resort(1, "Ischgl"), resort(2, "Lech")],
            preferred: Some(2),
        })
    }

    fn data(lift_ids: &[LiftId]) -> ResortData {
        ResortData {
            lifts: Ok(lift_ids.iter().map(|&id| Lift { id, ..Default::default() }).collect()),
            huts: Ok(vec![Hut {
                id: 1,
                name: "Alm".into(),
                kind: Default::default(),
                description: String::new(),
                free_seats: 4,
                status: Default::default(),
                coordinates: Point::ORIGIN,
                elevation: 0.0,
            }]),
            map: Err(FetchError::Network("offline".into())),
        }
    }

    #[test]
    fn preferred_resort_wins_and_unknown_falls_back() {
        let s = loaded(Rc::new(DashboardState::new()));
        assert_eq!(s.selected_resort, Some(2));
        assert_eq!(s.generation, 1);
        assert!(s.loading);

        let s = Rc::new(DashboardState::new()).reduce(DashboardAction::ResortsLoaded {
            resorts: vec![resort(5, "Sölden")],
            preferred: Some(99),
        });
        assert_eq!(s.selected_resort, Some(5));
    }

    #[test]
    fn empty_resort_list_is_an_error() {
        let s = Rc::new(DashboardState::new())
            .reduce(DashboardAction::ResortsLoaded { resorts: vec![], preferred: None });
        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some("No resorts available"));
    }

    #[test]
    fn stale_generation_is_ignored() {
        let s = loaded(Rc::new(DashboardState::new()));
        let first_gen = s.generation;
        let s = s.reduce(DashboardAction::SelectResort(1));
        assert_eq!(s.generation, first_gen + 1);

        let generation = s.generation;

        let s = s.reduce(DashboardAction::ResortDataLoaded { generation, data: data(&[10]) });
        let s = s.reduce(DashboardAction::ResortDataLoaded { generation: first_gen, data: data(&[20, 21]) });
        assert_eq!(s.lifts.iter().map(|l| l.id).collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn partial_failure_clears_only_failed_part() {
        let s = loaded(Rc::new(DashboardState::new()));
        let mut d = data(&[3]);
        d.lifts = Err(FetchError::Status { status: 500, message: "boom".into() });
        let generation = s.generation;
        let s = s.reduce(DashboardAction::ResortDataLoaded { generation, data: d });
        assert!(s.lifts.is_empty());
        assert_eq!(s.huts.len(), 1);
        assert!(!s.loading);
        assert_eq!(s.error.as_deref(), Some("Failed to load resort data"));
    }

    #[test]
    fn switching_resort_discards_previous_data() {
        let s = loaded(Rc::new(DashboardState::new()));
        let generation = s.generation;
        let s = s.reduce(DashboardAction::ResortDataLoaded { generation, data: data(&[1, 2]) });
        let s = s.reduce(DashboardAction::SelectLift(2));
        let s = s.reduce(DashboardAction::SelectResort(1));
        assert!(s.lifts.is_empty() && s.huts.is_empty());
        assert_eq!(s.selection, Selection::None);
        assert!(s.loading);
    }

    #[test]
    fn selection_requests_zoom_until_complete() {
        let s = Rc::new(DashboardState::default());
        let s = s.reduce(DashboardAction::SelectLift(7));
        assert_eq!(s.zoom_request, Some(ZoomTarget::Lift(7)));
        let s = s.reduce(DashboardAction::SelectHut(3));
        assert_eq!(s.selection, Selection::Hut(3));
        assert_eq!(s.zoom_request, Some(ZoomTarget::Hut(3)));
        let s = s.reduce(DashboardAction::ZoomComplete);
        assert_eq!(s.zoom_request, None);
        assert_eq!(s.selection, Selection::Hut(3));
    }

    #[test]
    fn unknown_resort_selection_is_ignored() {
        let s = loaded(Rc::new(DashboardState::new()));
        let gen_before = s.generation;
        let s = s.reduce(DashboardAction::SelectResort(42));
        assert_eq!(s.generation, gen_before);
        assert_eq!(s.selected_resort, Some(2));
    }
}
