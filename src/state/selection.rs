use crate::model::{HutId, LiftId};

/// At most one lift or one hut is highlighted at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Lift(LiftId),
    Hut(HutId),
}

impl Selection {
    pub fn select_lift(&mut self, id: LiftId) {
        *self = Selection::Lift(id);
    }

    pub fn select_hut(&mut self, id: HutId) {
        *self = Selection::Hut(id);
    }

    pub fn clear(&mut self) {
        *self = Selection::None;
    }

    pub fn lift(&self) -> Option<LiftId> {
        match *self {
            Selection::Lift(id) => Some(id),
            _ => None,
        }
    }

    pub fn hut(&self) -> Option<HutId> {
        match *self {
            Selection::Hut(id) => Some(id),
            _ => None,
        }
    }

    pub fn is_lift(&self, id: LiftId) -> bool {
        self.lift() == Some(id)
    }

    pub fn is_hut(&self, id: HutId) -> bool {
        self.hut() == Some(id)
    }
}

/// Element the map should fly to once, after a list click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomTarget {
    Lift(LiftId),
    Hut(HutId),
}
