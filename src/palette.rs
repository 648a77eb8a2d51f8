//! Display attributes for every status and type variant.

use crate::model::{Difficulty, HutKind, HutStatus, LiftStatus, LiftType};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    pub theme: Theme,
}

impl Palette {
    pub fn new(dark_mode: bool) -> Self {
        Self { theme: if dark_mode { Theme::Dark } else { Theme::Light } }
    }

    fn dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Stroke and badge colour of a lift status.
    pub fn lift_status_color(&self, status: LiftStatus) -> &'static str {
        match (status, self.dark()) {
            (LiftStatus::Open, false) => "#0D9488",
            (LiftStatus::Open, true) => "#2DD4BF",
            (LiftStatus::Closed, false) => "#64748B",
            (LiftStatus::Closed, true) => "#94A3B8",
            (LiftStatus::Hold, false) => "#D97706",
            (LiftStatus::Hold, true) => "#FBBF24",
            (LiftStatus::Unknown, false) => "#000000",
            (LiftStatus::Unknown, true) => "#FFFFFF",
        }
    }

    pub fn lift_type_icon(&self, kind: LiftType) -> &'static str {
        match kind {
            LiftType::Express => "⚡",
            LiftType::Quad => "4️⃣",
            LiftType::ChairLift => "🪑",
            LiftType::MixedLift => "🚠",
            LiftType::Gondola => "🚡",
            LiftType::TBar => "⊤",
            LiftType::Platter => "🍽️",
            LiftType::DragLift => "↟",
            LiftType::MagicCarpet => "🔮",
            LiftType::Station => "🏠",
            LiftType::Goods => "📦",
            LiftType::RopeTow => "🔄",
            LiftType::Explosive => "💥",
            LiftType::Unknown => "🎿",
        }
    }

    pub fn difficulty_color(&self, difficulty: Difficulty) -> &'static str {
        match difficulty {
            Difficulty::Beginner => "#10B981",
            Difficulty::Intermediate => "#60A5FA",
            Difficulty::Advanced => "#000000",
            Difficulty::Unknown => "#64748B",
        }
    }

    pub fn hut_icon(&self, kind: HutKind) -> &'static str {
        match kind {
            HutKind::Restaurant => "🍴",
            HutKind::Cafe => "☕",
            HutKind::Bar => "🍺",
            HutKind::AlpineHut | HutKind::WildernessHut | HutKind::Unknown => "🏠",
        }
    }

    pub fn hut_status_color(&self, status: HutStatus) -> &'static str {
        match status {
            HutStatus::Open => "#22C55E",
            HutStatus::Closed | HutStatus::Unknown => "#94A3B8",
        }
    }

    pub fn hut_selected_color(&self) -> &'static str {
        "#EF4444"
    }

    /// Wait-time bar colour: green up to 5 min, yellow up to 10, then red.
    pub fn wait_time_color(&self, minutes: u32) -> &'static str {
        match minutes {
            0..=5 => "#22C55E",
            6..=10 => "#EAB308",
            _ => "#EF4444",
        }
    }

    /// Seat bar colour: green from 50 free seats, yellow from 10, else red.
    pub fn seats_color(&self, free_seats: u32) -> &'static str {
        match free_seats {
            50.. => "#22C55E",
            10..=49 => "#EAB308",
            _ => "#EF4444",
        }
    }

    pub fn page_background(&self) -> &'static str {
        if self.dark() { "#0f172a" } else { "#f1f5f9" }
    }

    pub fn panel_background(&self) -> &'static str {
        if self.dark() { "#1e293b" } else { "#ffffff" }
    }

    pub fn text_color(&self) -> &'static str {
        if self.dark() { "#f1f5f9" } else { "#0f172a" }
    }

    pub fn muted_text_color(&self) -> &'static str {
        if self.dark() { "#94a3b8" } else { "#475569" }
    }

    /// CSS filter applied to the raster map in dark mode.
    pub fn map_filter(&self) -> &'static str {
        if self.dark() { "invert(1) brightness(0.85) hue-rotate(180deg)" } else { "none" }
    }
}
