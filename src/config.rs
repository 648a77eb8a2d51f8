use serde::{Deserialize, Serialize};

use crate::state::viewport::PanBounds;

/// Tunables of the map viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapConfig {
    pub hut_marker_min_zoom: f64,
    pub settle_delay_ms: u32,
    /// Screen pixels kept free on each side when fitting an element.
    pub fit_padding_px: f64,
    pub lift_fit_multiplier: f64,
    pub hut_fit_multiplier: f64,
    /// Half the side of the logical box fitted around a hut.
    pub hut_fit_half_extent: f64,
    /// Zoom change per pixel of wheel delta.
    pub wheel_sensitivity: f64,
    pub button_zoom_step: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            hut_marker_min_zoom: 4.0,
            settle_delay_ms: 300,
            fit_padding_px: 50.0,
            lift_fit_multiplier: 0.9,
            hut_fit_multiplier: 1.0,
            hut_fit_half_extent: 40.0,
            wheel_sensitivity: 0.002,
            button_zoom_step: 0.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base = option_env!("SLOPEFLOW_API_BASE").unwrap_or("/api");
        Self { base_url: base.trim_end_matches('/').to_string() }
    }
}

impl ApiConfig {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

const SETTINGS_KEY: &str = "slopeflow_settings";

/// User preferences kept in local storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub dark_mode: bool,
    pub pan_bounds: PanBounds,
}

impl Settings {
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(SETTINGS_KEY).ok().flatten());
        match raw {
            Some(raw) => Self::from_json(&raw),
            None => Self::default(),
        }
    }

    pub fn save(&self) {
        let Some(store) = web_sys::window().and_then(|win| win.local_storage().ok().flatten()) else {
            return;
        };
        match serde_json::to_string(self) {
            Ok(s) => {
                if store.set_item(SETTINGS_KEY, &s).is_err() {
                    log::warn!("could not persist settings");
                }
            }
            Err(e) => log::warn!("could not encode settings: {e}"),
        }
    }

    fn from_json(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            log::warn!("ignoring stored settings: {e}");
            Self::default()
        })
    }
}
