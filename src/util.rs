// Formatting and browser helpers shared by the views.

use crate::model::ResortId;

/// Fraction of `max` as a CSS percentage, capped at 100%.
pub fn bar_percent(value: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(value) / f64::from(max) * 100.0).min(100.0)
}

pub fn format_wait(wait_time: Option<u32>) -> String {
    match wait_time {
        Some(m) => format!("{m} min"),
        None => "n/a".to_string(),
    }
}

/// Resort id from the `?resort=` query parameter of the page URL.
pub fn read_resort_param() -> Option<ResortId> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get("resort")?.parse().ok()
}

/// Mirror the selected resort in the page URL without adding history.
pub fn write_resort_param(id: ResortId) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let Ok(history) = win.history() else {
        return;
    };
    let url = format!("?resort={id}");
    if history
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
        .is_err()
    {
        log::warn!("could not update page URL");
    }
}

pub fn reload_page() {
    if let Some(win) = web_sys::window() {
        let _ = win.location().reload();
    }
}
