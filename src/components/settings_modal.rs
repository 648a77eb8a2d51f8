use yew::prelude::*;

use crate::config::Settings;
use crate::state::PanBounds;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_dark_cb = {
        let cb = props.on_change.clone();
        let current = props.settings;
        Callback::from(move |_| cb.emit(Settings { dark_mode: !current.dark_mode, ..current }))
    };
    let toggle_bounds_cb = {
        let cb = props.on_change.clone();
        let current = props.settings;
        Callback::from(move |_| {
            let pan_bounds = match current.pan_bounds {
                PanBounds::Unbounded => PanBounds::ContainMap,
                PanBounds::ContainMap => PanBounds::Unbounded,
            };
            cb.emit(Settings { pan_bounds, ..current })
        })
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#1e293b; color:#f1f5f9; border:1px solid #334155; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <div style="display:flex; flex-direction:column; gap:10px;">
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.dark_mode} onclick={toggle_dark_cb} />
                    <span>{"Dark Mode"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="checkbox" checked={props.settings.pan_bounds == PanBounds::ContainMap} onclick={toggle_bounds_cb} />
                    <span>{"Keep Map Inside Frame"}</span>
                </label>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{"With the frame lock off the map can be dragged freely; use Reset to bring it back."}</div>
            <div style="display:flex; justify-content:flex-end;">
                <button onclick={close_cb}>{"Done"}</button>
            </div>
        </div>
    </div>}
}
