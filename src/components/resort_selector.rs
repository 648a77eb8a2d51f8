use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::model::{Resort, ResortId};
use crate::palette::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct ResortSelectorProps {
    pub resorts: Vec<Resort>,
    pub selected: Option<ResortId>,
    pub palette: Palette,
    pub on_change: Callback<ResortId>,
}

#[function_component]
pub fn ResortSelector(props: &ResortSelectorProps) -> Html {
    let onchange = {
        let cb = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<ResortId>() {
                Ok(id) => cb.emit(id),
                Err(_) => log::error!("resort not found: {}", select.value()),
            }
        })
    };
    let p = &props.palette;
    html! {<div style="width:100%; max-width:28rem; margin:0 auto;">
        <label style={format!("display:flex; align-items:center; gap:8px; background:{}; color:{}; border:2px solid rgba(148,163,184,0.5); border-radius:10px; padding:0 14px; height:48px;", p.panel_background(), p.text_color())}>
            <span>{"📍"}</span>
            <select {onchange} style="flex:1; height:100%; border:none; background:transparent; color:inherit; font-size:15px; cursor:pointer;">
                {
                    if props.selected.is_none() {
                        html! { <option value="" selected=true disabled=true>{"Choose a resort"}</option> }
                    } else {
                        html! {}
                    }
                }
                { for props.resorts.iter().map(|r| html! {
                    <option key={r.id.to_string()} value={r.id.to_string()} selected={props.selected == Some(r.id)}>
                        { format!("{} · {}cm · {}", r.name, r.snow_depth, r.weather_conditions) }
                    </option>
                }) }
            </select>
        </label>
    </div>}
}
