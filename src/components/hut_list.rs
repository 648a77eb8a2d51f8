use yew::prelude::*;

use crate::model::{Hut, HutId, sort_huts, summarize_huts};
use crate::palette::Palette;
use crate::state::Selection;
use crate::util::bar_percent;

const SEAT_BAR_MAX: u32 = 100;

#[derive(Properties, PartialEq, Clone)]
pub struct HutListProps {
    pub huts: Vec<Hut>,
    pub selection: Selection,
    pub palette: Palette,
    pub on_select: Callback<HutId>,
}

#[function_component]
pub fn HutList(props: &HutListProps) -> Html {
    let summary = summarize_huts(&props.huts);
    let mut huts = props.huts.clone();
    sort_huts(&mut huts);
    let badge = "display:flex; align-items:center; gap:4px; border:1px solid rgba(148,163,184,0.5); border-radius:999px; padding:2px 10px; font-size:12px;";
    html! {<div style="display:flex; flex-direction:column; gap:16px;">
        <div style="display:flex; justify-content:space-between; align-items:center;">
            <h2 style="margin:0; font-size:22px; font-weight:600;">{"Mountain Huts"}</h2>
            <div style="display:flex; gap:8px;">
                <span style={badge}>{ format!("🏠 {} open", summary.open) }</span>
                <span style={badge}>{ format!("👥 {} seats available", summary.free_seats) }</span>
            </div>
        </div>
        <div style="display:grid; gap:12px;">
            { for huts.iter().map(|hut| hut_row(hut, props)) }
            {
                if huts.is_empty() {
                    html! { <div style="text-align:center; padding:32px 0; opacity:0.6;">{"No huts found for this resort"}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    </div>}
}

fn hut_row(hut: &Hut, props: &HutListProps) -> Html {
    let p = &props.palette;
    let selected = props.selection.is_hut(hut.id);
    let onclick = {
        let cb = props.on_select.clone();
        let id = hut.id;
        Callback::from(move |_| cb.emit(id))
    };
    let border = if selected { "#334155" } else { "transparent" };
    let mut tooltip = format!("{}\nType: {}\nElevation: {}m", hut.name, hut.kind.label(), hut.elevation);
    if hut.is_open() {
        tooltip.push_str(&format!("\nAvailable Seats: {}", hut.free_seats));
    }
    if !hut.description.is_empty() {
        tooltip.push_str(&format!("\n{}", hut.description));
    }
    let fill = bar_percent(hut.free_seats, SEAT_BAR_MAX);
    html! {
        <div key={hut.id.to_string()} {onclick} title={tooltip}
            style={format!("padding:14px 16px; border-radius:10px; border:2px solid {}; background:{}; cursor:pointer; transition:all 300ms;", border, p.panel_background())}>
            <div style="display:flex; justify-content:space-between; align-items:flex-start;">
                <div style="display:flex; align-items:center; gap:12px;">
                    <span style="font-size:20px;">{ p.hut_icon(hut.kind) }</span>
                    <span style="font-weight:500;">{ hut.name.clone() }</span>
                </div>
                {
                    if hut.is_open() {
                        html! { <span style="border-radius:999px; padding:2px 10px; font-size:12px; background:rgba(148,163,184,0.25);">{ format!("{} seats", hut.free_seats) }</span> }
                    } else {
                        html! { <span style={format!("border-radius:999px; padding:2px 10px; font-size:12px; color:#fff; background:{};", p.hut_status_color(hut.status))}>{"closed"}</span> }
                    }
                }
            </div>
            {
                if hut.is_open() {
                    html! {
                        <div style="margin-top:8px;">
                            <div style={format!("display:flex; justify-content:space-between; font-size:12px; margin-bottom:4px; color:{};", p.muted_text_color())}>
                                <span>{"Capacity"}</span>
                                <span>{ format!("{}%", fill.round()) }</span>
                            </div>
                            <div style="width:100%; height:6px; border-radius:999px; background:rgba(148,163,184,0.25);">
                                <div style={format!("height:100%; border-radius:999px; width:{}%; background:{};", fill, p.seats_color(hut.free_seats))}></div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
