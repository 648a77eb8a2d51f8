use yew::prelude::*;

use crate::model::{Lift, LiftId, LiftStatus, sort_lifts};
use crate::palette::Palette;
use crate::state::Selection;
use crate::util::{bar_percent, format_wait};

/// Wait time that fills the whole bar.
const WAIT_BAR_MAX_MIN: u32 = 20;

#[derive(Properties, PartialEq, Clone)]
pub struct LiftListProps {
    pub lifts: Vec<Lift>,
    pub selection: Selection,
    pub palette: Palette,
    pub on_select: Callback<LiftId>,
}

#[function_component]
pub fn LiftList(props: &LiftListProps) -> Html {
    let mut lifts = props.lifts.clone();
    sort_lifts(&mut lifts);
    if lifts.is_empty() {
        return html! { <div style="text-align:center; padding:32px 0; opacity:0.6;">{"No lifts found for this resort"}</div> };
    }
    html! {<div style="display:grid; gap:12px;">
        { for lifts.iter().map(|lift| lift_row(lift, props)) }
    </div>}
}

fn lift_row(lift: &Lift, props: &LiftListProps) -> Html {
    let p = &props.palette;
    let selected = props.selection.is_lift(lift.id);
    let onclick = {
        let cb = props.on_select.clone();
        let id = lift.id;
        Callback::from(move |_| cb.emit(id))
    };
    let border = if selected { "#334155" } else { "transparent" };
    let wait_tip = match lift.status {
        LiftStatus::Closed => "Wait Time: Indefinitely".to_string(),
        _ => format!("Wait Time: {}", format_wait(lift.wait_time)),
    };
    let tooltip = format!(
        "{}\nType: {}\nStatus: {}\n{}\nDifficulty: {}{}",
        lift.name,
        lift.kind.label(),
        lift.status.label(),
        wait_tip,
        lift.difficulty.label(),
        if lift.description.is_empty() { String::new() } else { format!("\n{}", lift.description) },
    );
    html! {
        <div key={lift.id.to_string()} {onclick} title={tooltip}
            style={format!("padding:14px 16px; border-radius:10px; border:2px solid {}; background:{}; cursor:pointer; transition:all 300ms;", border, p.panel_background())}>
            <div style="display:flex; justify-content:space-between; align-items:flex-start;">
                <div style="display:flex; align-items:center; gap:12px;">
                    <span style="font-size:20px;">{ p.lift_type_icon(lift.kind) }</span>
                    <div style="display:flex; flex-direction:column;">
                        <span style="font-weight:500;">{ lift.name.clone() }</span>
                        <span style={format!("font-size:13px; color:{};", p.muted_text_color())}>{ lift.kind.label() }</span>
                    </div>
                </div>
                <div style="display:flex; gap:6px; align-items:center;">
                    <span title="Difficulty" style={format!("width:10px; height:10px; border-radius:50%; background:{};", p.difficulty_color(lift.difficulty))}></span>
                    <span style={format!("border-radius:999px; padding:2px 10px; font-size:12px; color:#fff; background:{};", p.lift_status_color(lift.status))}>{ lift.status.label() }</span>
                </div>
            </div>
            {
                if lift.status == LiftStatus::Open {
                    let wait = lift.wait_time.unwrap_or(0);
                    html! {
                        <div style="margin-top:8px;">
                            <div style={format!("display:flex; justify-content:space-between; font-size:12px; margin-bottom:4px; color:{};", p.muted_text_color())}>
                                <span>{"Wait Time"}</span>
                                <span>{ format_wait(lift.wait_time) }</span>
                            </div>
                            <div style="width:100%; height:6px; border-radius:999px; background:rgba(148,163,184,0.25);">
                                <div style={format!("height:100%; border-radius:999px; width:{}%; background:{}; transition:width 300ms;", bar_percent(wait, WAIT_BAR_MAX_MIN), p.wait_time_color(wait))}></div>
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
