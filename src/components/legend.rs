use yew::prelude::*;

use crate::model::LiftStatus;
use crate::palette::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub color: &'static str,
    pub label: &'static str,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <div style="display:flex; align-items:center; gap:8px;"> <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border-radius:50%;", props.color)}></span> <span style="text-transform:capitalize; font-size:14px;">{ props.label }</span> </div> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct StatusLegendProps {
    pub palette: Palette,
}

/// Colour key for the lift lines on the map.
#[function_component]
pub fn StatusLegend(props: &StatusLegendProps) -> Html {
    html! {<div style="display:flex; gap:24px; justify-content:center; flex-wrap:wrap; padding:8px 0;">
        { for LiftStatus::LEGEND.iter().map(|s| html! { <LegendRow color={props.palette.lift_status_color(*s)} label={s.label()} /> }) }
    </div>}
}
