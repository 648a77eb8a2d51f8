use yew::prelude::*;

use crate::config::Settings;
use crate::model::Resort;
use crate::palette::Palette;
use crate::state::{DashboardAction, DashboardState};
use crate::util::reload_page;

use super::hut_list::HutList;
use super::legend::StatusLegend;
use super::lift_list::LiftList;
use super::map_view::MapView;
use super::resort_selector::ResortSelector;
use super::status_screens::{ErrorScreen, LoadingScreen};

#[derive(PartialEq, Clone, Copy)]
enum Tab {
    Lifts,
    Huts,
}

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardViewProps {
    pub state: UseReducerHandle<DashboardState>,
    pub settings: Settings,
    pub on_open_settings: Callback<()>,
    pub on_open_camera: Callback<()>,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let tab = use_state(|| Tab::Lifts);
    let palette = Palette::new(props.settings.dark_mode);
    let state = &props.state;

    if state.loading {
        return html! { <LoadingScreen {palette} /> };
    }
    if let Some(message) = &state.error {
        let on_retry = Callback::from(|_| reload_page());
        return html! { <ErrorScreen message={message.clone()} {palette} {on_retry} /> };
    }

    let on_resort = {
        let state = state.clone();
        Callback::from(move |id| state.dispatch(DashboardAction::SelectResort(id)))
    };
    let on_lift = {
        let state = state.clone();
        Callback::from(move |id| state.dispatch(DashboardAction::SelectLift(id)))
    };
    let on_hut = {
        let state = state.clone();
        Callback::from(move |id| state.dispatch(DashboardAction::SelectHut(id)))
    };
    let settings_cb = {
        let cb = props.on_open_settings.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let camera_cb = {
        let cb = props.on_open_camera.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let tab_button = |target: Tab, label: &'static str| {
        let active = *tab == target;
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_| tab.set(target))
        };
        html! {
            <button {onclick} style={format!(
                "flex:1; padding:8px 12px; border:none; border-bottom:2px solid {}; background:transparent; color:{}; font-weight:{}; cursor:pointer;",
                if active { "#0D9488" } else { "transparent" },
                if active { palette.text_color() } else { palette.muted_text_color() },
                if active { 600 } else { 400 },
            )}>{ label }</button>
        }
    };

    html! {
        <div style={format!("min-height:100vh; background:{}; color:{}; font-family:sans-serif;", palette.page_background(), palette.text_color())}>
            <div style="max-width:1100px; margin:0 auto; padding:24px 16px; display:flex; flex-direction:column; gap:16px;">
                <div style="display:flex; justify-content:space-between; align-items:flex-start;">
                    <div>
                        <h1 style="margin:0; font-size:28px;">{"SlopeFlow"}</h1>
                        <p style={format!("margin:4px 0 0 0; color:{};", palette.muted_text_color())}>{"Find unused slopes"}</p>
                    </div>
                    <button onclick={settings_cb} title="Settings" style="padding:6px 10px; border-radius:8px; cursor:pointer;">{"⚙"}</button>
                </div>
                <ResortSelector
                    resorts={state.resorts.clone()}
                    selected={state.selected_resort}
                    {palette}
                    on_change={on_resort}
                />
                {
                    match state.current_resort() {
                        Some(resort) => resort_header(resort, &palette),
                        None => html! {},
                    }
                }
                <div style="display:flex; flex-wrap:wrap; gap:16px;">
                    <div style="flex:2 1 480px; display:flex; flex-direction:column; gap:8px;">
                        <MapView state={state.clone()} settings={props.settings} />
                        <StatusLegend {palette} />
                    </div>
                    <div style={format!("flex:1 1 300px; background:{}; border-radius:12px; padding:12px; display:flex; flex-direction:column; gap:8px;", palette.panel_background())}>
                        <div style="display:flex;">
                            { tab_button(Tab::Lifts, "Lifts") }
                            { tab_button(Tab::Huts, "Mountain Huts") }
                        </div>
                        <div style="max-height:560px; overflow-y:auto;">
                        {
                            match *tab {
                                Tab::Lifts => html! {
                                    <LiftList lifts={state.lifts.clone()} selection={state.selection} {palette} on_select={on_lift} />
                                },
                                Tab::Huts => html! {
                                    <HutList huts={state.huts.clone()} selection={state.selection} {palette} on_select={on_hut} />
                                },
                            }
                        }
                        </div>
                    </div>
                </div>
            </div>
            <button
                onclick={camera_cb}
                title="Detect people"
                style="position:fixed; right:24px; bottom:24px; width:56px; height:56px; border-radius:50%; border:none; background:#0D9488; color:#fff; font-size:24px; box-shadow:0 6px 16px rgba(0,0,0,0.3); cursor:pointer;"
            >{"📷"}</button>
        </div>
    }
}

fn resort_header(resort: &Resort, palette: &Palette) -> Html {
    let badge = format!(
        "padding:2px 8px; border-radius:999px; font-size:12px; background:{}; color:{};",
        palette.panel_background(),
        palette.text_color()
    );
    html! {
        <div style="display:flex; flex-wrap:wrap; align-items:baseline; gap:8px 16px;">
            <h2 style="margin:0; font-size:22px;">{ resort.name.clone() }</h2>
            <span style={format!("color:{};", palette.muted_text_color())}>{ resort.location.clone() }</span>
            <span style={badge.clone()}>{ format!("❄ {} cm", resort.snow_depth) }</span>
            {
                if resort.weather_conditions.is_empty() {
                    html! {}
                } else {
                    html! { <span style={badge.clone()}>{ resort.weather_conditions.clone() }</span> }
                }
            }
            <span style={badge}>{ format!("{}/{} lifts open", resort.open_lifts, resort.total_lifts) }</span>
        </div>
    }
}
