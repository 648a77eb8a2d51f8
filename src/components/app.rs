use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{camera_view::CameraView, dashboard_view::DashboardView, settings_modal::SettingsModal};
use crate::api::ApiClient;
use crate::config::{ApiConfig, Settings};
use crate::state::{DashboardAction, DashboardState, ResortData};
use crate::util::{read_resort_param, write_resort_param};

#[derive(PartialEq, Clone)]
enum View {
    Dashboard,
    Camera,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Dashboard);
    let dashboard = use_reducer(DashboardState::new);
    let settings = use_state(Settings::load);
    let show_settings = use_state(|| false);
    let api = use_memo((), |_| ApiClient::new(ApiConfig::default()));

    // Load the resort list once
    {
        let dashboard = dashboard.clone();
        let api = api.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api.list_resorts().await {
                    Ok(resorts) => {
                        log::info!("loaded {} resorts", resorts.len());
                        dashboard.dispatch(DashboardAction::ResortsLoaded {
                            resorts,
                            preferred: read_resort_param(),
                        });
                    }
                    Err(e) => {
                        log::error!("error fetching resorts: {e}");
                        dashboard.dispatch(DashboardAction::ResortsFailed(e));
                    }
                }
            });
            || ()
        });
    }
    // Fetch lifts, huts and map whenever the selected resort changes
    {
        let dashboard = dashboard.clone();
        let api = api.clone();
        use_effect_with((dashboard.selected_resort, dashboard.generation), move |(selected, generation)| {
            if let Some(id) = *selected {
                write_resort_param(id);
                let generation = *generation;
                spawn_local(async move {
                    let (lifts, huts, map) =
                        futures::join!(api.list_lifts(id), api.list_huts(id), api.get_map_image(id));
                    for (what, err) in [
                        ("lifts", lifts.as_ref().err()),
                        ("huts", huts.as_ref().err()),
                        ("map", map.as_ref().err()),
                    ] {
                        if let Some(e) = err {
                            log::error!("error fetching {what} for resort {id}: {e}");
                        }
                    }
                    dashboard.dispatch(DashboardAction::ResortDataLoaded {
                        generation,
                        data: ResortData { lifts, huts, map },
                    });
                });
            }
            || ()
        });
    }
    // Persist settings
    use_effect_with(*settings, |s| {
        s.save();
        || ()
    });

    let to_camera = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Camera))
    };
    let to_dashboard = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Dashboard))
    };
    let open_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(true))
    };
    let close_settings = {
        let show = show_settings.clone();
        Callback::from(move |_| show.set(false))
    };
    let on_settings_change = {
        let settings = settings.clone();
        Callback::from(move |s: Settings| settings.set(s))
    };

    let page = match *view {
        View::Dashboard => html! {
            <DashboardView
                state={dashboard.clone()}
                settings={*settings}
                on_open_settings={open_settings}
                on_open_camera={to_camera}
            />
        },
        View::Camera => html! { <CameraView api={Rc::clone(&api)} on_back={to_dashboard} /> },
    };

    html! {
        <>
            <style>{ "@keyframes spin { to { transform: rotate(360deg); } }" }</style>
            { page }
            <SettingsModal
                show={*show_settings}
                on_close={close_settings}
                settings={*settings}
                on_change={on_settings_change}
            />
        </>
    }
}
