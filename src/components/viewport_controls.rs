use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ViewportControlsProps {
    pub zoom: f64,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(ViewportControls)]
pub fn viewport_controls(props: &ViewportControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    // Keep clicks on the buttons from starting a map drag.
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {<div onmousedown={swallow} style="position:absolute; right:12px; bottom:12px; background:rgba(15,23,42,0.8); border:1px solid #334155; border-radius:8px; padding:6px; display:flex; gap:6px; align-items:center; color:#f1f5f9; font-size:12px;">
        <button onclick={zo} title="Zoom out"> {"-"} </button>
        <span style="min-width:40px; text-align:center; font-variant-numeric:tabular-nums;">{ format!("{:.0}%", props.zoom * 100.0) }</span>
        <button onclick={zi} title="Zoom in"> {"+"} </button>
        <span style="width:4px;"></span>
        <button onclick={rs}> {"Reset"} </button>
    </div>}
}
