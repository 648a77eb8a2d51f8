use yew::prelude::*;

use crate::palette::Palette;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingScreenProps {
    pub palette: Palette,
}

#[function_component]
pub fn LoadingScreen(props: &LoadingScreenProps) -> Html {
    let p = &props.palette;
    html! {
        <div style={format!("min-height:100vh; display:flex; align-items:center; justify-content:center; background:{}; color:{};", p.page_background(), p.muted_text_color())}>
            <div style="text-align:center; display:flex; flex-direction:column; gap:16px; align-items:center;">
                <div style="width:32px; height:32px; border:4px solid #cbd5e1; border-top-color:#475569; border-radius:50%; animation:spin 1s linear infinite;"></div>
                <p style="margin:0;">{"Loading..."}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorScreenProps {
    pub message: String,
    pub palette: Palette,
    pub on_retry: Callback<()>,
}

#[function_component]
pub fn ErrorScreen(props: &ErrorScreenProps) -> Html {
    let retry_btn = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style={format!("min-height:100vh; display:flex; align-items:center; justify-content:center; background:{};", props.palette.page_background())}>
            <div style="text-align:center; display:flex; flex-direction:column; gap:16px; align-items:center;">
                <p style="margin:0; color:#dc2626;">{ props.message.clone() }</p>
                <button onclick={retry_btn}>{"Retry"}</button>
            </div>
        </div>
    }
}
