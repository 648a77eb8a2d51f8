use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream, MediaStreamConstraints, MediaStreamTrack};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::error::FetchError;
use crate::model::DetectionResult;

const RESULT_VISIBLE_MS: u32 = 3000;
const RESULT_EXIT_MS: u32 = 200;
const JPEG_QUALITY: f64 = 0.8;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraViewProps {
    pub api: Rc<ApiClient>,
    pub on_back: Callback<()>,
}

fn browser(msg: &str) -> FetchError {
    FetchError::Browser(msg.to_string())
}

async fn start_camera(video: &HtmlVideoElement) -> Result<MediaStream, FetchError> {
    let window = web_sys::window().ok_or_else(|| browser("no window"))?;
    let devices = window.navigator().media_devices()?;
    let facing = js_sys::Object::new();
    js_sys::Reflect::set(&facing, &JsValue::from_str("facingMode"), &JsValue::from_str("environment"))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&facing);
    let promise = devices.get_user_media_with_constraints(&constraints)?;
    let stream: MediaStream = JsFuture::from(promise).await?.dyn_into()?;
    video.set_src_object(Some(&stream));
    Ok(stream)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// Payload of a `data:` URL, without the `data:...;base64,` prefix.
fn data_url_payload(data_url: &str) -> Option<&str> {
    data_url.split_once(',').map(|(_, payload)| payload).filter(|p| !p.is_empty())
}

/// Grab the current video frame as base64 JPEG.
fn capture_frame(video: &HtmlVideoElement) -> Result<String, FetchError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| browser("no document"))?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| browser("not a canvas"))?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| browser("could not get canvas context"))?
        .dyn_into()
        .map_err(|_| browser("could not get canvas context"))?;
    ctx.draw_image_with_html_video_element(video, 0.0, 0.0)?;
    let url = canvas.to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(JPEG_QUALITY))?;
    data_url_payload(&url)
        .map(str::to_string)
        .ok_or_else(|| browser("empty frame"))
}

/// Pending timers of the result panel: how long it stays up, then its exit
/// animation. Dropping a handle cancels that timer.
struct PanelTimers<T> {
    visible: Option<T>,
    exit: Option<T>,
}

impl<T> Default for PanelTimers<T> {
    fn default() -> Self {
        Self { visible: None, exit: None }
    }
}

impl<T> PanelTimers<T> {
    fn cancel(&mut self) {
        self.visible = None;
        self.exit = None;
    }
}

fn hide_results(
    result: UseStateHandle<Option<DetectionResult>>,
    exiting: UseStateHandle<bool>,
    timers: Rc<RefCell<PanelTimers<Timeout>>>,
) {
    exiting.set(true);
    let exit = Timeout::new(RESULT_EXIT_MS, move || {
        result.set(None);
        exiting.set(false);
    });
    timers.borrow_mut().exit = Some(exit);
}

#[function_component(CameraView)]
pub fn camera_view(props: &CameraViewProps) -> Html {
    let video_ref = use_node_ref();
    let stream = use_mut_ref(|| None::<MediaStream>);
    let alive = use_mut_ref(|| true);
    let in_flight = use_mut_ref(|| false);
    let timers = use_mut_ref(PanelTimers::<Timeout>::default);
    let loading = use_state(|| false);
    let result = use_state(|| None::<DetectionResult>);
    let exiting = use_state(|| false);
    let camera_error = use_state(|| None::<String>);

    // Mount: open the camera; release it on unmount
    {
        let video_ref = video_ref.clone();
        let stream = stream.clone();
        let alive = alive.clone();
        let timers = timers.clone();
        let camera_error = camera_error.clone();
        use_effect_with((), move |_| {
            {
                let stream = stream.clone();
                let alive = alive.clone();
                spawn_local(async move {
                    let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                        return;
                    };
                    match start_camera(&video).await {
                        Ok(s) if *alive.borrow() => *stream.borrow_mut() = Some(s),
                        Ok(s) => stop_tracks(&s),
                        Err(e) => {
                            log::error!("error accessing camera: {e}");
                            camera_error.set(Some("Camera unavailable. Check browser permissions.".to_string()));
                        }
                    }
                });
            }
            move || {
                *alive.borrow_mut() = false;
                timers.borrow_mut().cancel();
                if let Some(s) = stream.borrow_mut().take() {
                    stop_tracks(&s);
                }
            }
        });
    }

    let onclick = {
        let api = props.api.clone();
        let video_ref = video_ref.clone();
        let in_flight = in_flight.clone();
        let timers = timers.clone();
        let loading = loading.clone();
        let result = result.clone();
        let exiting = exiting.clone();
        Callback::from(move |_e: MouseEvent| {
            if *in_flight.borrow() {
                return;
            }
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            timers.borrow_mut().cancel();
            exiting.set(false);
            let image = match capture_frame(&video) {
                Ok(b) => b,
                Err(e) => {
                    log::error!("error capturing frame: {e}");
                    return;
                }
            };
            *in_flight.borrow_mut() = true;
            loading.set(true);
            let api = api.clone();
            let in_flight = in_flight.clone();
            let timers = timers.clone();
            let loading = loading.clone();
            let result = result.clone();
            let exiting = exiting.clone();
            spawn_local(async move {
                match api.detect_people(&image).await {
                    Ok(r) => {
                        log::info!("detected {:?}", r.counts);
                        result.set(Some(r));
                        let (result, exiting, slot) = (result.clone(), exiting.clone(), timers.clone());
                        timers.borrow_mut().visible =
                            Some(Timeout::new(RESULT_VISIBLE_MS, move || hide_results(result, exiting, slot)));
                    }
                    Err(e) => {
                        log::error!("error detecting people: {e}");
                        hide_results(result, exiting, timers);
                    }
                }
                *in_flight.borrow_mut() = false;
                loading.set(false);
            });
        })
    };
    let back_cb = {
        let cb = props.on_back.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };

    let corner = "position:absolute; width:32px; height:32px; border-color:#fff; border-style:solid; border-width:0;";
    html! {
        <div {onclick} style="position:fixed; inset:0; overflow:hidden; background:#000; cursor:pointer;">
            <video ref={video_ref} autoplay=true playsinline=true muted=true style="position:absolute; inset:0; width:100%; height:100%; object-fit:cover;" />
            <div style="position:absolute; inset:0; background:rgba(0,0,0,0.5); backdrop-filter:blur(4px); pointer-events:none;"></div>
            <button onclick={back_cb} title="Back" style="position:absolute; top:16px; left:16px; z-index:50; padding:8px 12px; border-radius:999px; border:none; background:rgba(0,0,0,0.5); color:#fff; font-size:18px;">{"‹"}</button>
            <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; pointer-events:none;">
                <div style="width:256px; height:256px; position:relative; display:flex; align-items:center; justify-content:center;">
                    <div style={format!("{corner} top:0; left:0; border-top-width:2px; border-left-width:2px; border-top-left-radius:8px;")}></div>
                    <div style={format!("{corner} top:0; right:0; border-top-width:2px; border-right-width:2px; border-top-right-radius:8px;")}></div>
                    <div style={format!("{corner} bottom:0; left:0; border-bottom-width:2px; border-left-width:2px; border-bottom-left-radius:8px;")}></div>
                    <div style={format!("{corner} bottom:0; right:0; border-bottom-width:2px; border-right-width:2px; border-bottom-right-radius:8px;")}></div>
                    {
                        if *loading {
                            html! { <div style="width:32px; height:32px; border:3px solid rgba(255,255,255,0.3); border-top-color:#fff; border-radius:50%; animation:spin 1s linear infinite;"></div> }
                        } else {
                            html! { <p style="color:#fff; font-size:20px; font-weight:600; opacity:0.7; margin:0;">{"Tap to detect"}</p> }
                        }
                    }
                </div>
            </div>
            {
                if let Some(msg) = &*camera_error {
                    html! { <div style="position:absolute; top:16px; left:50%; transform:translateX(-50%); color:#fecaca; font-size:13px;">{ msg.clone() }</div> }
                } else {
                    html! {}
                }
            }
            { result_panel(&result, *exiting) }
        </div>
    }
}

fn result_panel(result: &Option<DetectionResult>, exiting: bool) -> Html {
    let Some(r) = result else {
        return html! {};
    };
    let motion = if exiting { "transform:translateY(100%); opacity:0;" } else { "transform:translateY(0); opacity:1;" };
    html! {
        <div style={format!("position:absolute; left:0; right:0; bottom:0; padding:16px; transition:transform 200ms ease, opacity 200ms ease; {motion}")}>
            <div style="background:rgba(0,0,0,0.5); backdrop-filter:blur(12px); border:1px solid rgba(255,255,255,0.2); border-radius:12px; padding:16px; display:flex; flex-direction:column; gap:16px; color:#fff;">
                <img src={format!("data:image/jpeg;base64,{}", r.annotated_image)} alt="Detected" style="width:100%; border-radius:8px;" />
                {
                    if r.counts.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div>
                                <h3 style="font-weight:500; margin:0 0 8px 0;">{"Detected Objects:"}</h3>
                                <div style="display:grid; grid-template-columns:1fr 1fr; gap:8px;">
                                    { for r.counts.iter().map(|(k, v)| html! {
                                        <div key={k.clone()} style="display:flex; justify-content:space-between;">
                                            <span style="text-transform:capitalize;">{ format!("{k}:") }</span>
                                            <span>{ *v }</span>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        }
                    }
                }
            </div>
        </div>
    }
}
