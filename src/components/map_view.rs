use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::config::{MapConfig, Settings};
use crate::model::{Hut, Point};
use crate::palette::Palette;
use crate::render::{HutMarker, draw_overlay, plan_hut_markers, plan_lift_strokes};
use crate::state::{DashboardAction, DashboardState, MapController, Size, ZoomTarget};

use super::viewport_controls::ViewportControls;

#[derive(Properties, PartialEq, Clone)]
pub struct MapViewProps {
    pub state: UseReducerHandle<DashboardState>,
    pub settings: Settings,
}

fn measure(el: &HtmlElement) -> Size {
    Size::new(f64::from(el.client_width()), f64::from(el.client_height()))
}

fn measure_ref(node: &NodeRef) -> Size {
    node.cast::<HtmlElement>().map(|el| measure(&el)).unwrap_or_default()
}

/// Cursor position relative to the container's top-left corner.
fn local_point(el: &HtmlElement, client_x: i32, client_y: i32) -> Point {
    let rect = el.get_bounding_client_rect();
    Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

#[function_component(MapView)]
pub fn map_view(props: &MapViewProps) -> Html {
    let container_ref = use_node_ref();
    let canvas_ref = use_node_ref();
    let controller = {
        let bounds = props.settings.pan_bounds;
        use_mut_ref(move || MapController::new(MapConfig::default(), bounds))
    };
    let settle = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();
    let palette = Palette::new(props.settings.dark_mode);

    // Effect: pan bounds setting changed
    {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let redraw = redraw.clone();
        use_effect_with(props.settings.pan_bounds, move |bounds| {
            controller.borrow_mut().set_pan_bounds(*bounds, measure_ref(&container_ref));
            redraw.force_update();
            || ()
        });
    }
    // Main mount effect: wheel needs a non-passive listener to stop page scroll
    {
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let redraw = redraw.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let container = container_ref.cast::<HtmlElement>();
            let wheel_cb = {
                let container_ref = container_ref.clone();
                let controller = controller.clone();
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |e: web_sys::WheelEvent| {
                    e.prevent_default();
                    let Some(el) = container_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let cursor = local_point(&el, e.client_x(), e.client_y());
                    controller.borrow_mut().wheel(cursor, e.delta_y(), measure(&el));
                    redraw.force_update();
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let redraw = redraw.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    redraw.force_update();
                }) as Box<dyn FnMut(_)>)
            };
            if let Some(el) = &container {
                let opts = AddEventListenerOptions::new();
                opts.set_passive(false);
                if el
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "wheel",
                        wheel_cb.as_ref().unchecked_ref(),
                        &opts,
                    )
                    .is_err()
                {
                    log::warn!("could not attach wheel listener");
                }
            }
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(el) = &container {
                    let _ = el.remove_event_listener_with_callback("wheel", wheel_cb.as_ref().unchecked_ref());
                }
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                }
                let _keep_alive = (&wheel_cb, &resize_cb);
            }
        });
    }
    // Effect: fly to the element picked in a list, then report completion
    // once the CSS transition has settled
    {
        let state = props.state.clone();
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let settle = settle.clone();
        let redraw = redraw.clone();
        use_effect_with(props.state.zoom_request, move |request| {
            if let Some(target) = *request {
                let size = measure_ref(&container_ref);
                let delay = {
                    let mut c = controller.borrow_mut();
                    match target {
                        ZoomTarget::Lift(id) => {
                            match state.lifts.iter().find(|l| l.id == id).and_then(|l| l.path.as_ref()) {
                                Some(path) => c.fit_lift(path, size),
                                None => log::debug!("lift {id} has no path to zoom to"),
                            }
                        }
                        ZoomTarget::Hut(id) => match state.huts.iter().find(|h| h.id == id) {
                            Some(hut) => c.fit_hut(hut.coordinates, size),
                            None => log::debug!("hut {id} is not loaded"),
                        },
                    }
                    c.config.settle_delay_ms
                };
                redraw.force_update();
                let done = {
                    let controller = controller.clone();
                    let redraw = redraw.clone();
                    Timeout::new(delay, move || {
                        controller.borrow_mut().finish_animation();
                        state.dispatch(DashboardAction::ZoomComplete);
                        redraw.force_update();
                    })
                };
                // Replacing a pending timer cancels it.
                *settle.borrow_mut() = Some(done);
            }
            || ()
        });
    }
    // Effect: repaint the overlay after every render
    {
        let canvas_ref = canvas_ref.clone();
        let container_ref = container_ref.clone();
        let controller = controller.clone();
        let state = props.state.clone();
        use_effect(move || {
            if let (Some(canvas), Some(el)) =
                (canvas_ref.cast::<HtmlCanvasElement>(), container_ref.cast::<HtmlElement>())
            {
                let size = measure(&el);
                let zoom = controller.borrow().viewport.zoom;
                let strokes = plan_lift_strokes(&state.lifts, state.selection, size, zoom, &palette);
                draw_overlay(&canvas, size, &strokes);
            }
            || ()
        });
    }

    let onmousedown = {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = container_ref.cast::<HtmlElement>() else {
                return;
            };
            e.prevent_default();
            controller.borrow_mut().pointer_down(local_point(&el, e.client_x(), e.client_y()));
            redraw.force_update();
        })
    };
    let onmousemove = {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(el) = container_ref.cast::<HtmlElement>() else {
                return;
            };
            let at = local_point(&el, e.client_x(), e.client_y());
            if controller.borrow_mut().pointer_move(at, measure(&el)) {
                redraw.force_update();
            }
        })
    };
    let onmouseup = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_e: MouseEvent| {
            controller.borrow_mut().pointer_up();
            redraw.force_update();
        })
    };
    let onmouseleave = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_e: MouseEvent| {
            controller.borrow_mut().pointer_leave();
            redraw.force_update();
        })
    };
    let on_zoom_in = {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            controller.borrow_mut().zoom_in(measure_ref(&container_ref));
            redraw.force_update();
        })
    };
    let on_zoom_out = {
        let controller = controller.clone();
        let container_ref = container_ref.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            controller.borrow_mut().zoom_out(measure_ref(&container_ref));
            redraw.force_update();
        })
    };
    let on_reset = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |_| {
            controller.borrow_mut().reset();
            redraw.force_update();
        })
    };
    let on_image_load = {
        let redraw = redraw.clone();
        Callback::from(move |_e: Event| redraw.force_update())
    };

    let c = controller.borrow();
    let vp = c.viewport;
    let size = measure_ref(&container_ref);
    let markers = plan_hut_markers(&props.state.huts, props.state.selection, size, vp.zoom, &c.config, &palette);
    let layer_style = format!(
        "position:absolute; inset:0; transform-origin:0 0; transform:translate({}px, {}px) scale({}); transition:{};",
        vp.pan.x,
        vp.pan.y,
        vp.zoom,
        if c.animating { format!("transform {}ms ease-out", c.config.settle_delay_ms) } else { "none".to_string() },
    );
    let cursor = if c.is_dragging() { "grabbing" } else { "grab" };
    drop(c);

    let map_img = match &props.state.map_image {
        Some(img) => html! {
            <img
                src={img.url().to_string()}
                alt="Ski Map"
                draggable="false"
                onload={on_image_load}
                style={format!("position:absolute; inset:0; width:100%; height:100%; object-fit:contain; user-select:none; filter:{};", palette.map_filter())}
            />
        },
        None => html! {},
    };

    html! {
        <div
            ref={container_ref}
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
            style={format!("position:relative; width:100%; aspect-ratio:4/3; overflow:hidden; border-radius:12px; box-shadow:0 8px 24px rgba(0,0,0,0.18); background:{}; cursor:{};", palette.panel_background(), cursor)}
        >
            <div style={layer_style}>
                { map_img }
                <canvas ref={canvas_ref} style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none;" />
                { for markers.iter().map(|m| hut_marker(m, &props.state)) }
            </div>
            <ViewportControls zoom={vp.zoom} {on_zoom_in} {on_zoom_out} {on_reset} />
        </div>
    }
}

fn hut_marker(marker: &HutMarker, state: &UseReducerHandle<DashboardState>) -> Html {
    let Some(hut) = state.huts.iter().find(|h| h.id == marker.hut_id) else {
        return html! {};
    };
    let onclick = {
        let state = state.clone();
        let id = marker.hut_id;
        Callback::from(move |_e: MouseEvent| state.dispatch(DashboardAction::SelectHut(id)))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let grow = if marker.selected { 1.25 } else { 1.0 };
    html! {
        <div
            key={marker.hut_id.to_string()}
            {onclick}
            onmousedown={swallow}
            title={hut_tooltip(hut)}
            style={format!(
                "position:absolute; left:{}px; top:{}px; transform:translate(-50%, -50%) scale({}); color:{}; cursor:pointer; font-size:20px; line-height:1; transition:transform 200ms;",
                marker.left, marker.top, marker.scale * grow, marker.color
            )}
        >
            <span style={format!("display:inline-block; padding:2px; border-radius:6px; border:2px solid {};", marker.color)}>{ marker.icon }</span>
            {
                if marker.seats_dot {
                    html! { <span style="position:absolute; top:-4px; right:-4px; width:10px; height:10px; border-radius:50%; background:#22C55E; border:2px solid #fff;"></span> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn hut_tooltip(hut: &Hut) -> String {
    let mut text = format!("{}\n{}m · {}", hut.name, hut.elevation, hut.kind.label());
    if hut.is_open() {
        text.push_str(&format!("\n{} seats available", hut.free_seats));
    }
    text
}
