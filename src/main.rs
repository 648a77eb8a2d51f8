mod api;
mod components;
mod config;
mod error;
mod model;
mod palette;
mod render;
mod state;
mod util;

fn main() {
    // Only fails if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    yew::Renderer::<components::app::App>::new().render();
}
