pub mod app;
pub mod camera_view;
pub mod dashboard_view;
pub mod hut_list;
pub mod legend;
pub mod lift_list;
pub mod map_view;
pub mod resort_selector;
pub mod settings_modal;
pub mod status_screens;
pub mod viewport_controls;
