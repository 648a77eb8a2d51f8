pub mod dashboard;
pub mod interaction;
pub mod selection;
pub mod viewport;

pub use dashboard::{DashboardAction, DashboardState, ResortData};
pub use interaction::MapController;
pub use selection::{Selection, ZoomTarget};
pub use viewport::{PanBounds, Size};
