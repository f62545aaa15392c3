pub mod events;
pub mod zoom_controller;

pub use events::PointerEvent;
pub use zoom_controller::{ZoomController, ZoomState};
