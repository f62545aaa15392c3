//! GUI input adapter for interactive fractal exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer rendering.

mod app;
mod events;
mod overlay;

pub use app::{GuiError, run_gui};
