//! Interactive session for drag-to-zoom fractal exploration.
//!
//! The display loop owns an [`ExplorerSession`], forwards decoded pointer
//! events to it, and asks it for a [`Frame`] once per displayed frame.

pub mod data;
pub mod errors;
mod session;

pub use data::explorer_config::ExplorerConfig;
pub use errors::SessionError;
pub use session::{ExplorerSession, Frame};
