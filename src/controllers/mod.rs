pub mod interactive;
pub mod snapshot;
pub mod zoom;
