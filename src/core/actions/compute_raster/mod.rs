pub mod compute_engine;
pub mod ports;

pub use compute_engine::ComputeEngine;
