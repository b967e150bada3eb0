pub mod config;

pub use config::{OverlayConfig, ResizeMode};
