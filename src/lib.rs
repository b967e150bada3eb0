//! Splash Overlay — animerad startbild för egui-applikationer
//!
//! Håller en bundlad startbild synlig ovanpå det riktiga gränssnittet tills
//! applikationen är redo, fadear sedan ut bilden och avmonterar overlayn
//! permanent.

#![allow(dead_code)]

pub mod models;
pub mod native;
pub mod ui;
pub mod utils;

// Re-exports
pub use models::{OverlayConfig, ResizeMode};
pub use native::{NativeSplash, NoopNativeSplash};
pub use ui::{FadeAnimator, SplashController, SplashImage, SplashOverlay, SplashState};
pub use utils::{AppError, AppResult};
