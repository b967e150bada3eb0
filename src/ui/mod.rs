pub mod animator;
pub mod controller;
pub mod overlay;

pub use animator::FadeAnimator;
pub use controller::{SplashController, SplashState};
pub use overlay::{SplashImage, SplashOverlay};
