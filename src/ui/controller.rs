//! Tillståndsmaskinen bakom splash-overlayn

use std::time::{Duration, Instant};

use crate::native::NativeSplash;
use crate::ui::animator::FadeAnimator;

/// Overlayns tillstånd, härlett ur två monotona flaggor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashState {
    /// Bilden laddas fortfarande — bara overlayn ritas, helt täckande
    Loading,
    /// Appen är redo, faden pågår — innehåll och overlay ritas samtidigt
    Revealing,
    /// Faden är klar — bara innehållet ritas, overlayn är avmonterad
    Complete,
}

/// Sekvenserar bildladdning → göm nativ splash → redo-flagga → fade → klart.
///
/// Ingen egui här: ren tillståndsmaskin som drivs av händelser utifrån
/// ([`on_image_loaded`](Self::on_image_loaded),
/// [`on_foregrounded`](Self::on_foregrounded)) och värdens repaint-loop
/// ([`update`](Self::update)). Redo-flaggan är den enda sanningskällan för
/// vad som ritas; att gömma den nativa splashen påverkar den aldrig.
pub struct SplashController {
    native: Box<dyn NativeSplash>,
    animator: FadeAnimator,
    is_app_ready: bool,
    is_splash_complete: bool,
}

impl SplashController {
    pub fn new(native: Box<dyn NativeSplash>) -> Self {
        Self {
            native,
            animator: FadeAnimator::new(),
            is_app_ready: false,
            is_splash_complete: false,
        }
    }

    pub fn with_fade_duration(native: Box<dyn NativeSplash>, fade_duration: Duration) -> Self {
        Self {
            native,
            animator: FadeAnimator::with_duration(fade_duration),
            is_app_ready: false,
            is_splash_complete: false,
        }
    }

    /// Bilden har fått pixlar på skärmen.
    ///
    /// Gör ett enda försök att gömma den nativa splashen — misslyckande
    /// sväljs, eftersom vår overlay nu ändå täcker allt — och sätter sedan
    /// redo-flaggan oavsett utfall. Tål att anropas flera gånger.
    pub fn on_image_loaded(&mut self) {
        if let Err(e) = self.native.hide() {
            tracing::debug!("Kunde inte gömma nativ splash: {}", e);
        }
        self.is_app_ready = true;
    }

    /// Driv animationen framåt. Anropas varje frame av värden.
    ///
    /// Fadestarten är en separat reaktion på redo-flaggan, inte en del av
    /// [`on_image_loaded`](Self::on_image_loaded) — starten är idempotent
    /// och kompletteringskanten sätter `is_splash_complete` exakt en gång.
    pub fn update(&mut self, now: Instant) {
        if !self.is_app_ready || self.is_splash_complete {
            return;
        }

        self.animator.start(now);
        if self.animator.tick(now) {
            self.is_splash_complete = true;
            tracing::info!("Splash-overlay klar");
        }
    }

    /// Fönstret har fått fokus igen efter att splashen är klar.
    ///
    /// Gör defensivt om försöket att gömma den nativa splashen — den är
    /// sannolikt redan borta, så "inget att gömma" sväljs. Rör aldrig
    /// animatorn eller flaggorna.
    pub fn on_foregrounded(&mut self) {
        if !self.is_splash_complete {
            return;
        }
        if let Err(e) = self.native.hide() {
            tracing::debug!("Nativ splash redan gömd: {}", e);
        }
    }

    pub fn state(&self) -> SplashState {
        match (self.is_app_ready, self.is_splash_complete) {
            (false, _) => SplashState::Loading,
            (true, false) => SplashState::Revealing,
            (true, true) => SplashState::Complete,
        }
    }

    /// Ska barninnehållet ritas denna frame?
    pub fn renders_child(&self) -> bool {
        self.is_app_ready
    }

    /// Ska overlayn ritas denna frame?
    pub fn renders_overlay(&self) -> bool {
        !self.is_splash_complete
    }

    pub fn is_app_ready(&self) -> bool {
        self.is_app_ready
    }

    pub fn is_splash_complete(&self) -> bool {
        self.is_splash_complete
    }

    /// Overlayns aktuella opacitet
    pub fn fade_value(&self) -> f32 {
        self.animator.value()
    }
}
