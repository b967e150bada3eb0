//! Splash-overlay — egui-skiktet ovanpå tillståndsmaskinen

use std::time::Instant;

use egui::{self, Color32, ColorImage, Rect, TextureHandle, TextureOptions};

use crate::models::{OverlayConfig, ResizeMode};
use crate::native::NativeSplash;
use crate::ui::controller::{SplashController, SplashState};
use crate::utils::AppResult;

/// Opak bildreferens: avkodade pixlar för den bundlade splashbilden.
///
/// Byggs synkront från bytes som följer med binären — ingen nätverkshämtning.
pub struct SplashImage {
    pixels: ColorImage,
}

impl SplashImage {
    pub fn from_bytes(bytes: &[u8]) -> AppResult<Self> {
        let img = image::load_from_memory(bytes)?;
        let rgba = img.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let pixels = rgba.into_raw();
        Ok(Self {
            pixels: ColorImage::from_rgba_unmultiplied(size, &pixels),
        })
    }

    pub fn size(&self) -> [usize; 2] {
        self.pixels.size
    }
}

/// Overlayn som helhet: täcker barninnehållet med splashbilden tills appen
/// är redo, fadear sedan ut och avmonteras permanent.
pub struct SplashOverlay {
    controller: SplashController,
    config: OverlayConfig,
    // Källpixlar tills texturen laddats upp, sedan None
    image: Option<SplashImage>,
    texture: Option<TextureHandle>,
    image_load_reported: bool,
}

impl SplashOverlay {
    /// Skapa overlayn. Konfigurationen är en ögonblicksbild — den läses
    /// aldrig om under overlayns livstid.
    pub fn new(image: SplashImage, native: Box<dyn NativeSplash>, config: OverlayConfig) -> Self {
        Self {
            controller: SplashController::new(native),
            config,
            image: Some(image),
            texture: None,
            image_load_reported: false,
        }
    }

    /// Rita en frame: barninnehåll och/eller overlay beroende på tillstånd.
    ///
    /// `add_contents` anropas bara när innehållet faktiskt ska synas —
    /// under Loading ritas enbart overlayn, helt täckande.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui),
    ) {
        self.ensure_texture(ctx);
        self.controller.update(Instant::now());

        if self.controller.renders_child() {
            add_contents(ui);
        }

        if self.controller.renders_overlay() {
            self.paint_overlay(ctx);
            // Fortsätt animera
            ctx.request_repaint();
        } else if self.texture.is_some() {
            // Komplett: avmontera overlayn helt och släpp GPU-resursen
            self.texture = None;
            self.image = None;
        }
    }

    /// Vidarebefordra fokus-händelser från värden
    pub fn on_foregrounded(&mut self) {
        self.controller.on_foregrounded();
    }

    pub fn state(&self) -> SplashState {
        self.controller.state()
    }

    /// Ladda upp texturen (en gång). Första lyckade uppladdningen är
    /// signalen att bilden har pixlar — samma händelse som bildprimitivens
    /// laddningscallback.
    fn ensure_texture(&mut self, ctx: &egui::Context) {
        if self.texture.is_none() && !self.controller.is_splash_complete() {
            if let Some(image) = self.image.take() {
                self.texture =
                    Some(ctx.load_texture("splash-image", image.pixels, TextureOptions::LINEAR));
            }
        }

        if self.texture.is_some() && !self.image_load_reported {
            self.image_load_reported = true;
            self.controller.on_image_loaded();
        }
    }

    fn paint_overlay(&self, ctx: &egui::Context) {
        let alpha = self.controller.fade_value().clamp(0.0, 1.0);
        let alpha_byte = (alpha * 255.0) as u8;
        let screen = ctx.screen_rect();

        // Eget förgrundslager: ritas ovanpå allt, fångar inga pekare
        let painter = ctx
            .layer_painter(egui::LayerId::new(
                egui::Order::Foreground,
                egui::Id::new("splash_overlay"),
            ))
            .with_clip_rect(screen);

        let bg = self.config.background_color32();
        painter.rect_filled(
            screen,
            0.0,
            Color32::from_rgba_unmultiplied(bg.r(), bg.g(), bg.b(), alpha_byte),
        );

        if let Some(texture) = &self.texture {
            let size = texture.size();
            let image_size = egui::vec2(size[0] as f32, size[1] as f32);
            let rect = fit_rect(image_size, screen, self.config.resize_mode);
            let tint = Color32::from_white_alpha(alpha_byte);
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            painter.image(texture.id(), rect, uv, tint);
        }
    }
}

/// Räkna ut bildens rektangel i behållaren: centrerad, aspektbevarad
pub fn fit_rect(image_size: egui::Vec2, container: Rect, mode: ResizeMode) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return container;
    }

    let scale_x = container.width() / image_size.x;
    let scale_y = container.height() / image_size.y;
    let scale = match mode {
        ResizeMode::Contain => scale_x.min(scale_y),
        ResizeMode::Cover => scale_x.max(scale_y),
    };

    Rect::from_center_size(container.center(), image_size * scale)
}
