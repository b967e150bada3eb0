//! Demoapplikation som bäddar in splash-overlayn runt ett trivialt innehåll

use eframe::egui;
use splash_overlay::{NoopNativeSplash, OverlayConfig, SplashImage, SplashOverlay};

pub struct DemoApp {
    splash: SplashOverlay,
    was_focused: bool,
}

impl DemoApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Konfigurationen läses en gång här och aldrig om
        let config = OverlayConfig::load();
        tracing::info!("Overlay-konfiguration: {:?}", config);

        let bytes = include_bytes!("../resources/splash.png");
        let image = SplashImage::from_bytes(bytes).expect("Kunde inte ladda splashbilden");

        Self {
            splash: SplashOverlay::new(image, Box::new(NoopNativeSplash), config),
            was_focused: true,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fokus-kant: fönstret kom tillbaka i förgrunden
        let focused = ctx.input(|i| i.viewport().focused.unwrap_or(true));
        if focused && !self.was_focused {
            self.splash.on_foregrounded();
        }
        self.was_focused = focused;

        egui::CentralPanel::default().show(ctx, |ui| {
            self.splash.show(ctx, ui, |ui| {
                let available = ui.available_size();

                ui.vertical_centered(|ui| {
                    ui.add_space((available.y / 2.0 - 40.0).max(20.0));
                    ui.heading("Hej världen!");
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .small()
                            .weak(),
                    );
                });
            });
        });
    }
}
