//! Splash Overlay - Entry Point
//!
//! Demoapplikation för den animerade splash-overlayn.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)]

mod app;

use app::DemoApp;
use eframe::egui;
use splash_overlay::{NativeSplash, NoopNativeSplash};

fn load_icon() -> egui::IconData {
    let png_bytes = include_bytes!("../resources/splash.png");
    let img = image::load_from_memory(png_bytes).expect("Kunde inte ladda appikonen");
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    egui::IconData {
        rgba: rgba.into_raw(),
        width,
        height,
    }
}

fn main() -> eframe::Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar Splash Overlay-demo v{}", env!("CARGO_PKG_VERSION"));

    // Engångsinit innan overlayn skapas: be plattformen att inte gömma sin
    // splash automatiskt. Omstart av appen kan ge race mot plattformen,
    // så misslyckande ignoreras.
    if let Err(e) = NoopNativeSplash.prevent_auto_hide() {
        tracing::debug!("prevent_auto_hide misslyckades: {}", e);
    }

    // Fönsterinställningar
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Splash Overlay-demo v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_icon(load_icon())
            .with_app_id("splash-overlay"),
        ..Default::default()
    };

    // Starta applikationen
    eframe::run_native(
        "Splash Overlay",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)))),
    )
}
