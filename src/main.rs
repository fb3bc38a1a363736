#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod io;
mod model;
mod module;
mod ui;

use config::Settings;
use module::PROJECTS_MODULE;

fn main() -> eframe::Result<()> {
    let settings_path = Settings::default_path();
    let (settings, settings_err) = Settings::load_or_init(&settings_path);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .or_else(|_| tracing_subscriber::EnvFilter::try_new(&settings.log_filter))
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Some(e) = settings_err {
        tracing::warn!("using default settings: {e}");
    }

    tracing::info!(
        "{} dashboard v{} starting, settings at {}",
        PROJECTS_MODULE.name,
        env!("CARGO_PKG_VERSION"),
        settings_path.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([900.0, 480.0])
            .with_title(format!("{} Dashboard", PROJECTS_MODULE.name)),
        ..Default::default()
    };

    eframe::run_native(
        "Project Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(app::ProjectsApp::new(cc, settings, settings_path)))),
    )
}
