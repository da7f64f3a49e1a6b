use eframe::egui;
use env_logger::Env;
use log::{error, info};

use childcare_companion_egui::backend::Backend;
use childcare_companion_egui::config::AppConfig;
use childcare_companion_egui::ui::CompanionApp;

const APP_NAME: &str = "家校通";

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting childcare companion");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }
    };

    let backend = match Backend::new(config.reference_date) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Failed to initialize backend: {:#}", e);
            std::process::exit(1);
        }
    };

    // Phone-shaped window
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([360.0, 640.0])
            .with_title(format!("{} · {}", APP_NAME, config.institution_name))
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| match CompanionApp::new(cc, backend, config) {
            Ok(app) => {
                info!("Successfully initialized companion app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
