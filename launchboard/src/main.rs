#![warn(clippy::all, rust_2018_idioms)]

use launch_table::LaunchTable;
use launchboard::{Config, EguiApp};

const WINDOW_NAME: &str = "Launchboard >>";
const WINDOW_WIDTH: f32 = 900.0;
const WINDOW_HEIGHT: f32 = 700.0;

fn main() -> eframe::Result {
    env_logger::init();

    let config = if let Ok(config) = Config::from_config_file() {
        config
    } else {
        log::warn!("unable to load config file \".launchboard\" from home directory");
        Config::default()
    };

    // The dashboard is unusable without its dataset, so a failed load is
    // fatal before any window opens.
    let table = match LaunchTable::from_path(&config.dataset_path) {
        Ok(table) => table,
        Err(error) => {
            log::error!("unable to load launch dataset: {error}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(EguiApp::new(cc, table)))),
    )
}
