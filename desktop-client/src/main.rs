mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::config::ConfigManager;
use common::{log, logger};
use eframe::egui;
use std::time::Duration;
use tokio::sync::mpsc;

use config::{Config, get_config_manager};
use offline::local_game_task;
use state::SharedState;
use ui::Tiles2048App;

#[derive(Parser)]
#[command(name = "tiles2048")]
struct Args {
    /// Seed for tile spawns; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a YAML config file
    #[arg(long)]
    config: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Tiles2048".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config: Config = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path).get_config()?,
        None => get_config_manager().get_config()?,
    };

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let settings = config.puzzle;
    let seed = args.seed;
    let shared_state_clone = shared_state.clone();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                shared_state_clone.set_error(format!("Failed to start game: {}", e));
                return;
            }
        };
        runtime.block_on(local_game_task(settings, seed, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("2048"),
        ..Default::default()
    };

    let app = Tiles2048App::new(
        shared_state,
        command_tx,
        Duration::from_millis(settings.animation_ms),
        settings.swipe_min_distance,
        settings.target_value,
    );

    eframe::run_native("2048", options, Box::new(|_cc| Ok(Box::new(app))))?;

    Ok(())
}
