use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use clap::Parser;
use honyaku_config::Config;
use honyaku_core::TranslationService;
use honyaku_engine::TranslationEngine;
use honyaku_engine_offline::{NetworkProfile, OfflineEngine};
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod controller;
mod events;
mod io;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::controller::AppController;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = load_config();

    let engine = build_engine(&config);
    let service = Arc::new(TranslationService::new(engine, config.translator.clone()));

    match cli.command {
        Some(command) => commands::run(command, service.as_ref(), &config.translator).await,
        None => run_interactive(config, service).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config shipped in the repo, falling back to env-driven
/// defaults when the file is missing or malformed.
fn load_config() -> Config {
    match File::open("config.json") {
        Ok(file) => match serde_json::from_reader(BufReader::new(file)) {
            Ok(config) => {
                tracing::debug!("loaded config.json");
                config
            }
            Err(e) => {
                tracing::warn!("ignoring invalid config.json: {e}");
                Config::new()
            }
        },
        Err(_) => Config::new(),
    }
}

fn build_engine(config: &Config) -> Arc<dyn TranslationEngine> {
    let network = NetworkProfile::parse(&config.engine.network_profile).unwrap_or_else(|| {
        tracing::warn!(
            "unknown network profile {:?}, assuming wifi",
            config.engine.network_profile
        );
        NetworkProfile::Wifi
    });

    Arc::new(OfflineEngine::new(&config.engine.model_dir, network))
}

async fn run_interactive(config: Config, service: Arc<TranslationService>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(Arc::clone(&state));
    let mut tasks = controller.spawn_tasks(service);

    println!("honyaku — type text to translate (try \"Hello, how are you today?\"), :help for commands");

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
            controller.shutdown();
        }
    }

    Ok(())
}
