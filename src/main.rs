use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let mut config = Config::load();
    if let Some(port) = args.api_port {
        config.web_port = port;
    }

    logging::init(&config).context("Failed to initialise logging")?;
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    match args.command {
        Some(CliCommand::Serve { port }) => {
            if let Some(port) = port {
                config.web_port = port;
            }
            return api::start_server(config).await.context("API server failed");
        }
        Some(command) => return cli::handlers::run_command(command, args.json, &config),
        None => {}
    }

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("🔒 API-only mode active. CLI interface disabled.");
        return api::start_server(config).await.context("API server failed");
    }

    // Start API server in background (using a separate thread for Actix)
    if config.web_enabled {
        let server_config = config.clone();
        std::thread::spawn(move || {
            match tokio::runtime::Runtime::new() {
                Ok(rt) => {
                    if let Err(e) = rt.block_on(api::start_server(server_config)) {
                        log::error!("API server error: {:?}", e);
                    }
                }
                Err(e) => log::error!("Failed to create tokio runtime: {:?}", e),
            }
        });
        println!("🚀 API server started on {}:{}", config.web_address, config.web_port);
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            println!("\n👋 Goodbye!");
            std::process::exit(0);
        })
        .context("Failed to set Ctrl+C handler")?;
    }

    cli::menu::run_cli_menu(config, should_exit).await
}
