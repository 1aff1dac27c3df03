use clap::Parser;

mod agent;
mod app;
mod backend;
mod chat;
mod cli;
mod commands;
mod config;
mod core;
mod display;
mod input;
mod server;
mod utils;

use crate::app::Application;
use crate::cli::Args;
use crate::commands::create_command_registry;
use crate::config::{Config, FallbackMode};
use crate::core::error::ChatError;
use tracing_subscriber::EnvFilter;

fn apply_overrides(config: &mut Config, args: &Args) -> Result<(), ChatError> {
    if let Some(bind) = &args.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(url) = &args.url {
        config.client.endpoint = url.clone();
    }
    if let Some(mode) = &args.fallback {
        config.fallback = FallbackMode::from_str(mode)
            .ok_or_else(|| ChatError::Config(format!("Unknown fallback mode: {}", mode)))?;
    }
    Ok(())
}

/// `RUST_LOG` wins, then `--verbose`, then the configured level. Client
/// modes stay quiet unless asked, so log lines don't interleave with the chat.
fn init_tracing(config: &Config, args: &Args) {
    let default_level = if args.verbose {
        "debug"
    } else if args.serve {
        config.log_level.as_str()
    } else {
        "warn"
    };

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => match default_level.parse::<EnvFilter>() {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "WARN: log_level '{}' is not a valid tracing filter ({}); falling back to 'info'",
                    default_level, e
                );
                EnvFilter::new("info")
            }
        },
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(args.verbose);

    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), ChatError> {
    let args = Args::parse();
    let mut config = Config::load()?;
    apply_overrides(&mut config, &args)?;

    init_tracing(&config, &args);
    tracing::debug!(path = %Config::config_path().display(), "configuration loaded");

    let command_dispatcher = create_command_registry();
    let mut app = Application::new(args, config, command_dispatcher);

    if let Err(e) = app.run().await {
        display::display_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
