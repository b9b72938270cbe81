use clap::{Parser, Subcommand};
use weather_lookup_core::{Config, LookupController, UiState, backend_from_config};

use crate::output::TerminalView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-lookup", version, about = "Weather lookup client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure which backend the client talks to.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = inquire::Text::new("Backend base URL:")
        .with_default(config.backend_url())
        .prompt()?;

    config.set_backend_url(url.trim().to_owned());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let controller = LookupController::new(backend_from_config(&config), TerminalView);

    controller.submit(city).await;

    // The view already printed the banner; just make the failure scriptable.
    if matches!(controller.state(), UiState::Error(_)) {
        std::process::exit(1);
    }

    Ok(())
}
