use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use widget_core::{
    Clock, Config, FixedClock, SystemClock, WeatherProvider, Widget, WidgetError,
    provider_from_config,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Current weather for a city, with commentary")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `interactive`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the weatherapi.com API key in the config file.
    Configure,

    /// Search once and print the result.
    Show {
        /// City or location name.
        city: String,

        /// Local hour (0-23) to use for the day/night label instead of the system clock.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },

    /// Keep prompting for cities until cancelled.
    Interactive {
        /// Local hour (0-23) to use for the day/night label instead of the system clock.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=23))]
        hour: Option<u32>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command.unwrap_or(Command::Interactive { hour: None }) {
            Command::Configure => configure(),
            Command::Show { city, hour } => {
                let mut widget = Widget::new(provider_from_config(&Config::resolve()?));
                widget.set_input(city);
                show(&mut widget, clock(hour).as_ref()).await
            }
            Command::Interactive { hour } => {
                let mut widget = Widget::new(provider_from_config(&Config::resolve()?));
                interactive(&mut widget, clock(hour).as_ref()).await
            }
        }
    }
}

fn clock(hour: Option<u32>) -> Box<dyn Clock> {
    match hour {
        Some(hour) => Box::new(FixedClock(hour)),
        None => Box::new(SystemClock),
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let key = Password::new("weatherapi.com API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(key);
    let path = config.save()?;

    println!("Saved API key to {}", path.display());
    Ok(ExitCode::SUCCESS)
}

async fn show<P: WeatherProvider>(
    widget: &mut Widget<P>,
    clock: &dyn Clock,
) -> anyhow::Result<ExitCode> {
    println!("{}\n", render::header());
    if let Some(loading) = render::loading_marker(widget.input()) {
        eprintln!("{loading}");
    }

    let outcome = widget.submit().await;
    println!("{}", render::body(widget.state(), widget.view(clock).as_ref()));

    Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn interactive<P: WeatherProvider>(
    widget: &mut Widget<P>,
    clock: &dyn Clock,
) -> anyhow::Result<ExitCode> {
    println!("{}\n", render::header());

    loop {
        let input = match Text::new("Location:").with_placeholder(render::PLACEHOLDER).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        widget.set_input(input);
        if let Some(loading) = render::loading_marker(widget.input()) {
            eprintln!("{loading}");
        }
        if let Err(WidgetError::Fetch(err)) = widget.submit().await {
            tracing::debug!(error = %err, "search failed");
        }

        println!("{}\n", render::body(widget.state(), widget.view(clock).as_ref()));
    }

    Ok(ExitCode::SUCCESS)
}
