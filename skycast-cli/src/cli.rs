use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select, Text};
use skycast_core::{Config, Consent, Presenter, Unit};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup by place name")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current and hourly weather for a place.
    Show {
        /// Free-text place name, e.g. "Paris".
        place: String,

        /// Display unit: celsius, fahrenheit or kelvin. Overrides the
        /// configured default.
        #[arg(long)]
        unit: Option<Unit>,

        /// Keep the session open to refresh, switch units or search again.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Record the storage-consent decision and a default display unit.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Show { place, unit, interactive } => show(&place, unit, interactive).await,
            Command::Configure => configure(),
        }
    }
}

async fn show(place: &str, unit: Option<Unit>, interactive: bool) -> Result<()> {
    let config = Config::load()?;

    // Consent is checked once at startup; undecided users just get a notice.
    if config.consent().is_none() {
        println!("Preferences are not stored yet. Run `skycast configure` to decide.");
    }

    let unit = match unit {
        Some(unit) => unit,
        None => config.unit()?,
    };

    let mut presenter = Presenter::with_default_providers(unit);

    if interactive {
        match presenter.search(place).await {
            Ok(model) => render::render(&model),
            Err(err) => render::render_error(&err),
        }
        interact(&mut presenter).await
    } else {
        let model = presenter.search(place).await?;
        render::render(&model);
        Ok(())
    }
}

const ACTION_REFRESH: &str = "Refresh";
const ACTION_UNIT: &str = "Switch unit";
const ACTION_SEARCH: &str = "New search";
const ACTION_QUIT: &str = "Quit";

async fn interact(presenter: &mut Presenter) -> Result<()> {
    loop {
        let actions = vec![ACTION_REFRESH, ACTION_UNIT, ACTION_SEARCH, ACTION_QUIT];
        let choice = Select::new("What next?", actions).prompt()?;

        match choice {
            ACTION_REFRESH => match presenter.refresh().await {
                Ok(model) => render::render(&model),
                Err(err) => render::render_error(&err),
            },
            ACTION_UNIT => {
                let unit = Select::new("Display unit:", Unit::all().to_vec()).prompt()?;
                match presenter.set_unit(unit) {
                    Some(model) => render::render(&model),
                    None => println!("Unit set to {unit}. Search for a location to see it."),
                }
            }
            ACTION_SEARCH => {
                let place = Text::new("Place name:").prompt()?;
                match presenter.search(&place).await {
                    Ok(model) => render::render(&model),
                    Err(err) => render::render_error(&err),
                }
            }
            _ => return Ok(()),
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let accepted = Confirm::new("Store your preferences (display unit) on disk?")
        .with_default(true)
        .prompt()?;

    config.set_consent(if accepted { Consent::Accepted } else { Consent::Declined });

    if accepted {
        let unit = Select::new("Default display unit:", Unit::all().to_vec()).prompt()?;
        config.set_unit(unit);
    }

    // A declined decision is itself persisted so the prompt is not repeated.
    config.save()?;
    println!("Saved to {}", Config::config_file_path()?.display());

    Ok(())
}
