use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use nandi_core::Language;
use nandi_core::config::NandiConfig;
use nandi_core::data::PriceTrend;
use nandi_core::directory::FarmerStatus;
use nandi_core::trust::MAX_TRUST_SCORE;
use nandi_infrastructure::ConfigService;

mod commands;
mod helper;

#[derive(Parser)]
#[command(name = "nandi")]
#[command(about = "Nandi - farmer advisory assistant", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat with the assistant
    Chat {
        /// Conversation language (overrides chat.default_language)
        #[arg(long)]
        language: Option<Language>,
    },
    /// Print the assistant's reply to a single message
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Register a farmer step by step
    Register,
    /// Show the grade and benefits for a trust score
    Trust {
        #[arg(value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_TRUST_SCORE)))]
        score: u32,
        /// Also print the demo component breakdown
        #[arg(long)]
        breakdown: bool,
    },
    /// Show weather, mandi prices and recommendations
    Data {
        /// Only show quotes with this trend (up, down, stable)
        #[arg(long)]
        trend: Option<PriceTrend>,
        /// Also print the six-month price history
        #[arg(long)]
        history: bool,
    },
    /// List registered farmers
    Farmers {
        /// Matches name, phone or location
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        status: Option<FarmerStatus>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nandi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_service(path: Option<PathBuf>) -> Result<ConfigService> {
    Ok(match path {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new()?,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let service = config_service(cli.config)?;

    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&service, &service.load()?)?,
            ConfigAction::Init { force } => commands::config::init(&service, force)?,
        },
        command => {
            let config = service.load()?;
            tracing::debug!(path = %service.path().display(), "configuration loaded");
            run(command, &config).await?;
        }
    }

    Ok(())
}

async fn run(command: Commands, config: &NandiConfig) -> Result<()> {
    match command {
        Commands::Chat { language } => commands::chat::run(config, language).await?,
        Commands::Ask { text } => commands::ask::run(&text.join(" "))?,
        Commands::Register => commands::register::run().await?,
        Commands::Trust { score, breakdown } => commands::trust::run(config, score, breakdown),
        Commands::Data { trend, history } => commands::data::run(trend, history),
        Commands::Farmers { search, status } => commands::farmers::run(search.as_deref(), status),
        Commands::Config { .. } => {}
    }
    Ok(())
}
