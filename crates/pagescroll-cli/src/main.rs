use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagescroll_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "pagescroll")]
#[command(author, version, about = "Run and inspect smooth page-scroll animations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a simulated page towards a target
    Scroll(commands::scroll::ScrollArgs),
    /// Print the built-in easing curves
    Easings {
        /// Number of samples per curve (including t=0 and t=1)
        #[arg(long, default_value_t = 5)]
        samples: usize,
    },
    /// Manage the configuration file
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

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let (config, source) = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!("{}", source);

    match cli.command {
        Commands::Scroll(args) => commands::scroll::run(&config, args).await,
        Commands::Easings { samples } => commands::easings::run(samples),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::Init { force } => commands::config::init(force),
        },
    }
}
