use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io;

use dating_tracker::config::{Config, CONFIG_FILE_NAME};
use dating_tracker::{ContactStore, Session};

#[derive(Parser)]
#[command(name = "dating-tracker")]
#[command(about = "Track your dating contacts, notes and follow-ups")]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    config: String,
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .format_timestamp_secs()
    .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config)?;
    init_logging(&config);

    // Initialize store
    let db_path = config.database_path();
    let store = ContactStore::open(&db_path)
        .with_context(|| format!("cannot open contact database {}", db_path.display()))?;
    info!("opened contact database {}", db_path.display());

    let stdin = io::stdin();
    let mut session = Session::new(store, config, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}
