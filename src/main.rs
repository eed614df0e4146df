use clap::{Parser, Subcommand, ValueEnum};
use nhl_api::Client;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nhl_dash::commands;
use nhl_dash::config;
use nhl_dash::selection::{FileStore, KeyValueStore, MemoryStore, TeamSession};
use nhl_dash::teams::ColorScheme;
use nhl_dash::theme::GlobalStylePublisher;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nhl-dash")]
#[command(about = "Team-scoped NHL stats dashboard for the terminal")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupBy {
    /// Group by division
    #[value(name = "d")]
    Division,
    /// Group by conference
    #[value(name = "c")]
    Conference,
    /// Show league-wide standings
    #[value(name = "l")]
    League,
}

impl GroupBy {
    /// Convert CLI GroupBy enum to commands::standings::GroupBy
    fn to_standings_groupby(self) -> commands::standings::GroupBy {
        match self {
            GroupBy::Division => commands::standings::GroupBy::Division,
            GroupBy::Conference => commands::standings::GroupBy::Conference,
            GroupBy::League => commands::standings::GroupBy::League,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemeArg {
    Regular,
    Alternate,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Regular => ColorScheme::Regular,
            SchemeArg::Alternate => ColorScheme::Alternate,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display NHL standings
    Standings {
        /// Group standings by: d=division, c=conference, l=league
        #[arg(short, long, default_value = "d")]
        by: GroupBy,
    },
    /// Display league-ranked edge stats for a team
    Stats {
        /// Team abbreviation (defaults to the selected team)
        team: Option<String>,
    },
    /// Display the last-10-games power ranking for a team
    Power {
        /// Team abbreviation (defaults to the selected team)
        team: Option<String>,
    },
    /// Show or change the selected team
    Team {
        /// Team abbreviation to select
        abbrev: Option<String>,
    },
    /// Switch the active color scheme
    Scheme {
        #[arg(value_enum)]
        scheme: SchemeArg,
    },
    /// List the team catalog by division
    Teams,
    /// Display current configuration
    Config,
}

fn create_client() -> Client {
    match Client::new() {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create NHL API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!(
        "Configuration File: {} (Exists: {})",
        path_str,
        if exists { "yes" } else { "no" }
    );
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Mount the per-session selection store: file-backed when an XDG config
/// directory exists, in-memory otherwise.
fn mount_session() -> TeamSession {
    let kv: Box<dyn KeyValueStore> = match FileStore::open_default() {
        Some(store) => Box::new(store),
        None => {
            tracing::warn!("no config directory available, selection will not persist");
            Box::new(MemoryStore::new())
        }
    };
    TeamSession::mount(kv, Box::new(GlobalStylePublisher))
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    command: Commands,
    session: &mut TeamSession,
    config: &config::Config,
) -> anyhow::Result<()> {
    // Overwrite the default selection with persisted state before any
    // command reads it.
    session.store_mut()?.restore();

    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Standings { by } => {
            let client = create_client();
            commands::standings::run(&client, by.to_standings_groupby(), config).await
        }
        Commands::Stats { team } => {
            let client = create_client();
            commands::stats::run(&client, team, session, config).await
        }
        Commands::Power { team } => {
            let client = create_client();
            commands::power::run(&client, team, session, config).await
        }
        Commands::Team { abbrev } => commands::team::run(abbrev, session, config),
        Commands::Scheme { scheme } => commands::scheme::run(scheme.into(), session),
        Commands::Teams => {
            commands::teams::run(config);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let command = cli.command;

    // Handle Config command separately (doesn't need a session)
    if let Commands::Config = command {
        handle_config_command();
        return;
    }

    let mut session = mount_session();
    if let Err(e) = execute_command(command, &mut session, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
