use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// community - social feed with a karma leaderboard
#[derive(Parser)]
#[command(name = "community")]
#[command(about = "Posts, nested comments, likes and a 24h karma leaderboard", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage users
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Print the current karma leaderboard
    Leaderboard {
        /// Number of users to show (overrides config file)
        #[arg(long)]
        size: Option<usize>,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create a user and print its id
    Create { username: String },
    /// Print a bearer token for an existing user
    Token { username: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = community::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    community::observability::init_observability(
        "community",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Migrate => cli::migrate::migrate(&config).await,
        Commands::Reset => cli::migrate::reset(&config).await,
        Commands::User { command } => match command {
            UserCommands::Create { username } => cli::user::create(config, username).await,
            UserCommands::Token { username } => cli::user::token(config, username).await,
        },
        Commands::Leaderboard { size } => cli::leaderboard::print(config, size).await,
    }
}
