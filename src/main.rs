//! Voteboard - Community vote leaderboard API for trending Solana tokens

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use voteboard::adapters::server::{self, AppState};
use voteboard::adapters::{DexScreenerClient, HeliusLogoClient, SolscanLogoClient};
use voteboard::application::{LogoResolver, RankingConfig, RankingService};
use voteboard::config::{load_config, Config};
use voteboard::domain::vote_ledger::VoteLedger;
use voteboard::ports::{LogoProvider, MarketFeed, TrendingFeed};

#[derive(Parser, Debug)]
#[command(
    name = "voteboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Community vote leaderboard API for trending Solana tokens"
)]
struct CliApp {
    /// The command to execute
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP API
    Serve(ServeCmd),

    /// Print the current vote ledger
    Votes(VotesCmd),
}

#[derive(Parser, Debug)]
struct ServeCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    config: PathBuf,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Parser, Debug)]
struct VotesCmd {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", default_value = "config/default.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (secrets go here, not in the config file)
    dotenvy::dotenv().ok();

    let app = CliApp::parse();
    init_logging(app.verbose, app.debug);

    match app.command {
        Command::Serve(cmd) => serve_command(cmd).await,
        Command::Votes(cmd) => votes_command(cmd).await,
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    fmt().with_env_filter(filter).init();
}

async fn serve_command(cmd: ServeCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;

    let votes = open_ledger(&config)?;
    let dexscreener = Arc::new(
        DexScreenerClient::new(
            config.dexscreener.api_url.clone(),
            Duration::from_secs(config.dexscreener.timeout_secs),
        )
        .context("Failed to create DexScreener client")?,
    );

    let logos = LogoResolver::new(logo_providers(&config)?);
    let ranking = Arc::new(RankingService::new(
        dexscreener.clone() as Arc<dyn TrendingFeed>,
        dexscreener as Arc<dyn MarketFeed>,
        logos,
        votes.clone(),
        RankingConfig {
            max_profiles: config.ranking.max_profiles,
            min_volume_24h: config.ranking.min_volume_24h,
        },
    ));

    let state = AppState {
        ranking,
        votes,
        default_chain: config.chain.id.clone(),
    };

    let port = cmd.port.unwrap_or_else(|| config.server.get_port());
    let addr: SocketAddr = format!("{}:{}", config.server.host, port)
        .parse()
        .context("Invalid listen address")?;

    server::serve(addr, state).await.context("Server error")?;
    Ok(())
}

async fn votes_command(cmd: VotesCmd) -> Result<()> {
    let config = load_config(&cmd.config).context("Failed to load configuration")?;
    let ledger = open_ledger(&config)?;

    let mut entries: Vec<(String, u64)> = ledger.snapshot().into_iter().collect();
    if entries.is_empty() {
        println!("No votes recorded yet ({})", ledger.path().display());
        return Ok(());
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (address, votes) in entries {
        println!("{:>8}  {}", votes, address);
    }

    Ok(())
}

fn open_ledger(config: &Config) -> Result<Arc<VoteLedger>> {
    // Expand ledger path (handles ~ for home directory)
    let path = shellexpand::tilde(&config.storage.votes_file).to_string();
    let ledger = VoteLedger::open(path).context("Failed to open vote ledger")?;
    Ok(Arc::new(ledger))
}

/// Build the logo fallback chain: Helius first when a key is configured,
/// Solscan always last.
fn logo_providers(config: &Config) -> Result<Vec<Arc<dyn LogoProvider>>> {
    let mut providers: Vec<Arc<dyn LogoProvider>> = Vec::new();

    match config.helius.get_api_key() {
        Some(api_key) => {
            let helius = HeliusLogoClient::new(
                config.helius.rpc_url.clone(),
                api_key,
                Duration::from_secs(config.helius.timeout_secs),
            )
            .context("Failed to create Helius client")?;
            providers.push(Arc::new(helius));
        }
        None => {
            tracing::warn!("No Helius API key configured, skipping Helius logo lookups");
        }
    }

    let solscan = SolscanLogoClient::new(
        config.solscan.api_url.clone(),
        Duration::from_secs(config.solscan.timeout_secs),
    )
    .context("Failed to create Solscan client")?;
    providers.push(Arc::new(solscan));

    Ok(providers)
}
