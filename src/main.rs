use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use sports_stats::config::Config;
use sports_stats::{logging, tasks};

#[derive(Parser)]
#[command(name = "sports_stats")]
#[command(about = "Imports NBA teams and standings into JSON files")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML config file (default: ./sports_stats.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the simplified team list
    Teams,
    /// Fetch, normalize and write league standings
    Standings {
        /// Season token such as 2025-26, or "current"
        #[arg(long)]
        season: Option<String>,
    },
    /// Run the team import and then the standings fetch
    Run {
        /// Season token such as 2025-26, or "current"
        #[arg(long)]
        season: Option<String>,
    },
    /// Match the written standings file against the written team list
    Link,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Teams => {
            println!("🚀 Fetching NBA teams...");
            let teams = tasks::import_teams_once(&config).await?;
            println!("✅ Loaded {} NBA teams.", teams.len());
        }
        Commands::Standings { season } => {
            let season = tasks::resolve_season(&config, season.as_deref());
            println!("📡 Fetching NBA standings for {}...", season);
            let rows = tasks::standings_once(&config, &season).await?;
            println!("✅ Retrieved {} NBA teams for {}.", rows.len(), season);
        }
        Commands::Run { season } => {
            let season = tasks::resolve_season(&config, season.as_deref());
            println!("\n📥 Step 1: Importing teams...");
            let teams = tasks::import_teams_once(&config).await?;
            println!("\n📊 Step 2: Fetching standings for {}...", season);
            let rows = tasks::standings_once(&config, &season).await?;
            info!(teams = teams.len(), rows = rows.len(), "Full run finished");
            println!("✅ Wrote {} teams and {} standings rows", teams.len(), rows.len());
        }
        Commands::Link => {
            let report = tasks::link_once(&config)?;
            for link in &report.matched {
                println!(
                    "   • {:<26} W {:>3} L {:>3} PPG {:>6.1}",
                    link.name,
                    link.wins.map(|w| w.to_string()).unwrap_or_else(|| "-".into()),
                    link.losses.map(|l| l.to_string()).unwrap_or_else(|| "-".into()),
                    link.points_per_game
                );
            }
            for name in &report.unmatched {
                warn!("No stats found for {}", name);
                println!("⚠️  No stats found for {}", name);
            }
            println!(
                "\n🎉 Linked {}/{} NBA teams.",
                report.matched.len(),
                report.matched.len() + report.unmatched.len()
            );
        }
    }

    Ok(())
}
