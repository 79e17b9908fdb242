use sports_stats::config::Config;
use sports_stats::{logging, tasks};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let config = Config::load(None)?;
    let teams = tasks::import_teams_once(&config).await?;
    println!("✅ Loaded {} NBA teams.", teams.len());
    Ok(())
}
