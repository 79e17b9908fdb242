use sports_stats::config::Config;
use sports_stats::{logging, tasks};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = logging::init_logging();

    let config = Config::load(None)?;
    let season = tasks::resolve_season(&config, None);
    let rows = tasks::standings_once(&config, &season).await?;
    println!("✅ Retrieved {} NBA teams for {}.", rows.len(), season);
    Ok(())
}
