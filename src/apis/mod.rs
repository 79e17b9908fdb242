pub mod nba_stats;
pub mod nba_teams;

pub use nba_stats::NbaStatsApi;
