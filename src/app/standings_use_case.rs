use tracing::{info, instrument};

use crate::app::ports::{RecordOutputPort, StatsSourcePort};
use crate::common::error::{Result, StatsError};
use crate::common::types::{Season, StandingsRow};
use crate::pipeline::StandingsNormalizer;

const PREVIEW_ROWS: usize = 5;

/// Fetches a season's standings, normalizes them and writes the result
pub struct StandingsUseCase {
    source: Box<dyn StatsSourcePort>,
    output: Box<dyn RecordOutputPort>,
    normalizer: StandingsNormalizer,
}

impl StandingsUseCase {
    pub fn new(
        source: Box<dyn StatsSourcePort>,
        output: Box<dyn RecordOutputPort>,
        normalizer: StandingsNormalizer,
    ) -> Self {
        Self {
            source,
            output,
            normalizer,
        }
    }

    #[instrument(skip(self, season), fields(season = %season))]
    pub async fn run(&self, season: &Season) -> Result<Vec<StandingsRow>> {
        info!("Fetching NBA standings for {}", season);
        let tables = self.source.standings_tables(season).await?;
        let table = tables.into_iter().next().ok_or_else(|| {
            StatsError::source_unavailable("standings query returned no tables")
        })?;
        info!("Columns available: {}", table.headers.join(", "));

        let rows = self.normalizer.normalize(table)?;
        info!("Retrieved {} NBA teams for {}", rows.len(), season);
        for row in rows.iter().take(PREVIEW_ROWS) {
            info!(
                team_id = row.team_id,
                points_per_game = row.points_per_game,
                "{} {}",
                row.city().unwrap_or("?"),
                row.name().unwrap_or("?")
            );
        }

        self.output.write_standings(&rows).await?;
        Ok(rows)
    }
}
