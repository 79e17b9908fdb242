use tracing::info;

use crate::app::ports::{RecordOutputPort, StatsSourcePort};
use crate::common::error::Result;
use crate::common::types::TeamRecord;
use crate::pipeline::teams::simplify_teams;

/// Fetches the franchise list and writes the simplified records
pub struct ImportTeamsUseCase {
    source: Box<dyn StatsSourcePort>,
    output: Box<dyn RecordOutputPort>,
}

impl ImportTeamsUseCase {
    pub fn new(source: Box<dyn StatsSourcePort>, output: Box<dyn RecordOutputPort>) -> Self {
        Self { source, output }
    }

    /// The file is written only after the full list has been built.
    pub async fn run(&self) -> Result<Vec<TeamRecord>> {
        info!("Fetching NBA teams");
        let teams = self.source.list_teams().await?;
        let records = simplify_teams(&teams);
        info!("Loaded {} NBA teams", records.len());

        self.output.write_teams(&records).await?;
        Ok(records)
    }
}
