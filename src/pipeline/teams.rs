use crate::common::types::{SourceTeam, TeamRecord};

impl From<&SourceTeam> for TeamRecord {
    fn from(team: &SourceTeam) -> Self {
        Self {
            id: team.id,
            abbreviation: team.abbreviation.clone(),
            city: team.city.clone(),
            name: team.full_name.clone(),
        }
    }
}

/// Project catalogue entries onto the four exported fields, preserving order.
pub fn simplify_teams(teams: &[SourceTeam]) -> Vec<TeamRecord> {
    teams.iter().map(TeamRecord::from).collect()
}
