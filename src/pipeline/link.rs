use serde::Serialize;

use crate::common::types::{StandingsRow, TeamRecord};

/// A team record paired with the standings row describing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStatLink {
    pub team_id: i64,
    pub name: String,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub points_per_game: f64,
    pub opp_points_per_game: Option<f64>,
    pub diff_points_pg: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkReport {
    pub matched: Vec<TeamStatLink>,
    pub unmatched: Vec<String>,
}

fn display_name(row: &StandingsRow) -> String {
    format!("{} {}", row.city().unwrap_or(""), row.name().unwrap_or(""))
        .trim()
        .to_lowercase()
}

/// Match each team to a standings row, first by id, then by "city name".
pub fn link_standings(teams: &[TeamRecord], rows: &[StandingsRow]) -> LinkReport {
    let mut report = LinkReport::default();

    for team in teams {
        let wanted = team.name.trim().to_lowercase();
        let found = rows
            .iter()
            .find(|row| row.source_team_id == team.id)
            .or_else(|| rows.iter().find(|row| display_name(row) == wanted));

        match found {
            Some(row) => report.matched.push(TeamStatLink {
                team_id: team.id,
                name: team.name.clone(),
                wins: row.wins.flatten(),
                losses: row.losses.flatten(),
                points_per_game: row.points_per_game,
                opp_points_per_game: row.opp_points_per_game.flatten(),
                diff_points_pg: row.diff_points_pg.flatten(),
            }),
            None => report.unmatched.push(team.name.clone()),
        }
    }

    report
}
