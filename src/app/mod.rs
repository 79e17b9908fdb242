pub mod ports;
pub mod import_teams_use_case;
pub mod standings_use_case;
