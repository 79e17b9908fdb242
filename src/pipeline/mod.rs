// Data processing pipeline: table operations, per-pipeline transforms, linking

pub mod link;
pub mod standings;
pub mod table;
pub mod teams;

pub use standings::StandingsNormalizer;
pub use teams::simplify_teams;
