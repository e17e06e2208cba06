pub mod difficulty;
pub mod leaderboard_type;
pub mod modifier;
pub mod sort;
