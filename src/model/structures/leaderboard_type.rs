use clap::ValueEnum;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[repr(u8)]
pub enum LeaderboardType {
    Unranked = 0,
    Ranked = 3
}

impl TryFrom<i32> for LeaderboardType {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(LeaderboardType::Unranked),
            3 => Ok(LeaderboardType::Ranked),
            _ => Err(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::leaderboard_type::LeaderboardType;

    #[test]
    fn test_convert_ranked() {
        assert_eq!(LeaderboardType::try_from(3), Ok(LeaderboardType::Ranked));
    }

    #[test]
    fn test_convert_invalid() {
        assert_eq!(LeaderboardType::try_from(1), Err(()));
    }
}
