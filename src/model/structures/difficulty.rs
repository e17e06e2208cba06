use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;
use strum_macros::EnumIter;

/// Beat Saber difficulty tier, stored numerically (odd values only).
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[repr(u8)]
pub enum Difficulty {
    Easy = 1,
    Normal = 3,
    Hard = 5,
    Expert = 7,
    ExpertPlus = 9
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
            Difficulty::ExpertPlus => "Expert+"
        }
    }

    /// Lower-camel spelling used inside `.bplist` playlist files.
    pub fn playlist_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
            Difficulty::ExpertPlus => "expertPlus"
        }
    }
}

impl TryFrom<i32> for Difficulty {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Difficulty::Easy),
            3 => Ok(Difficulty::Normal),
            5 => Ok(Difficulty::Hard),
            7 => Ok(Difficulty::Expert),
            9 => Ok(Difficulty::ExpertPlus),
            _ => Err(())
        }
    }
}

#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    Unknown = 0,
    Standard = 1
}

impl Mode {
    /// Characteristic name used inside `.bplist` playlist files.
    pub fn characteristic_name(&self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Unknown => "Unknown"
        }
    }
}

impl From<i32> for Mode {
    fn from(v: i32) -> Self {
        match v {
            1 => Mode::Standard,
            _ => Mode::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::structures::difficulty::{Difficulty, Mode};

    #[test]
    fn test_convert_expert_plus() {
        assert_eq!(Difficulty::try_from(9), Ok(Difficulty::ExpertPlus));
    }

    #[test]
    fn test_convert_even_value_invalid() {
        assert_eq!(Difficulty::try_from(2), Err(()));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::ExpertPlus.display_name(), "Expert+");
        assert_eq!(Difficulty::ExpertPlus.playlist_name(), "expertPlus");
        assert_eq!(Difficulty::Hard.playlist_name(), "hard");
    }

    #[test]
    fn test_mode_fallback() {
        assert_eq!(Mode::from(1), Mode::Standard);
        assert_eq!(Mode::from(7), Mode::Unknown);
        assert_eq!(Mode::from(7).characteristic_name(), "Unknown");
    }
}
