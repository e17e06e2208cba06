use crate::model::structures::{
    difficulty::{Difficulty, Mode},
    leaderboard_type::LeaderboardType,
    modifier::{Modifier, SpeedModifier}
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One leaderboard as mirrored from the remote service, with its rating
/// sub-records and difficulty metadata joined in.
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub leaderboard_id: String,
    pub leaderboard_type: LeaderboardType,
    /// Base difficulty ratings. `None` means the leaderboard is not rated.
    pub pass_rating: Option<f64>,
    pub acc_rating: Option<f64>,
    pub tech_rating: Option<f64>,
    pub stars: Option<f64>,
    /// Absent when the map was mirrored without its difficulty row.
    pub difficulty: Option<SongDifficulty>,
    /// Per-map modifier adjustment values; defaults apply when absent.
    pub modifier_values: Option<ModifierValues>,
    /// Per-speed rating overrides; absent for most maps.
    pub modifier_rating: Option<ModifierRatings>,
    /// Populated only when the query joined a specific player's scores.
    pub scores: Vec<Score>
}

#[derive(Debug, Clone, Serialize)]
pub struct SongDifficulty {
    /// Song key (BeatSaver id) shared by all difficulties of one song.
    pub key: String,
    pub difficulty: Difficulty,
    pub mode: Mode,
    pub song: Song
}

#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub name: String,
    pub hash: String,
    pub mapper: String
}

#[derive(Debug, Clone, Serialize)]
pub struct Score {
    pub score_id: i64,
    pub player_id: String,
    /// Accuracy as a fraction in [0, 1].
    pub accuracy: f64,
    pub pp: f64,
    pub time_set: DateTime<FixedOffset>
}

/// Per-map multiplicative adjustment values, one per modifier code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierValues {
    pub da: f64,
    pub fs: f64,
    pub sf: f64,
    pub ss: f64,
    pub gn: f64,
    pub na: f64,
    pub nb: f64,
    pub nf: f64,
    pub no: f64,
    pub pm: f64,
    pub sc: f64,
    pub sa: f64,
    pub op: f64
}

impl ModifierValues {
    pub fn get(&self, modifier: Modifier) -> f64 {
        match modifier {
            Modifier::Da => self.da,
            Modifier::Fs => self.fs,
            Modifier::Sf => self.sf,
            Modifier::Ss => self.ss,
            Modifier::Gn => self.gn,
            Modifier::Na => self.na,
            Modifier::Nb => self.nb,
            Modifier::Nf => self.nf,
            Modifier::No => self.no,
            Modifier::Pm => self.pm,
            Modifier::Sc => self.sc,
            Modifier::Sa => self.sa,
            Modifier::Op => self.op
        }
    }
}

/// Replacement pass/acc/tech ratings used instead of the base ratings when a
/// speed modifier is selected and the map has been re-rated for that speed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierRatings {
    pub sf_pass_rating: f64,
    pub sf_acc_rating: f64,
    pub sf_tech_rating: f64,
    pub sf_stars: f64,

    pub fs_pass_rating: f64,
    pub fs_acc_rating: f64,
    pub fs_tech_rating: f64,
    pub fs_stars: f64,

    pub ss_pass_rating: f64,
    pub ss_acc_rating: f64,
    pub ss_tech_rating: f64,
    pub ss_stars: f64
}

impl ModifierRatings {
    /// The (pass, acc, tech) rating triple for one speed modifier.
    pub fn ratings(&self, speed: SpeedModifier) -> (f64, f64, f64) {
        match speed {
            SpeedModifier::SuperFast => (self.sf_pass_rating, self.sf_acc_rating, self.sf_tech_rating),
            SpeedModifier::Faster => (self.fs_pass_rating, self.fs_acc_rating, self.fs_tech_rating),
            SpeedModifier::Slower => (self.ss_pass_rating, self.ss_acc_rating, self.ss_tech_rating)
        }
    }
}
