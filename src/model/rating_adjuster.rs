use crate::{
    database::db_structs::{Leaderboard, ModifierValues},
    model::{
        constants::DEFAULT_MODIFIER_VALUES,
        structures::modifier::{Modifier, ModifierSelection}
    }
};

/// Pass/acc/tech ratings after the selected modifiers have been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustedRatings {
    pub pass: f64,
    pub acc: f64,
    pub tech: f64
}

/// The adjustment value for one modifier: the per-map override when the map
/// carries a `ModifierValues` record, otherwise the documented default.
pub fn modifier_value(values: Option<&ModifierValues>, modifier: Modifier) -> f64 {
    match values {
        Some(values) => values.get(modifier),
        None => DEFAULT_MODIFIER_VALUES[&modifier]
    }
}

/// Applies a modifier selection to a leaderboard's stored ratings.
///
/// The speed modifier's adjustment value only enters the multiplier when the
/// map has no per-speed rating override; when the override exists it already
/// accounts for the speed change and replaces the base ratings outright.
/// Non-speed modifiers stack additively into the multiplier either way.
pub fn adjust_ratings(leaderboard: &Leaderboard, selection: &ModifierSelection) -> AdjustedRatings {
    let values = leaderboard.modifier_values.as_ref();
    let mut multiplier = 1.0;

    if leaderboard.modifier_rating.is_none() {
        if let Some(speed) = selection.speed {
            multiplier += modifier_value(values, speed.modifier());
        }
    }

    if selection.ghost_notes {
        multiplier += modifier_value(values, Modifier::Gn);
    }
    if selection.no_arrows {
        multiplier += modifier_value(values, Modifier::Na);
    }
    if selection.no_bombs {
        multiplier += modifier_value(values, Modifier::Nb);
    }
    if selection.no_obstacles {
        multiplier += modifier_value(values, Modifier::No);
    }

    let (pass, acc, tech) = match (&leaderboard.modifier_rating, selection.speed) {
        (Some(rating), Some(speed)) => rating.ratings(speed),
        _ => (
            leaderboard.pass_rating.unwrap_or(0.0),
            leaderboard.acc_rating.unwrap_or(0.0),
            leaderboard.tech_rating.unwrap_or(0.0)
        )
    };

    AdjustedRatings {
        pass: pass * multiplier,
        acc: acc * multiplier,
        tech: tech * multiplier
    }
}
