use crate::model::structures::modifier::Modifier;
use lazy_static::lazy_static;
use std::collections::HashMap;

// Pass pp: 15.2 * exp(pass_rating^(1/2.62)) - 30
pub const PASS_PP_SCALE: f64 = 15.2;
pub const PASS_PP_EXPONENT: f64 = 1.0 / 2.62;
pub const PASS_PP_OFFSET: f64 = 30.0;

// Acc pp: curve_weight * acc_rating * 34
pub const ACC_PP_SCALE: f64 = 34.0;

// Tech pp: exp(1.9 * accuracy) * 1.08 * tech_rating
pub const TECH_PP_GROWTH: f64 = 1.9;
pub const TECH_PP_SCALE: f64 = 1.08;

// Inflation: 650 * (pp / 650)^1.3, applied to every pp total
pub const INFLATE_PIVOT: f64 = 650.0;
pub const INFLATE_EXPONENT: f64 = 1.3;

// Star rating is the inflated total at 96% accuracy divided by 52
pub const STAR_REFERENCE_ACC: f64 = 0.96;
pub const STAR_REFERENCE_WEIGHT: f64 = 1.094;
pub const STAR_DIVIDER: f64 = 52.0;

/// `(accuracy, weight)` control points of the accuracy curve, strictly
/// descending in accuracy. The weight feeds the acc-pp term; the curve is
/// walked top-down when inverting a target pp into a required accuracy.
pub const ACC_CURVE: [(f64, f64); 32] = [
    (1.0, 7.424),
    (0.999, 6.241),
    (0.9975, 5.158),
    (0.995, 4.010),
    (0.9925, 3.241),
    (0.99, 2.700),
    (0.9875, 2.303),
    (0.985, 2.007),
    (0.9825, 1.786),
    (0.98, 1.618),
    (0.9775, 1.490),
    (0.975, 1.392),
    (0.9725, 1.315),
    (0.97, 1.256),
    (0.965, 1.167),
    (0.96, 1.094),
    (0.955, 1.039),
    (0.95, 1.000),
    (0.94, 0.931),
    (0.93, 0.867),
    (0.92, 0.813),
    (0.91, 0.768),
    (0.9, 0.729),
    (0.875, 0.650),
    (0.85, 0.581),
    (0.825, 0.522),
    (0.8, 0.473),
    (0.75, 0.404),
    (0.7, 0.345),
    (0.65, 0.296),
    (0.6, 0.256),
    (0.0, 0.000)
];

lazy_static! {
    /// Adjustment values applied when a map carries no per-map
    /// `ModifierValues` record.
    pub static ref DEFAULT_MODIFIER_VALUES: HashMap<Modifier, f64> = HashMap::from([
        (Modifier::Da, 0.0),
        (Modifier::Fs, 0.2),
        (Modifier::Sf, 0.36),
        (Modifier::Ss, -0.3),
        (Modifier::Gn, 0.04),
        (Modifier::Na, -0.3),
        (Modifier::Nb, -0.2),
        (Modifier::Nf, -0.5),
        (Modifier::No, -0.2),
        (Modifier::Pm, 0.0),
        (Modifier::Sc, 0.0),
        (Modifier::Sa, 0.0),
        (Modifier::Op, -0.5),
    ]);
}

#[cfg(test)]
mod tests {
    use crate::model::{
        constants::{ACC_CURVE, DEFAULT_MODIFIER_VALUES},
        structures::modifier::Modifier
    };
    use strum::IntoEnumIterator;

    #[test]
    fn test_curve_descends() {
        for window in ACC_CURVE.windows(2) {
            assert!(window[0].0 > window[1].0, "accuracy must strictly descend");
            assert!(window[0].1 >= window[1].1, "weight must not increase");
        }
    }

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(ACC_CURVE[0], (1.0, 7.424));
        assert_eq!(ACC_CURVE[31], (0.0, 0.0));
    }

    #[test]
    fn test_every_modifier_has_a_default() {
        for modifier in Modifier::iter() {
            assert!(DEFAULT_MODIFIER_VALUES.contains_key(&modifier));
        }
    }
}
