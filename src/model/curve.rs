use crate::model::{
    constants::{
        ACC_CURVE, ACC_PP_SCALE, INFLATE_EXPONENT, INFLATE_PIVOT, PASS_PP_EXPONENT, PASS_PP_OFFSET, PASS_PP_SCALE,
        STAR_DIVIDER, STAR_REFERENCE_ACC, STAR_REFERENCE_WEIGHT, TECH_PP_GROWTH, TECH_PP_SCALE
    },
    rating_adjuster::AdjustedRatings
};

/// Outcome of inverting the accuracy curve for one leaderboard.
///
/// `Excluded` covers every way a leaderboard can fail to qualify: the target
/// is unreachable even at 100%, the interpolated accuracy breaches 100%, or
/// it falls outside the caller's accuracy bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequiredAccuracy {
    /// The accuracy fraction at which the map yields exactly the target pp.
    Qualifies(f64),
    Excluded
}

impl RequiredAccuracy {
    pub fn qualifies(&self) -> Option<f64> {
        match self {
            RequiredAccuracy::Qualifies(acc) => Some(*acc),
            RequiredAccuracy::Excluded => None
        }
    }
}

/// Caller-supplied accuracy window, as fractions in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AccuracyBounds {
    pub min: Option<f64>,
    pub max: Option<f64>
}

impl AccuracyBounds {
    fn contains(&self, acc: f64) -> bool {
        if self.max.is_some_and(|max| acc > max) {
            return false;
        }
        if self.min.is_some_and(|min| acc < min) {
            return false;
        }
        true
    }
}

/// Pass pp from the pass rating alone, clamped to zero when the exponential
/// blows up or the rating is too small to clear the offset.
pub fn pass_pp(pass_rating: f64) -> f64 {
    let pp = PASS_PP_SCALE * f64::exp(pass_rating.powf(PASS_PP_EXPONENT)) - PASS_PP_OFFSET;

    if !pp.is_finite() || pp < 0.0 {
        return 0.0;
    }

    pp
}

/// Concave compression applied to every raw pp sum. The same transform is
/// applied to the candidate totals during inversion, so the comparison against
/// the target stays self-consistent; removing it would subtly reshape the
/// curve at low pp values.
pub fn inflate(pp: f64) -> f64 {
    INFLATE_PIVOT * (pp / INFLATE_PIVOT).powf(INFLATE_EXPONENT)
}

/// Inflated pp total at one curve control point.
fn curve_total(pass_pp: f64, ratings: &AdjustedRatings, acc: f64, weight: f64) -> f64 {
    let acc_pp = weight * ratings.acc * ACC_PP_SCALE;
    let tech_pp = f64::exp(TECH_PP_GROWTH * acc) * TECH_PP_SCALE * ratings.tech;

    inflate(pass_pp + acc_pp + tech_pp)
}

/// Walks the accuracy curve top-down to find the minimum accuracy at which
/// the map is worth at least `target_pp`.
///
/// The first control point whose total drops to the target is the lower end
/// of the bracketing segment; the exact accuracy is linearly interpolated on
/// the totals. A target above the total at 100% accuracy is unreachable, and
/// a target below the total at 0% never brackets; both exclude the map.
pub fn required_accuracy(ratings: &AdjustedRatings, target_pp: f64, bounds: &AccuracyBounds) -> RequiredAccuracy {
    let pass_pp = pass_pp(ratings.pass);

    for (i, &(acc, weight)) in ACC_CURVE.iter().enumerate() {
        let total = curve_total(pass_pp, ratings, acc, weight);

        if total <= target_pp {
            if i == 0 {
                return RequiredAccuracy::Excluded;
            }

            let (prev_acc, prev_weight) = ACC_CURVE[i - 1];
            let prev_total = curve_total(pass_pp, ratings, prev_acc, prev_weight);

            let fraction = (target_pp - prev_total) / (total - prev_total);
            let required = prev_acc + fraction * (acc - prev_acc);

            if required > 1.0 || !bounds.contains(required) {
                return RequiredAccuracy::Excluded;
            }

            return RequiredAccuracy::Qualifies(required);
        }
    }

    RequiredAccuracy::Excluded
}

/// Star rating of the adjusted ratings, evaluated at the fixed 96% reference
/// accuracy. Display and filter value only; independent of the inversion.
pub fn star_rating(ratings: &AdjustedRatings) -> f64 {
    let acc_pp = STAR_REFERENCE_WEIGHT * ratings.acc * ACC_PP_SCALE;
    let tech_pp = f64::exp(TECH_PP_GROWTH * STAR_REFERENCE_ACC) * TECH_PP_SCALE * ratings.tech;

    inflate(pass_pp(ratings.pass) + acc_pp + tech_pp) / STAR_DIVIDER
}

#[cfg(test)]
mod tests {
    use crate::model::{
        curve::{pass_pp, required_accuracy, star_rating, AccuracyBounds, RequiredAccuracy},
        rating_adjuster::AdjustedRatings
    };
    use approx::assert_abs_diff_eq;

    const RATINGS: AdjustedRatings = AdjustedRatings {
        pass: 5.0,
        acc: 3.0,
        tech: 2.0
    };

    #[test]
    fn test_pass_pp_reference_value() {
        assert_abs_diff_eq!(pass_pp(5.0), 66.50915802841699, epsilon = 1e-9);
    }

    #[test]
    fn test_pass_pp_clamps_negative() {
        // Rating 0 gives 15.2 * e^0 - 30 < 0
        assert_abs_diff_eq!(pass_pp(0.0), 0.0);
    }

    #[test]
    fn test_required_accuracy_golden_value() {
        let result = required_accuracy(&RATINGS, 400.0, &AccuracyBounds::default());

        match result {
            RequiredAccuracy::Qualifies(acc) => {
                assert_abs_diff_eq!(acc, 0.9936331594589622, epsilon = 1e-9);
            }
            RequiredAccuracy::Excluded => panic!("expected a qualifying accuracy")
        }
    }

    #[test]
    fn test_required_accuracy_monotonic_in_target() {
        let mut previous = 0.0;

        for target in [100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0] {
            let acc = required_accuracy(&RATINGS, target, &AccuracyBounds::default())
                .qualifies()
                .unwrap_or_else(|| panic!("target {target} should be reachable"));

            assert!(acc >= previous, "required accuracy regressed at target {target}");
            previous = acc;
        }
    }

    #[test]
    fn test_unreachable_target_excluded() {
        // Max total for these ratings is ~904.6pp
        let result = required_accuracy(&RATINGS, 1000.0, &AccuracyBounds::default());
        assert_eq!(result, RequiredAccuracy::Excluded);
    }

    #[test]
    fn test_zero_target_excluded() {
        // Even 0% accuracy is worth ~35pp here, so no control point brackets
        // a zero target and the map is excluded by policy.
        let result = required_accuracy(&RATINGS, 0.0, &AccuracyBounds::default());
        assert_eq!(result, RequiredAccuracy::Excluded);
    }

    #[test]
    fn test_bounds_exclude() {
        let bounds = AccuracyBounds {
            min: Some(0.995),
            max: None
        };
        assert_eq!(required_accuracy(&RATINGS, 400.0, &bounds), RequiredAccuracy::Excluded);

        let bounds = AccuracyBounds {
            min: None,
            max: Some(0.99)
        };
        assert_eq!(required_accuracy(&RATINGS, 400.0, &bounds), RequiredAccuracy::Excluded);

        let bounds = AccuracyBounds {
            min: Some(0.99),
            max: Some(0.995)
        };
        assert!(required_accuracy(&RATINGS, 400.0, &bounds).qualifies().is_some());
    }

    #[test]
    fn test_star_rating_golden_value() {
        assert_abs_diff_eq!(star_rating(&RATINGS), 2.5520454978874625, epsilon = 1e-9);
    }

    #[test]
    fn test_star_rating_zero_ratings() {
        let ratings = AdjustedRatings {
            pass: 0.0,
            acc: 0.0,
            tech: 0.0
        };
        assert_abs_diff_eq!(star_rating(&ratings), 0.0);
    }
}
