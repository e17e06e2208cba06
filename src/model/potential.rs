use crate::{
    database::{
        db::LeaderboardFilter,
        db_structs::Leaderboard
    },
    model::{
        curve::{required_accuracy, star_rating, AccuracyBounds},
        rating_adjuster::adjust_ratings,
        structures::{
            modifier::ModifierSelection,
            sort::{SortDirection, SortKey}
        },
        QueryError
    },
    utils::progress_utils::progress_bar
};

pub const DEFAULT_MIN_STARS: f64 = 0.0;
pub const DEFAULT_MAX_STARS: f64 = 100.0;

/// Inputs of one potential-score ranking run. All values arrive typed and
/// validated from the command layer; accuracy bounds are percentages.
#[derive(Debug, Clone)]
pub struct PotentialQuery {
    /// Rank every ranked leaderboard instead of only those the player scored on.
    pub all_leaderboards: bool,
    pub target_pp: f64,
    /// Only meaningful with `all_leaderboards: false`: restricts the scan to
    /// maps where the player's existing score is worth less than the target.
    pub comparison: bool,
    pub sort: Option<SortKey>,
    pub direction: SortDirection,
    /// Apply the star bounds to the modifier-adjusted star rating after
    /// computation instead of to the stored base stars at fetch time.
    pub modified_stars: bool,
    pub min_acc: Option<f64>,
    pub max_acc: Option<f64>,
    pub min_stars: f64,
    pub max_stars: f64,
    pub modifiers: ModifierSelection,
    pub player_id: Option<String>
}

/// One qualifying leaderboard. Accuracies are percentages here; the curve
/// works in fractions but every outward surface reports percent.
#[derive(Debug, Clone)]
pub struct PotentialResult {
    pub leaderboard: Leaderboard,
    pub required_acc: f64,
    pub current_acc: f64,
    pub stars: f64
}

impl PotentialQuery {
    pub fn validate(&self) -> Result<(), QueryError> {
        if let (Some(min), Some(max)) = (self.min_acc, self.max_acc) {
            if min > max {
                return Err(QueryError::AccuracyBounds);
            }
        }

        if self.min_stars > self.max_stars {
            return Err(QueryError::StarBounds);
        }

        if !self.all_leaderboards && self.player_id.is_none() {
            return Err(QueryError::MissingPlayer);
        }

        Ok(())
    }

    /// The fetch-side filter derived from this query. Star bounds move to the
    /// post-computation filter when `modified_stars` is set.
    pub fn leaderboard_filter(&self) -> LeaderboardFilter {
        LeaderboardFilter {
            min_stars: (!self.modified_stars).then_some(self.min_stars),
            max_stars: (!self.modified_stars).then_some(self.max_stars),
            player_id: if self.all_leaderboards {
                None
            } else {
                self.player_id.clone()
            },
            max_score_pp: self.comparison.then_some(self.target_pp)
        }
    }

    fn accuracy_bounds(&self) -> AccuracyBounds {
        AccuracyBounds {
            min: self.min_acc.map(|min| min / 100.0),
            max: self.max_acc.map(|max| max / 100.0)
        }
    }
}

/// Runs the per-leaderboard computation over a fetched batch and sorts the
/// qualifying results. Leaderboards that fail any per-row step are skipped;
/// nothing aborts the batch.
pub fn rank_leaderboards(leaderboards: Vec<Leaderboard>, query: &PotentialQuery) -> Vec<PotentialResult> {
    let bar = progress_bar(leaderboards.len() as u64, "Ranking leaderboards".to_string());

    let mut results: Vec<PotentialResult> = leaderboards
        .into_iter()
        .filter_map(|leaderboard| {
            let result = evaluate_leaderboard(leaderboard, query);
            bar.inc(1);
            result
        })
        .collect();

    bar.finish_and_clear();

    if let Some(sort) = query.sort {
        sort_results(&mut results, sort, query.direction);
    }

    results
}

/// Adjust ratings, invert the curve, and apply the post-computation filters
/// for a single leaderboard. `None` means the map does not qualify.
fn evaluate_leaderboard(leaderboard: Leaderboard, query: &PotentialQuery) -> Option<PotentialResult> {
    leaderboard.difficulty.as_ref()?;

    let ratings = adjust_ratings(&leaderboard, &query.modifiers);
    let required = required_accuracy(&ratings, query.target_pp, &query.accuracy_bounds()).qualifies()?;
    let stars = star_rating(&ratings);

    if query.modified_stars && (stars < query.min_stars || stars > query.max_stars) {
        return None;
    }

    let current_acc = if query.all_leaderboards {
        0.0
    } else {
        leaderboard.scores.first().map(|s| s.accuracy * 100.0).unwrap_or(0.0)
    };

    Some(PotentialResult {
        leaderboard,
        required_acc: required * 100.0,
        current_acc,
        stars
    })
}

/// Comparators are written descending; an ascending direction swaps the
/// operands before comparing.
fn sort_results(results: &mut [PotentialResult], sort: SortKey, direction: SortDirection) {
    results.sort_by(|a, b| {
        let (a, b) = match direction {
            SortDirection::Ascending => (b, a),
            SortDirection::Descending => (a, b)
        };

        match sort {
            SortKey::Stars => b.stars.total_cmp(&a.stars),
            SortKey::Acc => b.required_acc.total_cmp(&a.required_acc),
            SortKey::Increase => {
                (b.required_acc - b.current_acc).total_cmp(&(a.required_acc - a.current_acc))
            }
        }
    });
}
