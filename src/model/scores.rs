use crate::{
    database::db::ScoreFilter,
    model::{structures::leaderboard_type::LeaderboardType, QueryError}
};

/// Inputs of a scores-playlist run: the player's own scores filtered by
/// accuracy and pp windows, deduplicated into a named playlist.
#[derive(Debug, Clone)]
pub struct ScoresQuery {
    pub name: String,
    pub player_id: String,
    /// `None` keeps both ranked and unranked scores.
    pub leaderboard_type: Option<LeaderboardType>,
    pub min_acc: Option<f64>,
    pub max_acc: Option<f64>,
    pub min_pp: Option<f64>,
    pub max_pp: Option<f64>
}

impl ScoresQuery {
    pub fn validate(&self) -> Result<(), QueryError> {
        if let (Some(min), Some(max)) = (self.min_acc, self.max_acc) {
            if min > max {
                return Err(QueryError::AccuracyBounds);
            }
        }

        if let (Some(min), Some(max)) = (self.min_pp, self.max_pp) {
            if min > max {
                return Err(QueryError::PpBounds);
            }
        }

        Ok(())
    }

    /// SQL-side filter; accuracy converts from percent to fraction here.
    pub fn score_filter(&self) -> ScoreFilter {
        ScoreFilter {
            player_id: self.player_id.clone(),
            leaderboard_type: self.leaderboard_type,
            min_accuracy: self.min_acc.map(|min| min / 100.0),
            max_accuracy: self.max_acc.map(|max| max / 100.0),
            min_pp: self.min_pp,
            max_pp: self.max_pp
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        scores::ScoresQuery,
        structures::leaderboard_type::LeaderboardType,
        QueryError
    };

    fn base_query() -> ScoresQuery {
        ScoresQuery {
            name: "my-plays".to_string(),
            player_id: "100".to_string(),
            leaderboard_type: Some(LeaderboardType::Ranked),
            min_acc: None,
            max_acc: None,
            min_pp: None,
            max_pp: None
        }
    }

    #[test]
    fn test_validate_rejects_inverted_pp_bounds() {
        let query = ScoresQuery {
            min_pp: Some(500.0),
            max_pp: Some(400.0),
            ..base_query()
        };
        assert_eq!(query.validate(), Err(QueryError::PpBounds));
    }

    #[test]
    fn test_validate_rejects_inverted_accuracy_bounds() {
        let query = ScoresQuery {
            min_acc: Some(99.0),
            max_acc: Some(90.0),
            ..base_query()
        };
        assert_eq!(query.validate(), Err(QueryError::AccuracyBounds));
    }

    #[test]
    fn test_score_filter_converts_percent_to_fraction() {
        let query = ScoresQuery {
            min_acc: Some(90.0),
            max_acc: Some(99.0),
            min_pp: Some(100.0),
            ..base_query()
        };
        let filter = query.score_filter();

        assert_eq!(filter.min_accuracy, Some(0.9));
        assert_eq!(filter.max_accuracy, Some(0.99));
        assert_eq!(filter.min_pp, Some(100.0));
        assert_eq!(filter.leaderboard_type, Some(LeaderboardType::Ranked));
    }
}
