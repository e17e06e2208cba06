use crate::model::{
    potential::{PotentialQuery, DEFAULT_MAX_STARS, DEFAULT_MIN_STARS},
    scores::ScoresQuery,
    structures::leaderboard_type::LeaderboardType
};
use itertools::Itertools;

/// English list formatting: "a", "a and b", "a, b, and c".
pub fn format_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [head @ .., last] => format!("{}, and {last}", head.join(", "))
    }
}

/// One-line description of a potential run and its active filters.
pub fn potential_summary(count: usize, query: &PotentialQuery) -> String {
    let mut parts = vec![format!("leaderboards each worth {}pp", query.target_pp)];

    let mods = query.modifiers.active();
    if !mods.is_empty() {
        parts.push(format!("with {}", mods.iter().join("/")));
    }

    if let Some(min_acc) = query.min_acc {
        parts.push(format!("higher than {min_acc}%"));
    }
    if let Some(max_acc) = query.max_acc {
        parts.push(format!("lower than {max_acc}%"));
    }

    if query.min_stars != DEFAULT_MIN_STARS {
        parts.push(format!("higher than {}*", query.min_stars));
    }
    if query.max_stars != DEFAULT_MAX_STARS {
        parts.push(format!("lower than {}*", query.max_stars));
    }

    format!("{count} {}", format_list(&parts))
}

/// One-line description of a scores-playlist run.
pub fn scores_summary(count: usize, query: &ScoresQuery) -> String {
    let status = match query.leaderboard_type {
        Some(LeaderboardType::Ranked) => "ranked ",
        Some(LeaderboardType::Unranked) => "unranked ",
        None => ""
    };

    let mut parts = Vec::new();

    if let Some(min_acc) = query.min_acc {
        parts.push(format!("higher than {min_acc}%"));
    }
    if let Some(max_acc) = query.max_acc {
        parts.push(format!("lower than {max_acc}%"));
    }
    if let Some(min_pp) = query.min_pp {
        parts.push(format!("higher than {min_pp}pp"));
    }
    if let Some(max_pp) = query.max_pp {
        parts.push(format!("lower than {max_pp}pp"));
    }

    if parts.is_empty() {
        format!("{count} {status}leaderboards")
    } else {
        format!("{count} {status}leaderboards {}", format_list(&parts))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::{
            potential::{PotentialQuery, DEFAULT_MAX_STARS, DEFAULT_MIN_STARS},
            scores::ScoresQuery,
            structures::{
                leaderboard_type::LeaderboardType,
                modifier::ModifierSelection,
                sort::SortDirection
            }
        },
        report::summary::{format_list, potential_summary, scores_summary}
    };

    fn potential_query() -> PotentialQuery {
        PotentialQuery {
            all_leaderboards: true,
            target_pp: 400.0,
            comparison: false,
            sort: None,
            direction: SortDirection::Descending,
            modified_stars: false,
            min_acc: None,
            max_acc: None,
            min_stars: DEFAULT_MIN_STARS,
            max_stars: DEFAULT_MAX_STARS,
            modifiers: ModifierSelection::default(),
            player_id: None
        }
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "");
        assert_eq!(format_list(&["a".into()]), "a");
        assert_eq!(format_list(&["a".into(), "b".into()]), "a and b");
        assert_eq!(format_list(&["a".into(), "b".into(), "c".into()]), "a, b, and c");
    }

    #[test]
    fn test_potential_summary_plain() {
        assert_eq!(potential_summary(12, &potential_query()), "12 leaderboards each worth 400pp");
    }

    #[test]
    fn test_potential_summary_with_filters() {
        let query = PotentialQuery {
            min_acc: Some(90.0),
            max_stars: 10.0,
            modifiers: ModifierSelection::from_flags(true, false, false, true, false, false, false),
            ..potential_query()
        };

        assert_eq!(
            potential_summary(3, &query),
            "3 leaderboards each worth 400pp, with SF/GN, higher than 90%, and lower than 10*"
        );
    }

    #[test]
    fn test_scores_summary() {
        let query = ScoresQuery {
            name: "p".to_string(),
            player_id: "100".to_string(),
            leaderboard_type: Some(LeaderboardType::Ranked),
            min_acc: Some(90.0),
            max_acc: None,
            min_pp: None,
            max_pp: Some(400.0)
        };

        assert_eq!(scores_summary(7, &query), "7 ranked leaderboards higher than 90% and lower than 400pp");
    }
}
