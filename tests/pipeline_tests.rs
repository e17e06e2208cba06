mod common;

use approx::assert_abs_diff_eq;
use potential_processor::{
    model::{
        potential::{rank_leaderboards, PotentialQuery},
        structures::{
            modifier::ModifierSelection,
            sort::{SortDirection, SortKey}
        }
    },
    report::{playlist::build_playlist, text_report::build_text_report},
    utils::test_utils::{generate_leaderboard, generate_ranked_batch}
};

fn query(target_pp: f64) -> PotentialQuery {
    PotentialQuery {
        all_leaderboards: true,
        target_pp,
        comparison: false,
        sort: Some(SortKey::Stars),
        direction: SortDirection::Descending,
        modified_stars: false,
        min_acc: None,
        max_acc: None,
        min_stars: 0.0,
        max_stars: 100.0,
        modifiers: ModifierSelection::default(),
        player_id: None
    }
}

#[test]
fn test_batch_ranking_end_to_end() {
    common::init_test_env();

    let mut leaderboards = generate_ranked_batch(200, 42);
    leaderboards.push(generate_leaderboard("golden", 5.0, 3.0, 2.0));

    let query = query(400.0);
    let results = rank_leaderboards(leaderboards, &query);

    assert!(!results.is_empty());

    // Sorted by stars, descending
    for window in results.windows(2) {
        assert!(window[0].stars >= window[1].stars);
    }

    let golden = results
        .iter()
        .find(|r| r.leaderboard.leaderboard_id == "golden")
        .expect("the golden leaderboard should qualify at 400pp");
    assert_abs_diff_eq!(golden.required_acc, 99.36331594589622, epsilon = 1e-9);

    // One report row per result, plus the header
    let report = build_text_report(&results, false);
    assert_eq!(report.lines().count(), results.len() + 1);

    // Every qualifying leaderboard maps to a distinct synthetic song
    let playlist = build_playlist(results.iter().map(|r| &r.leaderboard), "plays-for-400-pp", "tester");
    assert_eq!(playlist.songs.len(), results.len());
}

#[test]
fn test_bounds_exclusion_is_consistent_across_exports() {
    common::init_test_env();

    // The golden map needs 99.36%; a 99% cap excludes it everywhere.
    let mut leaderboards = vec![generate_leaderboard("kept", 8.0, 4.0, 2.5)];
    leaderboards.push(generate_leaderboard("capped", 5.0, 3.0, 2.0));

    let query = PotentialQuery {
        max_acc: Some(99.0),
        ..query(400.0)
    };
    let results = rank_leaderboards(leaderboards, &query);

    // "kept" needs ~98.79%, which fits the cap
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].leaderboard.leaderboard_id, "kept");

    let report = build_text_report(&results, false);
    assert!(!report.contains("capped"));

    let playlist = build_playlist(results.iter().map(|r| &r.leaderboard), "p", "a");
    let json = playlist.to_json().unwrap();
    assert!(!json.contains("hash-capped"));
}

#[test]
fn test_unreachable_target_yields_empty_result_set() {
    common::init_test_env();

    let leaderboards = generate_ranked_batch(50, 7);
    let results = rank_leaderboards(leaderboards, &query(100_000.0));

    assert!(results.is_empty());
}
