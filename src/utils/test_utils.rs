use crate::{
    database::db_structs::{Leaderboard, ModifierRatings, ModifierValues, Score, Song, SongDifficulty},
    model::structures::{
        difficulty::{Difficulty, Mode},
        leaderboard_type::LeaderboardType
    }
};
use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A ranked leaderboard with the given base ratings, no modifier sub-records
/// and no scores.
pub fn generate_leaderboard(id: &str, pass_rating: f64, acc_rating: f64, tech_rating: f64) -> Leaderboard {
    Leaderboard {
        leaderboard_id: id.to_string(),
        leaderboard_type: LeaderboardType::Ranked,
        pass_rating: Some(pass_rating),
        acc_rating: Some(acc_rating),
        tech_rating: Some(tech_rating),
        stars: Some(pass_rating / 2.0),
        difficulty: Some(SongDifficulty {
            key: "25f".to_string(),
            difficulty: Difficulty::ExpertPlus,
            mode: Mode::Standard,
            song: Song {
                name: format!("Synthetic Song {id}"),
                hash: format!("hash-{id}"),
                mapper: "Synthetic Mapper".to_string()
            }
        }),
        modifier_values: None,
        modifier_rating: None,
        scores: Vec::new()
    }
}

/// A ranked leaderboard carrying one score by the given player.
pub fn generate_leaderboard_with_score(
    id: &str,
    pass_rating: f64,
    acc_rating: f64,
    tech_rating: f64,
    player_id: &str,
    accuracy: f64,
    pp: f64
) -> Leaderboard {
    let mut leaderboard = generate_leaderboard(id, pass_rating, acc_rating, tech_rating);
    leaderboard.scores.push(Score {
        score_id: 1,
        player_id: player_id.to_string(),
        accuracy,
        pp,
        time_set: Utc::now().fixed_offset()
    });

    leaderboard
}

/// A leaderboard pinned to a specific song hash and difficulty tier, for
/// playlist grouping tests.
pub fn generate_leaderboard_for_song(id: &str, hash: &str, difficulty: Difficulty) -> Leaderboard {
    let mut leaderboard = generate_leaderboard(id, 5.0, 3.0, 2.0);

    if let Some(song_difficulty) = leaderboard.difficulty.as_mut() {
        song_difficulty.key = format!("key-{hash}");
        song_difficulty.difficulty = difficulty;
        song_difficulty.song.hash = hash.to_string();
        song_difficulty.song.name = format!("Song {hash}");
    }

    leaderboard
}

/// Per-map modifier values, deliberately offset from the documented defaults
/// so tests can tell which table was consulted.
pub fn generate_modifier_values() -> ModifierValues {
    ModifierValues {
        da: 0.0,
        fs: 0.25,
        sf: 0.4,
        ss: -0.25,
        gn: 0.05,
        na: -0.35,
        nb: -0.25,
        nf: -0.5,
        no: -0.25,
        pm: 0.0,
        sc: 0.0,
        sa: 0.0,
        op: -0.5
    }
}

/// Speed-override ratings: SF gets the given triple, FS and SS scale it down.
pub fn generate_modifier_ratings(sf_pass: f64, sf_acc: f64, sf_tech: f64) -> ModifierRatings {
    ModifierRatings {
        sf_pass_rating: sf_pass,
        sf_acc_rating: sf_acc,
        sf_tech_rating: sf_tech,
        sf_stars: sf_pass / 2.0,

        fs_pass_rating: sf_pass * 0.8,
        fs_acc_rating: sf_acc * 0.8,
        fs_tech_rating: sf_tech * 0.8,
        fs_stars: sf_pass * 0.8 / 2.0,

        ss_pass_rating: sf_pass * 0.6,
        ss_acc_rating: sf_acc * 0.6,
        ss_tech_rating: sf_tech * 0.6,
        ss_stars: sf_pass * 0.6 / 2.0
    }
}

/// A reproducible batch of ranked leaderboards with ratings spread across the
/// realistic range.
pub fn generate_ranked_batch(count: usize, seed: u64) -> Vec<Leaderboard> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let pass = rng.random_range(1.0..12.0);
            let acc = rng.random_range(0.5..6.0);
            let tech = rng.random_range(0.2..4.0);

            generate_leaderboard(&format!("lb-{i}"), pass, acc, tech)
        })
        .collect()
}
