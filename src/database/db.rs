use super::db_structs::{Leaderboard, ModifierRatings, ModifierValues, Score, Song, SongDifficulty};
use crate::model::structures::{
    difficulty::{Difficulty, Mode},
    leaderboard_type::LeaderboardType
};
use indexmap::IndexMap;
use postgres_types::ToSql;
use std::sync::Arc;
use tokio_postgres::{Client, Error, NoTls, Row};
use tracing::{error, info};

/// Fetch-side filter for the potential pipeline. Star bounds are pushed into
/// SQL against the stored base stars; the score join is only added when a
/// player id is present.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardFilter {
    pub min_stars: Option<f64>,
    pub max_stars: Option<f64>,
    pub player_id: Option<String>,
    /// With a score join, additionally require the existing score to be worth
    /// less than this many pp.
    pub max_score_pp: Option<f64>
}

/// Fetch-side filter for the scores-playlist query.
#[derive(Debug, Clone)]
pub struct ScoreFilter {
    pub player_id: String,
    pub leaderboard_type: Option<LeaderboardType>,
    /// Fractions in [0, 1], already converted from percent.
    pub min_accuracy: Option<f64>,
    pub max_accuracy: Option<f64>,
    pub min_pp: Option<f64>,
    pub max_pp: Option<f64>
}

const LEADERBOARD_COLUMNS: &str = "
    l.leaderboard_id, l.type AS leaderboard_type,
    l.pass_rating, l.acc_rating, l.tech_rating, l.stars,
    d.key AS difficulty_key, d.difficulty, d.mode,
    s.name AS song_name, s.hash AS song_hash, s.mapper AS song_mapper,
    mv.da AS mv_da, mv.fs AS mv_fs, mv.sf AS mv_sf, mv.ss AS mv_ss,
    mv.gn AS mv_gn, mv.na AS mv_na, mv.nb AS mv_nb, mv.nf AS mv_nf,
    mv.no AS mv_no, mv.pm AS mv_pm, mv.sc AS mv_sc, mv.sa AS mv_sa,
    mv.op AS mv_op,
    mr.sf_pass_rating, mr.sf_acc_rating, mr.sf_tech_rating, mr.sf_stars,
    mr.fs_pass_rating, mr.fs_acc_rating, mr.fs_tech_rating, mr.fs_stars,
    mr.ss_pass_rating, mr.ss_acc_rating, mr.ss_tech_rating, mr.ss_stars";

#[derive(Clone)]
pub struct DbClient {
    client: Arc<Client>
}

impl DbClient {
    // Connect to the database and return a DbClient instance
    pub async fn connect(connection_str: &str) -> Result<Self, Error> {
        let (client, connection) = tokio_postgres::connect(connection_str, NoTls).await?;

        // Spawn the connection object to run in the background
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("connection error: {}", e);
            }
        });

        Ok(DbClient {
            client: Arc::new(client)
        })
    }

    /// Fetches all ranked leaderboards with their difficulty/song metadata and
    /// rating sub-records joined in, one bulk query per invocation.
    pub async fn get_ranked_leaderboards(&self, filter: &LeaderboardFilter) -> Result<Vec<Leaderboard>, Error> {
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::new();
        let mut score_columns = String::new();
        let mut score_join = String::new();
        let mut conditions = vec!["l.type = 3".to_string()];

        if let Some(player_id) = &filter.player_id {
            params.push(player_id);
            score_columns = ", sc.score_id, sc.player_id, sc.accuracy, sc.pp, sc.time_set".to_string();
            score_join = format!(
                "JOIN scores sc ON sc.leaderboard_id = l.leaderboard_id AND sc.player_id = ${}",
                params.len()
            );

            if let Some(max_pp) = &filter.max_score_pp {
                params.push(max_pp);
                score_join.push_str(&format!(" AND sc.pp < ${}", params.len()));
            }
        }

        if let Some(min_stars) = &filter.min_stars {
            params.push(min_stars);
            conditions.push(format!("l.stars >= ${}", params.len()));
        }

        if let Some(max_stars) = &filter.max_stars {
            params.push(max_stars);
            conditions.push(format!("l.stars <= ${}", params.len()));
        }

        let query = format!(
            "SELECT {LEADERBOARD_COLUMNS}{score_columns}
            FROM leaderboards l
                LEFT JOIN song_difficulties d ON d.leaderboard_id = l.leaderboard_id
                LEFT JOIN songs s ON s.key = d.key
                LEFT JOIN leaderboard_modifier_values mv ON mv.leaderboard_id = l.leaderboard_id
                LEFT JOIN leaderboard_modifier_ratings mr ON mr.leaderboard_id = l.leaderboard_id
                {score_join}
            WHERE {}
            ORDER BY l.leaderboard_id;",
            conditions.join(" AND ")
        );

        info!("Fetching ranked leaderboards...");
        let rows = self.client.query(&query, &params).await?;

        let leaderboards = Self::link_rows(rows, filter.player_id.is_some());
        info!("Fetched {} ranked leaderboards", leaderboards.len());

        Ok(leaderboards)
    }

    /// Fetches the distinct leaderboards a player has scores on, with the
    /// accuracy/pp windows applied score-side in SQL.
    pub async fn get_scored_leaderboards(&self, filter: &ScoreFilter) -> Result<Vec<Leaderboard>, Error> {
        let leaderboard_type = filter.leaderboard_type.map(|t| t as i32);

        let mut params: Vec<&(dyn ToSql + Sync)> = vec![&filter.player_id];
        let mut conditions = vec!["sc.player_id = $1".to_string()];

        if let Some(leaderboard_type) = &leaderboard_type {
            params.push(leaderboard_type);
            conditions.push(format!("l.type = ${}", params.len()));
        }

        if let Some(min_accuracy) = &filter.min_accuracy {
            params.push(min_accuracy);
            conditions.push(format!("sc.accuracy >= ${}", params.len()));
        }

        if let Some(max_accuracy) = &filter.max_accuracy {
            params.push(max_accuracy);
            conditions.push(format!("sc.accuracy <= ${}", params.len()));
        }

        if let Some(min_pp) = &filter.min_pp {
            params.push(min_pp);
            conditions.push(format!("sc.pp >= ${}", params.len()));
        }

        if let Some(max_pp) = &filter.max_pp {
            params.push(max_pp);
            conditions.push(format!("sc.pp <= ${}", params.len()));
        }

        let query = format!(
            "SELECT {LEADERBOARD_COLUMNS},
                sc.score_id, sc.player_id, sc.accuracy, sc.pp, sc.time_set
            FROM scores sc
                JOIN leaderboards l ON l.leaderboard_id = sc.leaderboard_id
                LEFT JOIN song_difficulties d ON d.leaderboard_id = l.leaderboard_id
                LEFT JOIN songs s ON s.key = d.key
                LEFT JOIN leaderboard_modifier_values mv ON mv.leaderboard_id = l.leaderboard_id
                LEFT JOIN leaderboard_modifier_ratings mr ON mr.leaderboard_id = l.leaderboard_id
            WHERE {}
            ORDER BY sc.pp DESC;",
            conditions.join(" AND ")
        );

        info!("Fetching scored leaderboards...");
        let rows = self.client.query(&query, &params).await?;

        let leaderboards = Self::link_rows(rows, true);
        info!("Fetched {} scored leaderboards", leaderboards.len());

        Ok(leaderboards)
    }

    /// Collapses joined rows into leaderboards, keeping row order and linking
    /// score rows back to their parent leaderboard.
    fn link_rows(rows: Vec<Row>, with_scores: bool) -> Vec<Leaderboard> {
        let mut leaderboards: IndexMap<String, Leaderboard> = IndexMap::new();

        for row in rows {
            let leaderboard_id = row.get::<_, String>("leaderboard_id");

            let leaderboard = leaderboards
                .entry(leaderboard_id)
                .or_insert_with(|| Self::leaderboard_from_row(&row));

            if with_scores {
                if let Some(score) = Self::score_from_row(&row) {
                    leaderboard.scores.push(score);
                }
            }
        }

        leaderboards.into_values().collect()
    }

    fn leaderboard_from_row(row: &Row) -> Leaderboard {
        let leaderboard_type = LeaderboardType::try_from(row.get::<_, i32>("leaderboard_type"))
            .unwrap_or(LeaderboardType::Unranked);

        Leaderboard {
            leaderboard_id: row.get("leaderboard_id"),
            leaderboard_type,
            pass_rating: row.get("pass_rating"),
            acc_rating: row.get("acc_rating"),
            tech_rating: row.get("tech_rating"),
            stars: row.get("stars"),
            difficulty: Self::difficulty_from_row(row),
            modifier_values: Self::modifier_values_from_row(row),
            modifier_rating: Self::modifier_ratings_from_row(row),
            scores: Vec::new()
        }
    }

    fn difficulty_from_row(row: &Row) -> Option<SongDifficulty> {
        let key = row.get::<_, Option<String>>("difficulty_key")?;
        // Unknown difficulty tiers count as missing metadata
        let difficulty = Difficulty::try_from(row.get::<_, i32>("difficulty")).ok()?;
        let mode = Mode::from(row.get::<_, i32>("mode"));

        Some(SongDifficulty {
            key,
            difficulty,
            mode,
            song: Song {
                name: row.get("song_name"),
                hash: row.get("song_hash"),
                mapper: row.get("song_mapper")
            }
        })
    }

    fn modifier_values_from_row(row: &Row) -> Option<ModifierValues> {
        // The sub-record is all-or-nothing; one NULL column means no record
        let da = row.get::<_, Option<f64>>("mv_da")?;

        Some(ModifierValues {
            da,
            fs: row.get("mv_fs"),
            sf: row.get("mv_sf"),
            ss: row.get("mv_ss"),
            gn: row.get("mv_gn"),
            na: row.get("mv_na"),
            nb: row.get("mv_nb"),
            nf: row.get("mv_nf"),
            no: row.get("mv_no"),
            pm: row.get("mv_pm"),
            sc: row.get("mv_sc"),
            sa: row.get("mv_sa"),
            op: row.get("mv_op")
        })
    }

    fn modifier_ratings_from_row(row: &Row) -> Option<ModifierRatings> {
        let sf_pass_rating = row.get::<_, Option<f64>>("sf_pass_rating")?;

        Some(ModifierRatings {
            sf_pass_rating,
            sf_acc_rating: row.get("sf_acc_rating"),
            sf_tech_rating: row.get("sf_tech_rating"),
            sf_stars: row.get("sf_stars"),
            fs_pass_rating: row.get("fs_pass_rating"),
            fs_acc_rating: row.get("fs_acc_rating"),
            fs_tech_rating: row.get("fs_tech_rating"),
            fs_stars: row.get("fs_stars"),
            ss_pass_rating: row.get("ss_pass_rating"),
            ss_acc_rating: row.get("ss_acc_rating"),
            ss_tech_rating: row.get("ss_tech_rating"),
            ss_stars: row.get("ss_stars")
        })
    }

    fn score_from_row(row: &Row) -> Option<Score> {
        let score_id = row.get::<_, Option<i64>>("score_id")?;

        Some(Score {
            score_id,
            player_id: row.get("player_id"),
            accuracy: row.get("accuracy"),
            pp: row.get("pp"),
            time_set: row.get("time_set")
        })
    }
}
