use clap::Parser;
use potential_processor::{
    args::{Args, Command, PotentialArgs, ScoresArgs},
    database::db::DbClient,
    model::{
        potential::{rank_leaderboards, PotentialQuery},
        scores::ScoresQuery,
        structures::modifier::ModifierSelection,
        QueryError
    },
    report::{
        playlist::build_playlist,
        summary::{potential_summary, scores_summary},
        text_report::build_text_report
    }
};
use std::{fs, path::Path, process};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Fallback playlist author when no player id is involved.
const DEFAULT_AUTHOR: &str = "potential-processor";

#[derive(Debug, Error)]
enum RunError {
    #[error("database error: {0}")]
    Db(#[from] tokio_postgres::Error),

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize playlist: {0}")]
    Serialize(#[from] serde_json::Error)
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    if let Err(e) = run(args).await {
        error!("{e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), RunError> {
    let client = DbClient::connect(&args.connection_string).await?;

    match args.command {
        Command::Potential(potential) => run_potential(&client, potential, &args.out_dir).await,
        Command::Scores(scores) => run_scores(&client, scores, &args.out_dir).await
    }
}

async fn run_potential(client: &DbClient, args: PotentialArgs, out_dir: &Path) -> Result<(), RunError> {
    let query = PotentialQuery {
        all_leaderboards: args.all,
        target_pp: args.pp,
        comparison: args.comparison,
        sort: args.sort,
        direction: args.direction,
        modified_stars: args.modified_stars,
        min_acc: args.min_acc,
        max_acc: args.max_acc,
        min_stars: args.min_stars,
        max_stars: args.max_stars,
        modifiers: ModifierSelection::from_flags(args.sf, args.fs, args.ss, args.gn, args.na, args.nb, args.no),
        player_id: args.player
    };
    query.validate()?;

    let leaderboards = client.get_ranked_leaderboards(&query.leaderboard_filter()).await?;
    let results = rank_leaderboards(leaderboards, &query);

    if results.is_empty() {
        info!("0 leaderboards found with that criteria, please try again with a different parameter.");
        return Ok(());
    }

    fs::create_dir_all(out_dir)?;

    let report = build_text_report(&results, query.comparison);
    fs::write(out_dir.join("maps.txt"), report)?;

    let author = query.player_id.as_deref().unwrap_or(DEFAULT_AUTHOR);
    let name = format!("plays-for-{}-pp", query.target_pp);
    let playlist = build_playlist(results.iter().map(|r| &r.leaderboard), &name, author);
    fs::write(out_dir.join(format!("{name}.bplist")), playlist.to_json()?)?;

    info!("{}", potential_summary(results.len(), &query));

    Ok(())
}

async fn run_scores(client: &DbClient, args: ScoresArgs, out_dir: &Path) -> Result<(), RunError> {
    let query = ScoresQuery {
        name: args.name,
        player_id: args.player,
        leaderboard_type: args.leaderboard_type,
        min_acc: args.min_acc,
        max_acc: args.max_acc,
        min_pp: args.min_pp,
        max_pp: args.max_pp
    };
    query.validate()?;

    let leaderboards = client.get_scored_leaderboards(&query.score_filter()).await?;

    fs::create_dir_all(out_dir)?;

    let playlist = build_playlist(&leaderboards, &query.name, &query.player_id);
    fs::write(out_dir.join(format!("{}.bplist", query.name)), playlist.to_json()?)?;

    info!("{}", scores_summary(leaderboards.len(), &query));

    Ok(())
}
