//! Main entry point for the leaderboard binary
//!
//! Loads one instance, replays recorded calls against it and optionally
//! writes the resulting ledger to disk. Improvement notices are observed on
//! the broadcast side-channel and logged as they arrive.

use clap::Parser;
use tokio::io::{AsyncBufRead, BufReader};

use leaderboard::{
    services::{
        join_observer, load_instance, replay, spawn_notice_logger, BroadcastNotifier, CandidateCodec,
        InstanceDefinition, RealExportSink,
    },
    AppConfig, Args, ExportSink, Leaderboard, LeaderboardResult,
};
use shared::{board_info, logging};

#[tokio::main]
async fn main() -> LeaderboardResult<()> {
    let args = Args::parse();
    let config = AppConfig::resolve(args)?;

    logging::init_tracing_with_level(Some(&config.log_level));

    let definition = load_instance(&config.instance_path).await?;
    logging::log_startup(&config.instance_path.display(), &definition.describe());

    let result = match definition {
        InstanceDefinition::Sat(instance) => run(instance, &config).await,
        InstanceDefinition::Knapsack(instance) => run(instance, &config).await,
    };

    if let Err(e) = &result {
        logging::log_error(&config.instance_path.display(), "Leaderboard run", e);
    }
    result
}

async fn run<P: CandidateCodec>(instance: P, config: &AppConfig) -> LeaderboardResult<()> {
    let notifier = BroadcastNotifier::default();
    let notices = notifier.subscribe();
    let board = Leaderboard::new(instance, config.controller.clone(), notifier);
    let board_id = board.id();

    board_info!(board_id, "Controller: {}", config.controller);

    let observer = spawn_notice_logger(board_id, notices);

    let input: Box<dyn AsyncBufRead + Unpin + Send> = match &config.replay_path {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let summary = replay(&board, input).await?;

    logging::log_progress(
        &board_id,
        "Replay finished",
        &format!(
            "{} submitted, {} accepted, {} rejected, {} closes, {} denied",
            summary.submitted, summary.accepted, summary.rejected, summary.closes, summary.denied
        ),
    );

    match board.best_solution() {
        Some(best) => board_info!(
            board_id,
            "Best of {} entries: objective {} by {}",
            board.number_of_solutions(),
            best.metrics.objective(),
            best.submitter
        ),
        None => board_info!(board_id, "No solution recorded"),
    }
    board_info!(board_id, "Submissions open: {}", board.are_submissions_open());

    if let Some(path) = &config.output_path {
        RealExportSink::new().write_export(path, &board.export()?).await?;
        logging::log_success(&board_id, &format!("Ledger written to {}", path.display()));
    }

    // Dropping the board drops the notifier and ends the observer
    drop(board);
    join_observer(board_id, observer).await;

    logging::log_shutdown(&board_id, "replay complete");
    Ok(())
}
