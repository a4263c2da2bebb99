use std::io::Write;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::{BoardConfig, Task};
use crate::ops::{Board, BoardView};
use crate::remote::{GatewayError, TaskGateway};
use crate::sync;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("task title must not be blank")]
    BlankTitle,
    #[error("{0}")]
    Remote(String),
    #[error("{message}: {cause}")]
    Rejected { message: String, cause: String },
    #[error("could not fetch tasks: {0}")]
    Fetch(#[from] GatewayError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run a one-shot subcommand, writing its output to `out`.
pub async fn dispatch(
    command: Commands,
    json: bool,
    config: &BoardConfig,
    gateway: &dyn TaskGateway,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Commands::List(args) => cmd_list(args, json, config, gateway, out).await,
        Commands::Add(args) => cmd_add(args, json, gateway, out).await,
        Commands::Update(args) => cmd_update(args, json, config, gateway, out).await,
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

async fn cmd_list(
    args: ListArgs,
    json: bool,
    config: &BoardConfig,
    gateway: &dyn TaskGateway,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    // Unlike the TUI, a failed fetch here is the whole command failing
    let tasks = gateway.fetch_seed_tasks(config.remote.seed_limit).await?;
    let mut board = Board::with_tasks(tasks);
    board.set_filter(args.filter);
    write_list(out, &BoardView::of(&board), json)?;
    Ok(())
}

async fn cmd_add(
    args: AddArgs,
    json: bool,
    gateway: &dyn TaskGateway,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut board = Board::with_tasks(Vec::new());
    board.set_draft_text(args.title);
    let op = board.submit_draft().ok_or(CliError::BlankTitle)?;

    let completion = sync::execute(gateway, op).await;
    let cause = completion.error().map(ToString::to_string);
    expect_success(board.apply(completion), cause)?;

    let task = board.tasks().last().ok_or_else(|| CliError::Remote("no task returned".into()))?;
    write_task(out, "added", task, json)?;
    Ok(())
}

async fn cmd_update(
    args: UpdateArgs,
    json: bool,
    config: &BoardConfig,
    gateway: &dyn TaskGateway,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    // Stand-in for the remote task so the board's edit flow can run
    let mut board = Board::with_tasks(vec![Task::new(args.id, String::new(), args.completed)]);
    board.set_legacy_update_payload(config.compat.legacy_update_payload);
    board.begin_edit(args.id);
    board.set_draft_text(args.title);
    let op = board.submit_draft().ok_or(CliError::BlankTitle)?;

    let completion = sync::execute(gateway, op).await;
    let cause = completion.error().map(ToString::to_string);
    expect_success(board.apply(completion), cause)?;

    let task = board
        .task(args.id)
        .ok_or_else(|| CliError::Remote(format!("task {} vanished", args.id)))?;
    write_task(out, "updated", task, json)?;
    Ok(())
}

/// Turn a failure notice into an error, keeping the gateway's reason
fn expect_success(notice: Option<crate::ops::Notice>, cause: Option<String>) -> Result<(), CliError> {
    match (notice, cause) {
        (Some(n), Some(cause)) if !n.is_success() => Err(CliError::Rejected {
            message: n.message,
            cause,
        }),
        (Some(n), None) if !n.is_success() => Err(CliError::Remote(n.message)),
        _ => Ok(()),
    }
}
