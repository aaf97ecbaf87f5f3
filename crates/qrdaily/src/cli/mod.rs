//! # CLI Layer
//!
//! This module is **one possible UI client** for qrdaily; the state and rules
//! live in `qrdailyapp`.
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the `tracing` subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `handle_*()`: Per-command handlers that call the API and render
//! - [`render`]: Output formatting functions

mod args;
mod render;

use anyhow::{bail, Context, Result};
use args::{ArchiveAction, Cli, Commands, HistoryAction, Toggle};
use clap::Parser;
use qrdailyapp::api::{Attempt, CmdMessage, ConfigAction, QrDailyApi};
use qrdailyapp::clock::{Clock, SystemClock};
use qrdailyapp::config::QrDailyConfig;
use qrdailyapp::init::initialize;
use qrdailyapp::store::fs::FileStore;
use render::{
    print_archive, print_config, print_history, print_messages, print_profile, print_puzzle,
    print_reveal, print_streak,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "qrdaily=warn,qrdailyapp=warn";
const VERBOSE_FILTER: &str = "qrdaily=debug,qrdailyapp=debug";

struct AppContext {
    api: QrDailyApi<FileStore, SystemClock>,
    config: QrDailyConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "dispatching");

    let ctx = initialize(cli.data_dir.clone()).context("failed to initialize qrdaily")?;
    let mut ctx = AppContext {
        api: ctx.api,
        config: ctx.config,
    };

    match cli.command {
        Some(Commands::Puzzle { hint }) => handle_puzzle(&ctx, hint),
        Some(Commands::Solve { answer, reveal }) => {
            let guess = if answer.is_empty() {
                None
            } else {
                Some(answer.join(" "))
            };
            handle_solve(&mut ctx, guess, reveal)
        }
        Some(Commands::Next) => handle_next(&mut ctx),
        Some(Commands::Streak) => handle_streak(&ctx),
        Some(Commands::Archive { action }) => match action {
            None => handle_archive(&ctx),
            Some(ArchiveAction::Clear) => handle_archive_clear(&mut ctx),
        },
        Some(Commands::Profile) => handle_profile(&ctx),
        Some(Commands::Scan { data, kind }) => handle_scan(&mut ctx, &kind, &data),
        Some(Commands::History { action }) => match action {
            None => handle_history(&ctx),
            Some(HistoryAction::Delete { id }) => handle_history_delete(&mut ctx, &id),
            Some(HistoryAction::Clear) => handle_history_clear(&mut ctx),
        },
        Some(Commands::Notifications { state }) => handle_notifications(&mut ctx, state),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_puzzle(&ctx, false),
    }
}

/// `RUST_LOG` wins when set; otherwise `-v` picks between warn and debug.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_puzzle(ctx: &AppContext, hint: bool) -> Result<()> {
    let index = ctx.api.get_current_puzzle_index();
    print_puzzle(
        index,
        ctx.api.current_puzzle(),
        hint || ctx.config.show_hints,
    );
    let streak = ctx.api.get_streak();
    let status = if ctx.api.can_solve_today() {
        CmdMessage::info(format!("Streak: {} {}", streak, days(streak)))
    } else {
        CmdMessage::success(format!(
            "Already solved today. Streak: {} {}. Come back tomorrow.",
            streak,
            days(streak)
        ))
    };
    print_messages(&[status]);
    Ok(())
}

fn handle_solve(ctx: &mut AppContext, guess: Option<String>, reveal: bool) -> Result<()> {
    let message = match ctx.api.solve_current(guess.as_deref()) {
        Attempt::Incorrect => CmdMessage::error("Not quite. Try again."),
        Attempt::Solved(outcome) if outcome.recorded => CmdMessage::success(format!(
            "Solved! Streak: {} {}",
            outcome.streak,
            days(outcome.streak)
        )),
        Attempt::Solved(outcome) => CmdMessage::warning(format!(
            "Already solved today. Streak: {} {}",
            outcome.streak,
            days(outcome.streak)
        )),
    };
    print_messages(&[message]);

    if reveal {
        print_reveal(ctx.api.current_puzzle());
    }
    Ok(())
}

fn handle_next(ctx: &mut AppContext) -> Result<()> {
    let show_hints = ctx.config.show_hints;
    let (index, puzzle) = ctx.api.next_puzzle();
    print_puzzle(index, puzzle, show_hints);
    Ok(())
}

fn handle_streak(ctx: &AppContext) -> Result<()> {
    print_streak(
        ctx.api.get_streak(),
        ctx.api.get_last_solved(),
        ctx.api.can_solve_today(),
        ctx.api.clock().now(),
    );
    Ok(())
}

fn handle_archive(ctx: &AppContext) -> Result<()> {
    print_archive(&ctx.api.get_solved_puzzles(), ctx.api.clock().now());
    Ok(())
}

fn handle_archive_clear(ctx: &mut AppContext) -> Result<()> {
    let message = if ctx.api.reset_progress() {
        CmdMessage::success("Archive cleared, streak reset to 0")
    } else {
        CmdMessage::warning("Archive could not be cleared")
    };
    print_messages(&[message]);
    Ok(())
}

fn handle_profile(ctx: &AppContext) -> Result<()> {
    print_profile(&ctx.api.profile());
    Ok(())
}

fn handle_scan(ctx: &mut AppContext, kind: &str, data: &str) -> Result<()> {
    let history = ctx.api.record_scan(kind, data);
    if let Some(entry) = history.first() {
        print_messages(&[CmdMessage::success(format!(
            "Recorded {} scan {}",
            entry.category,
            render::short_id(&entry.id)
        ))]);
    }
    Ok(())
}

fn handle_history(ctx: &AppContext) -> Result<()> {
    print_history(&ctx.api.get_history(), ctx.api.clock().now());
    Ok(())
}

/// Accepts a full id or the short form shown by `history`.
fn handle_history_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let matches: Vec<String> = ctx
        .api
        .get_history()
        .into_iter()
        .filter(|e| e.id == id || e.id.ends_with(id))
        .map(|e| e.id)
        .collect();

    let full_id = match matches.as_slice() {
        [only] => only.clone(),
        [] => bail!("No scan matching '{}'", id),
        _ => bail!("'{}' matches {} scans, use a longer id", id, matches.len()),
    };

    let remaining = ctx.api.delete_history_item(&full_id);
    print_messages(&[CmdMessage::success(format!(
        "Deleted scan {}, {} left",
        render::short_id(&full_id),
        remaining.len()
    ))]);
    Ok(())
}

fn handle_history_clear(ctx: &mut AppContext) -> Result<()> {
    let message = if ctx.api.clear_history() {
        CmdMessage::success("History cleared")
    } else {
        CmdMessage::warning("History could not be cleared")
    };
    print_messages(&[message]);
    Ok(())
}

fn handle_notifications(ctx: &mut AppContext, state: Option<Toggle>) -> Result<()> {
    let enabled = match state {
        Some(toggle) => ctx.api.set_notifications_enabled(toggle == Toggle::On),
        None => ctx.api.notifications_enabled(),
    };
    let message = if enabled {
        let at = ctx.config.reminder_time()?;
        CmdMessage::success(format!("Daily reminder on at {}", at.format("%H:%M")))
    } else {
        CmdMessage::info("Daily reminder off")
    };
    print_messages(&[message]);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn days(n: u32) -> &'static str {
    if n == 1 {
        "day"
    } else {
        "days"
    }
}
