// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> .env --> Config --> Session
//!   no command:  first-run setup --> banner --> update check --> menu
//!   settings:    settings menu
//!   other:       banner --> update check --> one flow
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use otto_rs::cli::global::GlobalOptions;
use otto_rs::cli::release::ReleaseArgs;
use otto_rs::cli::{self, Command};
use otto_rs::cmd::menu::run_menu;
use otto_rs::cmd::settings::{ensure_config, run_settings_command};
use otto_rs::cmd::updates::check_for_updates;
use otto_rs::cmd::{Flow, Outcome, Session, run_flow};
use otto_rs::config::Config;
use otto_rs::config::paths::resolve_settings_path;
use otto_rs::core::process::Shell;
use otto_rs::error::{Result, is_aborted};
use otto_rs::logging::{LogConfig, LogLevel, init_logging};
use otto_rs::prompt::TermPrompt;
use otto_rs::ui;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Exit status after Ctrl-C at a prompt.
const ABORTED_EXIT: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if is_aborted(&e) => {
            ui::outro("👋 Bye!");
            ExitCode::from(ABORTED_EXIT)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::WARN);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::DEBUG);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn run(cli: &cli::Cli) -> Result<()> {
    let cwd = working_dir(&cli.global)?;
    load_dotenv(&cwd);

    let settings_path = resolve_settings_path(cli.global.config.as_deref());
    let config = Config::load(settings_path.as_deref()).map_err(|e| {
        eprintln!("Failed to load config: {e:#}");
        e
    })?;
    tracing::debug!(?config, cwd = %cwd.display(), "starting");

    let mut prompt = TermPrompt::new();
    let mut session = Session::new(Shell::system(cwd), config, &mut prompt);

    let (flow, release) = match &cli.command {
        None => return run_interactive(&mut session).await,
        Some(Command::Settings) => return run_settings_command(&mut session),
        Some(Command::Release(args)) => (Flow::Release, args.clone()),
        Some(Command::Build) => (Flow::Build, ReleaseArgs::default()),
        Some(Command::Branch) => (Flow::Branch, ReleaseArgs::default()),
        Some(Command::Stash) => (Flow::Stash, ReleaseArgs::default()),
        Some(Command::Undo) => (Flow::Undo, ReleaseArgs::default()),
        Some(Command::Sync) => (Flow::Sync, ReleaseArgs::default()),
    };

    session.print_banner();
    if check_for_updates(&mut session)? == Outcome::Quit {
        return Ok(());
    }
    run_flow(&mut session, flow, &release).await
}

async fn run_interactive(session: &mut Session<'_>) -> Result<()> {
    if ensure_config(session)? == Outcome::Quit {
        return Ok(());
    }
    session.print_banner();
    if check_for_updates(session)? == Outcome::Quit {
        return Ok(());
    }
    run_menu(session).await
}

fn working_dir(global: &GlobalOptions) -> Result<PathBuf> {
    match &global.directory {
        Some(dir) => dir
            .canonicalize()
            .with_context(|| format!("cannot use directory {}", dir.display())),
        None => std::env::current_dir().context("cannot determine the current directory"),
    }
}

/// Load `.env` from the working directory; variables already set win.
fn load_dotenv(cwd: &Path) {
    match dotenvy::from_path(cwd.join(".env")) {
        Ok(()) => tracing::debug!("loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }
}
