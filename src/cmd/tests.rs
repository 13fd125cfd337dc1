// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::testing::{IN_REPO, plain_session, repo_runner};
use super::*;
use crate::config::SettingKey;
use crate::core::process::fake::ScriptedRunner;
use crate::prompt::script::{Answer, ScriptedPrompt, input, select};

/// Runner on a named branch with commits.
fn on_branch(name: &str) -> ScriptedRunner {
    let runner = repo_runner();
    runner
        .ok("git rev-parse --short HEAD", "a1b2c3d")
        .ok("git symbolic-ref --short -q HEAD", name);
    runner
}

fn no_answers() -> ScriptedPrompt {
    ScriptedPrompt::new(Vec::<Answer>::new())
}

// --- update check ---

#[test]
fn test_update_check_outside_repository() {
    let runner = ScriptedRunner::new();
    runner.fail(IN_REPO, "fatal: not a git repository");
    let mut prompt = no_answers();
    let mut session = plain_session(&runner, &mut prompt);

    let outcome = updates::check_for_updates(&mut session).unwrap();
    assert_eq!(outcome, Outcome::Continue);
    assert!(runner.calls_starting_with("git fetch").is_empty());
}

#[test]
fn test_update_check_skipped_when_fetch_fails() {
    let runner = on_branch("main");
    runner.fail("git fetch", "fatal: unable to access 'https://github.com/acme/app/'");
    let mut prompt = no_answers();
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Continue);
    assert!(runner.calls_starting_with("git rev-list").is_empty());
    assert!(prompt.asked.is_empty());
}

#[test]
fn test_update_check_on_default_branch_compares_with_origin() {
    let runner = on_branch("main");
    runner.ok("git rev-list --count HEAD..origin/main", "3");
    let mut prompt = ScriptedPrompt::new([Answer::Confirm(true)]);
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Continue);
    assert_eq!(
        prompt.asked,
        ["Your branch is behind by 3 commits. Pull them?"]
    );
    assert_eq!(runner.calls_starting_with("git pull"), ["git pull origin main"]);
    assert!(runner.calls_starting_with("git rev-list --count HEAD..@{u}").is_empty());
}

#[test]
fn test_update_check_declined_leaves_repository_alone() {
    let runner = on_branch("main");
    runner.ok("git rev-list --count HEAD..origin/main", "2");
    let mut prompt = ScriptedPrompt::new([Answer::Confirm(false)]);
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Continue);
    assert!(runner.calls_starting_with("git pull").is_empty());
}

#[test]
fn test_update_check_cancel_quits() {
    let runner = on_branch("main");
    runner.ok("git rev-list --count HEAD..origin/main", "1");
    let mut prompt = ScriptedPrompt::new([Answer::Cancel]);
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Quit);
}

#[test]
fn test_update_check_feature_branch_uses_upstream() {
    let runner = on_branch("feature/login");
    runner
        .ok("git rev-list --count HEAD..origin/main", "12")
        .ok("git rev-list --count HEAD..@{u}", "0");
    let mut prompt = no_answers();
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Continue);
    assert!(prompt.asked.is_empty());
}

#[test]
fn test_update_check_without_upstream_asks_nothing() {
    let runner = on_branch("feature/login");
    runner.fail(
        "git rev-list --count HEAD..@{u}",
        "fatal: no upstream configured for branch 'feature/login'",
    );
    let mut prompt = no_answers();
    let mut session = plain_session(&runner, &mut prompt);

    assert_eq!(updates::check_for_updates(&mut session).unwrap(), Outcome::Continue);
    assert!(prompt.asked.is_empty());
}

// --- branch ---

#[test]
fn test_branch_switch_offers_other_branches() {
    let runner = on_branch("main");
    runner.ok("git branch --format=%(refname:short)", "main\nfeature/x\nfix/y");
    let mut prompt = ScriptedPrompt::new([select("Switch"), select("feature/x")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();

    assert_eq!(prompt.offered[1], ["feature/x", "fix/y"]);
    assert_eq!(runner.calls_starting_with("git checkout"), ["git checkout feature/x"]);
    assert!(runner.calls_starting_with("git stash").is_empty());
}

#[test]
fn test_branch_switch_carries_changes() {
    let runner = on_branch("main");
    runner
        .ok("git branch --format=%(refname:short)", "main\nfeature/x")
        .ok("git status --porcelain", " M src/app.js")
        .ok("git stash list", "")
        .ok("git stash list", "stash@{0}: On main: Otto Auto-Switch");
    let mut prompt = ScriptedPrompt::new([select("Switch"), select("feature/x")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();

    assert_eq!(
        runner.calls_starting_with("git stash p"),
        ["git stash push -m \"Otto Auto-Switch\"", "git stash pop"]
    );
}

#[test]
fn test_branch_create() {
    let runner = on_branch("main");
    let mut prompt = ScriptedPrompt::new([select("Create"), input("feat/new-thing")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();
    assert_eq!(
        runner.calls_starting_with("git checkout"),
        ["git checkout -b feat/new-thing"]
    );
}

#[test]
fn test_branch_update_stops_when_fetch_fails() {
    let runner = on_branch("feature/x");
    runner.fail("git fetch origin main", "fatal: couldn't find remote ref main");
    let mut prompt = ScriptedPrompt::new([select("Update")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();
    assert!(runner.calls_starting_with("git pull").is_empty());
}

#[test]
fn test_branch_update_follows_master_default() {
    let runner = on_branch("feature/x");
    runner.fail("git rev-parse --verify origin/main", "fatal: Needed a single revision");
    runner.ok("git rev-parse --verify origin/master", "abc123");
    let mut prompt = ScriptedPrompt::new([select("Update")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();
    assert_eq!(runner.calls_starting_with("git fetch"), ["git fetch origin master"]);
    assert_eq!(runner.calls_starting_with("git pull"), ["git pull origin master"]);
}

#[test]
fn test_branch_open_pr() {
    let runner = on_branch("feature/x");
    runner.ok("git config --get remote.origin.url", "git@github.com:acme/app.git");
    let mut prompt = ScriptedPrompt::new([select("Open PR")]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();
    assert!(
        runner
            .calls()
            .iter()
            .any(|call| call.ends_with("https://github.com/acme/app/pull/new/feature/x")),
        "{:?}",
        runner.calls()
    );
}

#[test]
fn test_branch_cancel_runs_nothing() {
    let runner = on_branch("main");
    let mut prompt = ScriptedPrompt::new([Answer::Cancel]);
    let mut session = plain_session(&runner, &mut prompt);

    branch::run_branch_command(&mut session).unwrap();
    assert_eq!(runner.calls(), [IN_REPO]);
}

// --- stash ---

#[test]
fn test_stash_save_with_message() {
    let runner = repo_runner();
    runner.ok("git status --porcelain", "?? notes.md");
    let mut prompt = ScriptedPrompt::new([select("Save"), input("WIP: login form")]);
    let mut session = plain_session(&runner, &mut prompt);

    stash::run_stash_command(&mut session).unwrap();
    assert_eq!(
        runner.calls_starting_with("git stash push"),
        ["git stash push --include-untracked -m \"WIP: login form\""]
    );
}

#[test]
fn test_stash_save_clean_tree_creates_nothing() {
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([select("Save"), input("")]);
    let mut session = plain_session(&runner, &mut prompt);

    stash::run_stash_command(&mut session).unwrap();
    assert!(runner.calls_starting_with("git stash push").is_empty());
}

#[test]
fn test_stash_pop_selected_entry() {
    let runner = repo_runner();
    runner.ok(
        "git stash list",
        "stash@{0}: On main: WIP: login\nstash@{1}: On main: Otto Stash",
    );
    let mut prompt = ScriptedPrompt::new([select("Pop"), select("Otto Stash")]);
    let mut session = plain_session(&runner, &mut prompt);

    stash::run_stash_command(&mut session).unwrap();
    assert_eq!(prompt.offered[1], ["On main: WIP: login", "On main: Otto Stash"]);
    assert_eq!(
        runner.calls_starting_with("git stash pop"),
        ["git stash pop stash@{1}"]
    );
}

#[test]
fn test_stash_pop_refused_checks_for_conflicts() {
    let runner = repo_runner();
    runner
        .ok("git stash list", "stash@{0}: On main: WIP: login")
        .fail(
            "git stash pop stash@{0}",
            "error: Your local changes to the following files would be overwritten by merge",
        );
    let mut prompt = ScriptedPrompt::new([select("Pop"), select("WIP")]);
    let mut session = plain_session(&runner, &mut prompt);

    stash::run_stash_command(&mut session).unwrap();
    assert_eq!(
        runner.calls_starting_with("git diff --name-only"),
        ["git diff --name-only --diff-filter=U"]
    );
}

#[test]
fn test_stash_pop_empty_list() {
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([select("Pop")]);
    let mut session = plain_session(&runner, &mut prompt);

    stash::run_stash_command(&mut session).unwrap();
    assert_eq!(prompt.asked, ["Stash Manager"]);
    assert!(runner.calls_starting_with("git stash pop").is_empty());
}

// --- undo ---

const HISTORY: &str = "git log -n 15 --pretty=format:%h|%s|%an|%ar";

fn with_history() -> ScriptedRunner {
    let runner = repo_runner();
    runner.ok(
        HISTORY,
        "9f8e7d6|feat: add login|Jane Doe|1 hour ago\n\
         1a2b3c4|fix: typo|Sam Lee|2 days ago",
    );
    runner
}

#[test]
fn test_undo_soft_reset() {
    let runner = with_history();
    let mut prompt = ScriptedPrompt::new([select("1a2b3c4"), select("Soft")]);
    let mut session = plain_session(&runner, &mut prompt);

    undo::run_undo_command(&mut session).unwrap();
    assert_eq!(
        prompt.offered[0],
        ["9f8e7d6 feat: add login (Current)", "1a2b3c4 fix: typo"]
    );
    assert_eq!(runner.calls_starting_with("git reset"), ["git reset --soft 1a2b3c4"]);
}

#[test]
fn test_undo_hard_reset_needs_confirmation() {
    let runner = with_history();
    let mut prompt = ScriptedPrompt::new([
        select("1a2b3c4"),
        select("Hard"),
        Answer::Confirm(false),
    ]);
    let mut session = plain_session(&runner, &mut prompt);

    undo::run_undo_command(&mut session).unwrap();
    assert!(runner.calls_starting_with("git reset").is_empty());

    let mut prompt = ScriptedPrompt::new([select("1a2b3c4"), select("Hard"), Answer::Confirm(true)]);
    let mut session = plain_session(&runner, &mut prompt);
    undo::run_undo_command(&mut session).unwrap();
    assert_eq!(runner.calls_starting_with("git reset"), ["git reset --hard 1a2b3c4"]);
}

#[test]
fn test_undo_current_commit_is_noop() {
    let runner = with_history();
    let mut prompt = ScriptedPrompt::new([select("9f8e7d6")]);
    let mut session = plain_session(&runner, &mut prompt);

    undo::run_undo_command(&mut session).unwrap();
    assert_eq!(prompt.asked, ["Reset branch to which commit?"]);
    assert!(runner.calls_starting_with("git reset").is_empty());
}

#[test]
fn test_undo_without_history() {
    let runner = repo_runner();
    let mut prompt = no_answers();
    let mut session = plain_session(&runner, &mut prompt);

    undo::run_undo_command(&mut session).unwrap();
    assert!(prompt.asked.is_empty());
}

// --- sync ---

#[test]
fn test_sync_pulls_and_sets_upstream() {
    let runner = on_branch("feature/x");
    runner.ok(
        "git ls-remote --heads origin feature/x",
        "4b825dc6\trefs/heads/feature/x",
    );
    let mut prompt = no_answers();
    let session = plain_session(&runner, &mut prompt);

    sync::run_sync_command(&session).unwrap();
    assert_eq!(
        runner.calls_starting_with("git pull"),
        ["git pull origin feature/x"]
    );
    assert_eq!(
        runner.calls_starting_with("git branch --set-upstream-to"),
        ["git branch --set-upstream-to=origin/feature/x feature/x"]
    );
}

#[test]
fn test_sync_without_remote_branch() {
    let runner = on_branch("feature/x");
    let mut prompt = no_answers();
    let session = plain_session(&runner, &mut prompt);

    sync::run_sync_command(&session).unwrap();
    assert_eq!(runner.calls_starting_with("git fetch"), ["git fetch origin"]);
    assert!(runner.calls_starting_with("git pull").is_empty());
}

#[test]
fn test_sync_fetch_failure_stops() {
    let runner = on_branch("feature/x");
    runner.fail("git fetch origin", "fatal: 'origin' does not appear to be a git repository");
    let mut prompt = no_answers();
    let session = plain_session(&runner, &mut prompt);

    sync::run_sync_command(&session).unwrap();
    assert!(runner.calls_starting_with("git ls-remote").is_empty());
}

// --- build ---

#[test]
fn test_build_runs_script_when_declared() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("package.json"),
        r#"{"scripts": {"build": "tsc"}}"#,
    )
    .unwrap();
    let runner = ScriptedRunner::in_dir(dir.path());
    runner.ok(IN_REPO, "true");
    let mut prompt = no_answers();
    let session = plain_session(&runner, &mut prompt);

    build::run_build_command(&session).unwrap();
    assert_eq!(runner.calls_starting_with("npm"), ["npm install", "npm run build"]);
}

#[test]
fn test_build_without_script_only_installs() {
    let dir = tempfile::tempdir().unwrap();
    let runner = ScriptedRunner::in_dir(dir.path());
    runner.ok(IN_REPO, "true");
    let mut prompt = no_answers();
    let session = plain_session(&runner, &mut prompt);

    build::run_build_command(&session).unwrap();
    assert_eq!(runner.calls_starting_with("npm"), ["npm install"]);
}

// --- settings ---

fn settings_session<'p>(
    runner: &ScriptedRunner,
    prompt: &'p mut ScriptedPrompt,
    path: &std::path::Path,
) -> Session<'p> {
    let mut session = plain_session(runner, prompt);
    session.config = Config::load(Some(path)).unwrap();
    session
}

fn stored(path: &std::path::Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_settings_updates_webhook_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("otto").join("config.json");
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([
        select("Google Sheets"),
        input("https://script.google.com/macros/s/abc/exec"),
        select("Back"),
    ]);
    let mut session = settings_session(&runner, &mut prompt, &path);

    settings::run_settings_command(&mut session).unwrap();

    assert_eq!(
        stored(&path)["sheet_webhook_url"],
        "https://script.google.com/macros/s/abc/exec"
    );
    if std::env::var_os(SettingKey::SheetWebhookUrl.env_var()).is_none() {
        assert!(session.config.has_telemetry());
    }
}

#[test]
fn test_settings_cancelled_input_returns_to_menu() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([select("OpenAI"), Answer::Cancel, Answer::Cancel]);
    let mut session = settings_session(&runner, &mut prompt, &path);

    settings::run_settings_command(&mut session).unwrap();
    assert!(!path.exists());
    assert_eq!(prompt.asked.len(), 3);
}

#[test]
fn test_ensure_config_skips_existing_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{}").unwrap();
    let runner = repo_runner();
    let mut prompt = no_answers();
    let mut session = settings_session(&runner, &mut prompt, &path);

    assert_eq!(settings::ensure_config(&mut session).unwrap(), Outcome::Continue);
    assert!(prompt.asked.is_empty());
}

#[test]
fn test_ensure_config_first_run() {
    if std::env::var_os(SettingKey::OpenAiApiKey.env_var()).is_some()
        || std::env::var_os(SettingKey::SheetWebhookUrl.env_var()).is_some()
    {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([input("sk-test-1234"), Answer::Confirm(false)]);
    let mut session = settings_session(&runner, &mut prompt, &path);

    assert_eq!(settings::ensure_config(&mut session).unwrap(), Outcome::Continue);
    assert_eq!(stored(&path)["openai_api_key"], "sk-test-1234");
    assert!(session.config.has_ai());
}

#[test]
fn test_ensure_config_asks_again_for_empty_key() {
    if std::env::var_os(SettingKey::OpenAiApiKey.env_var()).is_some() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([input(""), input("sk-abc"), Answer::Confirm(false)]);
    let mut session = settings_session(&runner, &mut prompt, &path);

    assert_eq!(settings::ensure_config(&mut session).unwrap(), Outcome::Continue);
    assert_eq!(prompt.rejected, ["API Key is required."]);
    assert_eq!(stored(&path)["openai_api_key"], "sk-abc");
}

#[test]
fn test_ensure_config_cancel_quits() {
    if std::env::var_os(SettingKey::OpenAiApiKey.env_var()).is_some() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([Answer::Cancel]);
    let mut session = settings_session(&runner, &mut prompt, &path);

    assert_eq!(settings::ensure_config(&mut session).unwrap(), Outcome::Quit);
    assert!(!path.exists());
}

// --- menu ---

#[tokio::test]
async fn test_menu_quit() {
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([select("Quit")]);
    let mut session = plain_session(&runner, &mut prompt);

    menu::run_menu(&mut session).await.unwrap();
    assert_eq!(prompt.offered[0].len(), 8);
}

#[tokio::test]
async fn test_menu_runs_flows_until_cancel() {
    let runner = on_branch("feature/x");
    let mut prompt = ScriptedPrompt::new([select("Sync"), select("Stash"), Answer::Cancel, Answer::Cancel]);
    let mut session = plain_session(&runner, &mut prompt);

    menu::run_menu(&mut session).await.unwrap();
    assert_eq!(
        prompt.asked,
        ["What's the plan?", "What's the plan?", "Stash Manager", "What's the plan?"]
    );
    assert_eq!(runner.calls_starting_with("git fetch"), ["git fetch origin"]);
}

#[tokio::test]
async fn test_menu_abort_ends_loop() {
    let runner = repo_runner();
    let mut prompt = ScriptedPrompt::new([select("Rollback"), Answer::Abort]);
    let mut session = plain_session(&runner, &mut prompt);
    runner.ok(HISTORY, "9f8e7d6|feat: add login|Jane Doe|1 hour ago");

    let err = menu::run_menu(&mut session).await.unwrap_err();
    assert!(crate::error::is_aborted(&err));
}
