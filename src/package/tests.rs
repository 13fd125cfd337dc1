// otto-rs: Guided git release assistant
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::*;
use crate::core::process::fake::ScriptedRunner;

#[test]
fn test_detect_prefers_pnpm_lockfile() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(PackageManager::detect(dir.path()), PackageManager::Npm);
    std::fs::write(dir.path().join(PNPM_LOCKFILE), "lockfileVersion: '9.0'\n").unwrap();
    assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
}

#[test]
fn test_has_build_script() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!has_build_script(dir.path()));

    let manifest = dir.path().join("package.json");
    std::fs::write(&manifest, r#"{"name": "app", "scripts": {"test": "vitest"}}"#).unwrap();
    assert!(!has_build_script(dir.path()));

    std::fs::write(&manifest, r#"{"scripts": {"build": "tsc -p ."}}"#).unwrap();
    assert!(has_build_script(dir.path()));

    std::fs::write(&manifest, "{ broken").unwrap();
    assert!(!has_build_script(dir.path()));
}

#[test]
fn test_commands_use_detected_manager() {
    let runner = ScriptedRunner::new();
    let package = Package::new(runner.shell(), PackageManager::Pnpm);
    package.install().unwrap();
    package.build().unwrap();
    package.bump_version(VersionBump::Minor).unwrap();
    package.bump_version(VersionBump::None).unwrap();
    assert_eq!(
        runner.calls(),
        vec!["pnpm install", "pnpm run build", "pnpm version minor"]
    );
}

#[test]
fn test_build_failure_carries_output() {
    let runner = ScriptedRunner::new();
    runner.fail("npm run build", "npm ERR! Missing script: \"build\"");
    let err = Package::new(runner.shell(), PackageManager::Npm)
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r#"process error: 'npm run build' failed: npm ERR! Missing script: "build""#
    );
}

#[test]
fn test_version_bump_display() {
    let all: Vec<String> = VersionBump::value_variants()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(all, vec!["patch", "minor", "major", "none"]);
}
