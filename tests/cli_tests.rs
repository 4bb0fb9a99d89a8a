#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

/// This test runs the harness against a suite whose steps all pass, using a
/// harmless stand-in tool. It asserts that the command exits 0 and that the
/// final report announces overall success.
///
/// 这个测试用无害的替身工具运行一个所有步骤都通过的套件。
/// 它断言命令以 0 退出，且最终报告宣布整体成功。
#[test]
fn test_successful_run() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/success.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS | Echo Output"))
        .stdout(predicate::str::contains("Total: 2 | Passed: 2 | Failed: 0"))
        .stdout(predicate::str::contains("All tests passed!"));
}

/// A failing step must not stop the steps after it, and the process must
/// exit nonzero with the failure visible in the summary table.
///
/// 失败的步骤不能阻止其后的步骤，进程必须以非零退出，
/// 且失败在摘要表中可见。
#[test]
fn test_failed_step_is_reported_and_sequence_continues() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/step_fail.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL | Fails"))
        .stdout(predicate::str::contains("boom"))
        .stdout(predicate::str::contains("PASS | Still Runs"))
        .stdout(predicate::str::contains("Total: 3 | Passed: 2 | Failed: 1"))
        .stdout(predicate::str::contains("1 test(s) failed."));
}

/// The classification scenario from the harness's contract: exit 0 with one
/// of two expected outputs present fails with the missing one listed.
///
/// 判定契约场景：退出码为 0 但两个期望输出只出现一个时，
/// 失败消息列出缺失的那个。
#[test]
fn test_missing_expected_output() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/missing_output.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(
            "Missing expected outputs: Spinner Demo",
        ))
        .stdout(predicate::str::contains("Total: 1 | Passed: 0 | Failed: 1"));
}

/// Preflight failure aborts before any step runs: no summary is printed and
/// the process exits 1.
///
/// 预检失败在任何步骤运行之前中止：不打印摘要，进程以 1 退出。
#[test]
fn test_unreachable_tool_fails_preflight() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/missing_tool.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "gauntlet-missing-tool-2026 is not installed or not in PATH",
        ))
        .stdout(predicate::str::contains("Test Summary:").not());
}

/// Quick mode runs only the steps marked `quick = true`.
///
/// 快速模式只运行标记为 `quick = true` 的步骤。
#[test]
fn test_quick_mode_runs_subset() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--quick")
        .arg("--config")
        .arg("tests/fixtures/success.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total: 1 | Passed: 1 | Failed: 0"));
}

/// The suite's `language` key localizes the report chrome.
///
/// 套件的 `language` 键对报告的界面文案做本地化。
#[test]
fn test_suite_language_localizes_report() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/success_zh.toml")
        .arg("--project-dir")
        .arg(".");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("所有测试通过"));
}

/// A missing configuration file is reported as an error, exit 1.
///
/// 配置文件缺失时报告错误并以 1 退出。
#[test]
fn test_missing_config_is_an_error() {
    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("run")
        .arg("--config")
        .arg("tests/fixtures/does_not_exist.toml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read suite config"));
}

/// `init --non-interactive` writes a loadable default suite.
///
/// `init --non-interactive` 写出一个可加载的默认套件。
#[test]
fn test_init_writes_default_suite() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("gauntlet-runner").unwrap();
    cmd.arg("init").arg("--non-interactive").current_dir(dir.path());
    cmd.assert().success();

    let written = std::fs::read_to_string(dir.path().join("Suite.toml")).unwrap();
    let suite: gauntlet_runner::core::config::SuiteConfig = toml::from_str(&written).unwrap();
    assert_eq!(suite.tool, "zig");
    assert_eq!(suite.steps.len(), 9);
    assert!(suite.steps.iter().any(|s| s.name == "Main Application"));
    assert_eq!(suite.steps.iter().filter(|s| s.quick).count(), 5);
}
