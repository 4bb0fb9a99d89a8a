//! # Step Sequence Integration Tests / 步骤序列集成测试
//!
//! Drives the execution engine against real subprocesses in a throwaway
//! directory and checks the sequence-level guarantees: no step is ever
//! skipped, failures are contained at the step boundary, and scratch
//! artifacts never outlive their step.
//!
//! 在一次性目录中用真实子进程驱动执行引擎，检查序列级保证：
//! 不跳过任何步骤、失败被限制在步骤边界内、
//! 临时产物不会比其步骤存活得更久。

#![cfg(unix)]

mod common;

use common::{command_step, make_ctx};
use gauntlet_runner::core::config::{ScratchSpec, StepSpec};
use gauntlet_runner::core::execution::{run_step, run_suite};

/// 中间步骤失败后，后续步骤仍然全部执行。
#[tokio::test]
async fn test_failed_step_never_halts_the_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    let steps = vec![
        command_step("first", "sh -c 'echo ok'"),
        command_step("second", "sh -c 'echo boom >&2; exit 1'"),
        command_step("third", "sh -c 'echo still here'"),
    ];

    let report = run_suite(&steps, &ctx).await;

    // Exactly one outcome per declared step, in declaration order.
    // 每个声明的步骤恰好有一个结果，按声明顺序排列。
    assert_eq!(report.total(), 3);
    let outcomes = report.outcomes();
    assert_eq!(outcomes[0].name, "first");
    assert!(outcomes[0].passed);
    assert!(!outcomes[1].passed);
    assert_eq!(outcomes[1].message, "boom\n");
    assert_eq!(outcomes[2].name, "third");
    assert!(outcomes[2].passed);

    assert_eq!(report.exit_code(), 1);
}

#[tokio::test]
async fn test_all_passing_suite_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("echo", dir.path());

    let steps = vec![
        StepSpec {
            name: "Echo Output".to_string(),
            args: vec!["Progress Bar Demo".to_string()],
            expect: vec!["Progress Bar Demo".to_string()],
            ..StepSpec::default()
        },
        command_step("Exit Status", "sh -c 'exit 0'"),
    ];

    let report = run_suite(&steps, &ctx).await;
    assert_eq!(report.total(), 2);
    assert!(report.all_passed());
    assert_eq!(report.exit_code(), 0);
}

#[tokio::test]
async fn test_missing_expected_output_fails_with_declared_order_message() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("echo", dir.path());

    let step = StepSpec {
        name: "Main Application".to_string(),
        args: vec!["Progress Bar Demo".to_string()],
        expect: vec!["Progress Bar Demo".to_string(), "Spinner Demo".to_string()],
        ..StepSpec::default()
    };

    let outcome = run_step(&step, &ctx).await;
    assert!(!outcome.passed);
    assert_eq!(outcome.message, "Missing expected outputs: Spinner Demo");
}

/// 超过超时的步骤总是失败，且消息为合成的超时文本。
#[tokio::test]
async fn test_timed_out_step_always_fails() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    let step = StepSpec {
        name: "Slow Step".to_string(),
        command: Some("sh -c 'sleep 5'".to_string()),
        timeout_secs: Some(1),
        expect: vec!["never printed".to_string()],
        ..StepSpec::default()
    };

    let outcome = run_step(&step, &ctx).await;
    assert!(!outcome.passed);
    assert_eq!(outcome.message, "Command timed out");
}

/// 步骤体内的意外失败被转化为失败结果，而不是传播出去。
#[tokio::test]
async fn test_unexpected_step_body_failure_is_contained() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    let steps = vec![
        // An unparseable command makes the step body itself error out.
        command_step("broken", "sh -c 'unterminated"),
        command_step("after", "sh -c 'echo fine'"),
    ];

    let report = run_suite(&steps, &ctx).await;
    assert_eq!(report.total(), 2);
    assert!(!report.outcomes()[0].passed);
    assert!(report.outcomes()[0].message.contains("Failed to parse command"));
    assert!(report.outcomes()[1].passed);
}

#[tokio::test]
async fn test_scratch_step_compiles_and_runs_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    // The "compile" writes an executable artifact next to the source, the
    // way a single-file compile would.
    // “编译”在源文件旁写出一个可执行产物，与单文件编译的行为一致。
    let step = StepSpec {
        name: "Color Functionality".to_string(),
        expect: vec!["Test red text".to_string()],
        scratch: Some(ScratchSpec {
            basename: "scratch_color.src".to_string(),
            source: "#!/bin/sh\necho Test red text\n".to_string(),
            compile_args: vec![
                "-c".to_string(),
                "cp scratch_color.src scratch_color && chmod +x scratch_color".to_string(),
            ],
            run_artifact: true,
        }),
        ..StepSpec::default()
    };

    let outcome = run_step(&step, &ctx).await;
    assert!(outcome.passed, "unexpected failure: {}", outcome.message);

    // Source and artifact are gone once the step ends.
    // 步骤结束后源文件和产物都已删除。
    assert!(!dir.path().join("scratch_color.src").exists());
    assert!(!dir.path().join("scratch_color").exists());
}

#[tokio::test]
async fn test_scratch_compile_failure_reports_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    let step = StepSpec {
        name: "Table Functionality".to_string(),
        scratch: Some(ScratchSpec {
            basename: "scratch_table.src".to_string(),
            source: String::new(),
            compile_args: vec!["-c".to_string(), "echo nope >&2; exit 1".to_string()],
            run_artifact: false,
        }),
        ..StepSpec::default()
    };

    let outcome = run_step(&step, &ctx).await;
    assert!(!outcome.passed);
    assert_eq!(outcome.message, "Failed to compile: nope");
    assert!(!dir.path().join("scratch_table.src").exists());
}

/// 编译即通过的临时步骤：产物不运行，编译成功即可。
#[tokio::test]
async fn test_scratch_step_without_run_passes_on_compile() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = make_ctx("sh", dir.path());

    let step = StepSpec {
        name: "Spinner Functionality".to_string(),
        scratch: Some(ScratchSpec {
            basename: "scratch_spinner.src".to_string(),
            source: String::new(),
            compile_args: vec!["-c".to_string(), "exit 0".to_string()],
            run_artifact: false,
        }),
        ..StepSpec::default()
    };

    let outcome = run_step(&step, &ctx).await;
    assert!(outcome.passed);
    assert!(outcome.message.is_empty());
    assert!(!dir.path().join("scratch_spinner.src").exists());
}
