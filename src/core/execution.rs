//! # Step Execution Engine Module / 步骤执行引擎模块
//!
//! This module runs the ordered gauntlet: each step invokes the external
//! tool (or a custom command, or a scratch compile), classifies the raw
//! result, and records an outcome. A failed step never halts the sequence;
//! every declared step always runs, because the purpose of the harness is
//! maximal diagnostic coverage per run, not fail-fast.
//!
//! 此模块运行有序的检查序列：每个步骤调用外部工具（或自定义命令、
//! 或临时源文件编译），判定原始结果并记录结果。
//! 失败的步骤不会中止序列；所有声明的步骤总是运行，
//! 因为本工具的目的是单次运行的最大诊断覆盖，而非快速失败。

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::{
    core::{
        classify::{classify, Verdict},
        config::{ScratchSpec, StepSpec},
        models::{CommandLine, RunReport, StepOutcome},
    },
    infra::{command, fs::ScratchSource, t},
};

/// Everything a step needs from its surrounding run: the tool being driven,
/// the directory to invoke it in, and the fallback timeout. Owned by the one
/// run; there is no ambient state shared between runs.
///
/// 步骤执行所需的运行环境：被驱动的工具、调用目录和回退超时时间。
/// 由单次运行独占；运行之间没有共享的环境状态。
#[derive(Debug, Clone)]
pub struct RunContext {
    pub tool: String,
    pub project_root: PathBuf,
    pub default_timeout: Duration,
    pub locale: String,
}

/// Runs every step in declaration order and collects the report.
///
/// Steps run strictly sequentially; the only blocking operation is the
/// invocation itself, which is bounded by the step's timeout. Any error
/// raised by a step body is caught here, converted into a failed outcome
/// carrying the error's description, and the sequence proceeds; no error
/// propagates out of this function.
///
/// 按声明顺序运行所有步骤并收集报告。
///
/// 步骤严格顺序执行；唯一的阻塞操作是调用本身，由步骤的超时限制。
/// 步骤体抛出的任何错误都在这里被捕获，转化为携带错误描述的失败结果，
/// 序列继续执行 —— 没有错误会从此函数传播出去。
pub async fn run_suite(steps: &[StepSpec], ctx: &RunContext) -> RunReport {
    let mut report = RunReport::new();
    let total = steps.len();

    for (index, step) in steps.iter().enumerate() {
        println!(
            "{}",
            t!(
                "run.step_running",
                locale = &ctx.locale,
                index = index + 1,
                total = total,
                name = &step.name
            )
            .blue()
        );

        let outcome = run_step(step, ctx).await;

        if outcome.passed {
            println!(
                "{}",
                t!(
                    "run.step_passed",
                    locale = &ctx.locale,
                    name = &step.name,
                    duration = format!("{:.2}", outcome.duration.as_secs_f64())
                )
                .green()
            );
        } else {
            println!(
                "{}",
                t!(
                    "run.step_failed",
                    locale = &ctx.locale,
                    name = &step.name,
                    message = outcome.message.trim()
                )
                .red()
            );
        }

        report.record(outcome);
    }

    report
}

/// Executes one step and converts its result (pass, fail or unexpected
/// error) into a `StepOutcome`.
/// 执行一个步骤，并将其结果（通过、失败或意外错误）转化为 `StepOutcome`。
pub async fn run_step(step: &StepSpec, ctx: &RunContext) -> StepOutcome {
    let start = Instant::now();
    let verdict = match run_step_inner(step, ctx).await {
        Ok(verdict) => verdict,
        Err(e) => Verdict {
            passed: false,
            message: format!("{:#}", e),
        },
    };
    let duration = start.elapsed();

    if verdict.passed {
        StepOutcome::passed(&step.name, verdict.message, duration)
    } else {
        StepOutcome::failed(&step.name, verdict.message, duration)
    }
}

/// Dispatches to the correct flow for the step's declared action.
/// 根据步骤声明的动作分派到对应的执行流程。
async fn run_step_inner(step: &StepSpec, ctx: &RunContext) -> Result<Verdict> {
    if let Some(scratch) = &step.scratch {
        run_scratch_step(step, scratch, ctx).await
    } else if let Some(custom_command) = &step.command {
        run_custom_command_step(step, custom_command, ctx).await
    } else {
        run_tool_step(step, ctx).await
    }
}

/// Default flow: invoke the suite's tool with the step's arguments.
/// 默认流程：用步骤的参数调用套件的工具。
async fn run_tool_step(step: &StepSpec, ctx: &RunContext) -> Result<Verdict> {
    let cmd = CommandLine::new(&ctx.tool, step.args.clone());
    let result = command::invoke(
        &cmd,
        Some(&ctx.project_root),
        step.timeout(ctx.default_timeout),
    )
    .await;
    Ok(classify(&result, &step.rule()))
}

/// Executes a step defined by a custom shell command.
/// 执行由自定义 shell 命令定义的步骤。
async fn run_custom_command_step(
    step: &StepSpec,
    custom_command: &str,
    ctx: &RunContext,
) -> Result<Verdict> {
    let expanded_command = shellexpand::full(custom_command)
        .with_context(|| format!("Failed to expand command: {custom_command}"))?
        .to_string();

    let parts = shlex::split(&expanded_command)
        .ok_or_else(|| anyhow::anyhow!("Failed to parse command: {}", expanded_command))?;

    if parts.is_empty() {
        anyhow::bail!("Empty command after parsing.");
    }

    let cmd = CommandLine::new(parts[0].clone(), parts[1..].to_vec());
    let result = command::invoke(
        &cmd,
        Some(&ctx.project_root),
        step.timeout(ctx.default_timeout),
    )
    .await;
    Ok(classify(&result, &step.rule()))
}

/// Scratch flow: write the scratch source, compile it with the tool, and
/// optionally run the compiled artifact. The `ScratchSource` guard removes
/// the source and the artifact on every exit path out of this function.
///
/// 临时源文件流程：写入临时源文件，用工具编译，
/// 并可选地运行编译产物。无论以何种路径退出此函数，
/// `ScratchSource` guard 都会删除源文件和产物。
async fn run_scratch_step(
    step: &StepSpec,
    scratch: &ScratchSpec,
    ctx: &RunContext,
) -> Result<Verdict> {
    let guard = ScratchSource::create(&ctx.project_root, &scratch.basename, &scratch.source)?;
    let timeout = step.timeout(ctx.default_timeout);

    let compile = CommandLine::new(&ctx.tool, scratch.compile_args.clone());
    let compile_result = command::invoke(&compile, Some(&ctx.project_root), timeout).await;

    if !compile_result.is_success() {
        return Ok(Verdict {
            passed: false,
            message: format!("Failed to compile: {}", compile_result.stderr.trim()),
        });
    }

    if !scratch.run_artifact {
        return Ok(Verdict {
            passed: true,
            message: String::new(),
        });
    }

    let artifact = CommandLine::bare(guard.artifact_path().display().to_string());
    let run_result = command::invoke(&artifact, Some(&ctx.project_root), timeout).await;
    Ok(classify(&run_result, &step.rule()))
}
