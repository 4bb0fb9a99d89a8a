// src/commands/run.rs

use anyhow::{Context, Result};
use colored::*;
use std::{fs, path::PathBuf, time::Duration};

use crate::{
    core::{
        config::SuiteConfig,
        execution::{run_suite, RunContext},
        models::CommandLine,
        planner,
    },
    infra::{command, t},
    reporting::print_summary,
};

/// Timeout for the preflight reachability check, separate from step timeouts.
/// 预检可达性检查的超时时间，独立于步骤超时。
const PREFLIGHT_TIMEOUT: Duration = Duration::from_secs(30);

pub async fn execute(config: PathBuf, project_dir: PathBuf, quick: bool) -> Result<()> {
    let (suite, config_path) = setup_and_parse_config(&config)?;
    let locale = suite.language.clone();
    rust_i18n::set_locale(&locale);

    let project_root = fs::canonicalize(&project_dir).with_context(|| {
        format!("Project directory not found: {}", project_dir.display())
    })?;

    println!(
        "{}",
        t!("run.loading_suite", locale = &locale, path = config_path.display())
    );
    println!(
        "{}",
        t!("run.project_root_detected", locale = &locale, path = project_root.display())
    );

    // Preflight: the suite is pointless if the tool is not reachable, so this
    // aborts before any step runs.
    // 预检：如果工具不可达，套件毫无意义，因此在任何步骤运行之前中止。
    preflight(&suite, &project_root, &locale).await?;

    let plan = planner::plan_execution(&suite, quick)?;

    println!(
        "{}",
        t!("run.suite_banner", locale = &locale, tool = suite.tool.yellow()).bold()
    );
    println!("{}", "=".repeat(50));

    if quick {
        println!(
            "{}",
            t!(
                "run.quick_mode",
                locale = &locale,
                count = plan.steps_to_run.len(),
                total = plan.steps_to_run.len() + plan.filtered_quick_count
            )
            .cyan()
        );
    }

    if plan.steps_to_run.is_empty() {
        println!("{}", t!("run.no_steps", locale = &locale).green());
        return Ok(());
    }

    let ctx = RunContext {
        tool: suite.tool.clone(),
        project_root,
        default_timeout: suite.default_timeout(),
        locale: locale.clone(),
    };

    let report = run_suite(&plan.steps_to_run, &ctx).await;

    let exit_code = print_summary(&report, &locale);

    if exit_code != 0 {
        anyhow::bail!(t!(
            "run.suite_failed",
            locale = &locale,
            count = report.failed_count()
        ));
    }
    Ok(())
}

fn setup_and_parse_config(config_path_arg: &PathBuf) -> Result<(SuiteConfig, PathBuf)> {
    let config_path = fs::canonicalize(config_path_arg).with_context(|| {
        format!("Failed to read suite config: {}", config_path_arg.display())
    })?;

    let config_content = fs::read_to_string(&config_path).with_context(|| {
        format!("Failed to read suite config: {}", config_path.display())
    })?;

    let suite: SuiteConfig = toml::from_str(&config_content)
        .with_context(|| format!("Failed to parse suite config: {}", config_path.display()))?;

    Ok((suite, config_path))
}

/// Confirms the external tool is reachable before any step runs. On success
/// the tool's version line is echoed; on failure the run aborts with exit 1.
/// 在任何步骤运行之前确认外部工具可达。成功时回显工具的版本行；
/// 失败时以退出码 1 中止运行。
async fn preflight(suite: &SuiteConfig, project_root: &std::path::Path, locale: &str) -> Result<()> {
    let check = CommandLine::new(&suite.tool, suite.preflight_args.clone());
    let result = command::invoke(&check, Some(project_root), PREFLIGHT_TIMEOUT).await;

    if !result.is_success() {
        anyhow::bail!(t!("run.preflight_failed", locale = &locale, tool = &suite.tool));
    }

    println!(
        "{}",
        t!(
            "run.preflight_version",
            locale = &locale,
            tool = &suite.tool,
            version = result.stdout.trim()
        )
    );
    Ok(())
}
