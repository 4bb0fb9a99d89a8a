//! # Execution Planner Module / 执行计划模块
//!
//! Validates the suite and selects the steps to run. Declaration order is
//! preserved: the planner filters, it never reorders, because execution
//! order is the report order.
//!
//! 校验套件并选择要运行的步骤。保留声明顺序：
//! 计划器只做过滤，从不重排，因为执行顺序就是报告顺序。

use crate::core::config::{StepSpec, SuiteConfig};
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Represents the planned execution of a suite.
/// 表示套件的执行计划。
#[derive(Debug)]
pub struct ExecutionPlan {
    /// The steps to execute, in declaration order.
    /// 要执行的步骤，按声明顺序。
    pub steps_to_run: Vec<StepSpec>,
    /// The number of steps excluded by quick mode.
    /// 被快速模式排除的步骤数量。
    pub filtered_quick_count: usize,
}

/// Creates an execution plan for the given suite.
///
/// Validation happens here, before anything is invoked: every step must name
/// exactly one action, timeouts must be positive, and scratch basenames must
/// be distinct across the whole suite: reusing one scratch name across steps
/// would let a stale artifact from one step silently satisfy a later one.
///
/// 为给定套件创建执行计划。
///
/// 校验在任何调用发生之前进行：每个步骤必须且只能声明一种动作，
/// 超时必须为正，临时源文件名在整个套件中必须唯一 ——
/// 跨步骤复用同一个临时文件名会让某步骤的残留产物悄悄满足后续步骤。
pub fn plan_execution(suite: &SuiteConfig, quick: bool) -> Result<ExecutionPlan> {
    if suite.default_timeout_secs == 0 {
        bail!("default_timeout_secs must be positive");
    }

    let mut scratch_names: HashSet<&str> = HashSet::new();

    for step in &suite.steps {
        let actions = [
            !step.args.is_empty(),
            step.command.is_some(),
            step.scratch.is_some(),
        ]
        .iter()
        .filter(|&&declared| declared)
        .count();

        if actions == 0 {
            bail!("Step '{}' declares no action (args, command or scratch)", step.name);
        }
        if actions > 1 {
            bail!(
                "Step '{}' declares more than one action (args, command or scratch)",
                step.name
            );
        }

        if step.timeout_secs == Some(0) {
            bail!("Step '{}' declares a zero timeout", step.name);
        }

        if let Some(scratch) = &step.scratch {
            if !scratch_names.insert(scratch.basename.as_str()) {
                bail!(
                    "Scratch basename '{}' is used by more than one step",
                    scratch.basename
                );
            }
        }
    }

    let total = suite.steps.len();
    let steps_to_run: Vec<StepSpec> = if quick {
        suite.steps.iter().filter(|s| s.quick).cloned().collect()
    } else {
        suite.steps.clone()
    };

    Ok(ExecutionPlan {
        filtered_quick_count: total - steps_to_run.len(),
        steps_to_run,
    })
}
