//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the gauntlet
//! runner: command lines, raw invocation results, classification rules,
//! per-step outcomes and the run report.
//!
//! 此模块定义了整个 gauntlet runner 中使用的核心数据结构：
//! 命令行、原始调用结果、判定规则、每个步骤的结果以及运行报告。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Exit code reserved for invocations that never produced a real exit status:
/// a timed-out process or a process that failed to launch at all.
/// 为从未产生真实退出状态的调用保留的退出码：
/// 超时的进程或根本未能启动的进程。
pub const SYNTHETIC_EXIT_CODE: i32 = -1;

/// The stderr text reported for a timed-out invocation.
/// 超时调用报告的 stderr 文本。
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// An external command line: program plus arguments, immutable once built.
/// 外部命令行：程序加参数，构建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    /// The program to execute / 要执行的程序
    pub program: String,
    /// The arguments passed to the program, in order / 按顺序传递给程序的参数
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// A command line with no arguments, e.g. a compiled scratch executable.
    /// 没有参数的命令行，例如已编译的临时可执行文件。
    pub fn bare(program: impl Into<String>) -> Self {
        Self::new(program, Vec::new())
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// The raw result of one external invocation. Produced once per invocation
/// and never mutated; timeouts and launch failures are normalized into this
/// shape so callers have a single failure shape to handle.
///
/// 一次外部调用的原始结果。每次调用只产生一次且从不修改；
/// 超时和启动失败都被归一化为这种形状，因此调用方只需处理一种失败形状。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// The process exit code, or `SYNTHETIC_EXIT_CODE` for timeout/launch failure.
    /// 进程退出码，超时/启动失败时为 `SYNTHETIC_EXIT_CODE`。
    pub exit_code: i32,
    /// Captured standard output as text / 捕获的标准输出文本
    pub stdout: String,
    /// Captured standard error as text / 捕获的标准错误文本
    pub stderr: String,
}

impl InvocationResult {
    /// The synthetic result for a process that exceeded its timeout.
    /// 进程超时后的合成结果。
    pub fn timed_out() -> Self {
        Self {
            exit_code: SYNTHETIC_EXIT_CODE,
            stdout: String::new(),
            stderr: TIMEOUT_MESSAGE.to_string(),
        }
    }

    /// The synthetic result for a process that could not be launched
    /// (missing executable, permission denied, broken pipes, ...).
    /// 无法启动的进程（可执行文件缺失、权限被拒、管道损坏等）的合成结果。
    pub fn launch_failure(description: impl fmt::Display) -> Self {
        Self {
            exit_code: SYNTHETIC_EXIT_CODE,
            stdout: String::new(),
            stderr: description.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// How a step's invocation result is turned into pass/fail.
/// A rule is attached to exactly one step at construction time and never changes.
///
/// 步骤的调用结果如何转化为通过/失败。
/// 规则在构建时附加到且仅附加到一个步骤，之后不再变化。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationRule {
    /// Pass iff the exit code is zero / 当且仅当退出码为零时通过
    ExitCodeOnly,
    /// Pass iff the exit code is zero AND every required substring appears in
    /// stdout (case-sensitive, exact, no regex).
    /// 当且仅当退出码为零且每个必需子串都出现在 stdout 中时通过
    /// （区分大小写，精确匹配，不使用正则）。
    ExitCodeAndContains {
        /// Required substrings, in declaration order / 必需的子串，按声明顺序
        required: Vec<String>,
    },
}

/// The recorded result of one executed step. Immutable; appended once to the
/// run report. Insertion order equals execution order and is the report order.
///
/// 一个已执行步骤的记录结果。不可变；只追加一次到运行报告。
/// 插入顺序等于执行顺序，也是报告顺序。
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// The step name as declared in the suite / 套件中声明的步骤名称
    pub name: String,
    /// Whether the step passed / 步骤是否通过
    pub passed: bool,
    /// Human-readable explanation: empty on pass, stderr or the list of
    /// missing outputs on failure.
    /// 人类可读的说明：通过时为空，失败时为 stderr 或缺失输出列表。
    pub message: String,
    /// Wall-clock time spent executing the step / 执行该步骤花费的墙钟时间
    pub duration: Duration,
}

impl StepOutcome {
    pub fn passed(name: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
            duration,
        }
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
            duration,
        }
    }
}

/// The full ordered log of one run plus its derived counts. Owned by the one
/// run that produced it; exists only for the duration of that run.
///
/// 一次运行的完整有序日志及其派生计数。由产生它的那次运行独占；
/// 仅在该次运行期间存在。
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<StepOutcome>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an outcome in execution order.
    /// 按执行顺序追加一个结果。
    pub fn record(&mut self, outcome: StepOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed_count() == 0
    }

    /// The process exit code this report maps to: `0` iff every step passed,
    /// otherwise `1`. This is the sole exit-code contract exposed to CI.
    /// 此报告对应的进程退出码：所有步骤通过时为 `0`，否则为 `1`。
    /// 这是暴露给 CI 的唯一退出码契约。
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }
}
