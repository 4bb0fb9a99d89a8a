use crate::core::models::ClassificationRule;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Represents a single step defined in the suite configuration.
/// A step names exactly one action: tool arguments (`args`), a custom
/// command line (`command`), or a scratch compile (`scratch`).
///
/// 代表套件配置中定义的单个步骤。
/// 每个步骤只声明一种动作：工具参数（`args`）、自定义命令行（`command`）
/// 或临时源文件编译（`scratch`）。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StepSpec {
    /// The unique name for the step, used in progress lines and the report.
    /// 步骤的唯一名称，用于进度行和报告。
    pub name: String,
    /// Arguments appended to the suite's tool, e.g. `["build", "test"]`.
    /// 追加到套件工具后的参数，例如 `["build", "test"]`。
    #[serde(default)]
    pub args: Vec<String>,
    /// An optional full custom command line, parsed with shell-style quoting
    /// and environment expansion. Overrides nothing: a step declares either
    /// `args`, `command` or `scratch`.
    /// 可选的完整自定义命令行，按 shell 引号规则解析并展开环境变量。
    /// 每个步骤只能声明 `args`、`command` 或 `scratch` 之一。
    #[serde(default)]
    pub command: Option<String>,
    /// Substrings that must appear in stdout for the step to pass. Empty
    /// means the exit code alone decides.
    /// 步骤通过所需的、必须出现在 stdout 中的子串。为空时仅由退出码决定。
    #[serde(default)]
    pub expect: Vec<String>,
    /// An optional timeout in seconds for this step. Falls back to the
    /// suite's `default_timeout_secs`.
    /// 此步骤的可选超时时间（秒）。缺省时回退到套件的 `default_timeout_secs`。
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Whether this step is part of the `--quick` subset.
    /// 此步骤是否属于 `--quick` 子集。
    #[serde(default)]
    pub quick: bool,
    /// Scratch-source configuration for steps that compile an isolated
    /// fixture instead of driving the tool's own build graph.
    /// 临时源文件配置，用于编译隔离样例而非驱动工具自身构建图的步骤。
    #[serde(default)]
    pub scratch: Option<ScratchSpec>,
}

impl StepSpec {
    /// Derives the classification rule attached to this step.
    /// 派生附加到此步骤的判定规则。
    pub fn rule(&self) -> ClassificationRule {
        if self.expect.is_empty() {
            ClassificationRule::ExitCodeOnly
        } else {
            ClassificationRule::ExitCodeAndContains {
                required: self.expect.clone(),
            }
        }
    }

    /// The effective timeout for this step.
    /// 此步骤的有效超时时间。
    pub fn timeout(&self, default_timeout: Duration) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(default_timeout)
    }
}

impl Default for StepSpec {
    fn default() -> Self {
        Self {
            name: "unknown".to_string(),
            args: vec![],
            command: None,
            expect: vec![],
            timeout_secs: None,
            quick: false,
            scratch: None,
        }
    }
}

/// Configuration for a scratch-compile step: the harness writes `source` to
/// `basename` in the working directory, invokes the tool with `compile_args`,
/// and optionally runs the compiled artifact. Source and artifact are removed
/// when the step ends, whatever the result.
///
/// 临时编译步骤的配置：工具将 `source` 写入工作目录中的 `basename`，
/// 使用 `compile_args` 调用工具，并可选地运行编译产物。
/// 无论结果如何，源文件和产物都会在步骤结束时被删除。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScratchSpec {
    /// The scratch source file name. Must be distinct across the suite so
    /// steps cannot interfere through stale artifacts.
    /// 临时源文件名。在整个套件中必须唯一，以免步骤之间通过残留产物相互干扰。
    pub basename: String,
    /// The scratch source text written to `basename`.
    /// 写入 `basename` 的临时源文本。
    pub source: String,
    /// Arguments passed to the tool to compile the scratch source.
    /// 传递给工具以编译临时源文件的参数。
    pub compile_args: Vec<String>,
    /// Whether to run the compiled artifact and classify its output. When
    /// `false` the step passes as soon as the compile succeeds.
    /// 是否运行编译产物并判定其输出。为 `false` 时编译成功即通过。
    #[serde(default)]
    pub run_artifact: bool,
}

/// Represents the entire suite configuration, loaded from a TOML file.
/// 代表从 TOML 文件加载的整个套件配置。
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SuiteConfig {
    /// The language for the runner's output messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 运行器输出消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The external program driven by tool steps and the preflight check.
    /// 工具步骤和预检所驱动的外部程序。
    pub tool: String,

    /// Arguments for the preflight reachability check, run once before any
    /// step. Defaults to `["version"]`.
    /// 预检可达性检查的参数，在所有步骤之前运行一次。默认为 `["version"]`。
    #[serde(default = "default_preflight_args")]
    pub preflight_args: Vec<String>,

    /// The timeout applied to steps that do not declare their own, in seconds.
    /// 未声明自身超时的步骤所使用的超时时间（秒）。
    #[serde(default = "default_timeout_secs")]
    pub default_timeout_secs: u64,

    /// All steps, in declaration order. Declaration order is execution order.
    /// 所有步骤，按声明顺序。声明顺序即执行顺序。
    pub steps: Vec<StepSpec>,
}

impl SuiteConfig {
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(self.default_timeout_secs)
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_preflight_args() -> Vec<String> {
    vec!["version".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}
