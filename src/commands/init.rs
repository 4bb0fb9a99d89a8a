//! # Suite Initialization Module / 套件初始化模块
//!
//! Creates a `Suite.toml` in the current directory, either through a small
//! interactive wizard or, with `--non-interactive`, by writing the default
//! gauntlet directly. The default suite is the Zig CLI-library gauntlet this
//! harness was built around: whole-project checks plus per-facet scratch
//! compiles.
//!
//! 在当前目录创建 `Suite.toml`，可以通过小型交互式向导，
//! 或使用 `--non-interactive` 直接写入默认检查序列。
//! 默认套件是本工具最初围绕的 Zig CLI 库检查序列：
//! 整体项目检查加上按功能面的临时源文件编译。

use anyhow::{Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::fs;
use std::path::Path;

use crate::core::config::{ScratchSpec, StepSpec, SuiteConfig};
use crate::infra::t;

/// Runs the wizard (or the non-interactive default path) to generate `Suite.toml`.
/// 运行向导（或非交互式默认路径）以生成 `Suite.toml`。
pub fn run_init_wizard(language: &str, non_interactive: bool) -> Result<()> {
    let config_path = Path::new("Suite.toml");
    let theme = ColorfulTheme::default();

    if !non_interactive {
        println!("\n{}", t!("init.wizard_welcome", locale = language).cyan().bold());
        println!("{}", t!("init.wizard_description", locale = language));
    }

    if config_path.exists() && !non_interactive {
        let confirmation = Confirm::with_theme(&theme)
            .with_prompt(
                t!(
                    "init.overwrite_prompt",
                    locale = language,
                    path = config_path.display()
                )
                .to_string(),
            )
            .default(false)
            .interact()
            .context(t!("init.user_input_failed", locale = language).to_string())?;
        if !confirmation {
            println!("{}", t!("init.aborted", locale = language));
            return Ok(());
        }
    }

    if non_interactive {
        let suite = default_suite(language, "zig", true);
        return write_config(config_path, &suite, language);
    }

    let tool: String = Input::with_theme(&theme)
        .with_prompt(t!("init.tool_prompt", locale = language).to_string())
        .default("zig".to_string())
        .interact_text()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let include_facets = Confirm::with_theme(&theme)
        .with_prompt(t!("init.facets_prompt", locale = language).to_string())
        .default(true)
        .interact()
        .context(t!("init.user_input_failed", locale = language).to_string())?;

    let suite = default_suite(language, &tool, include_facets);
    write_config(config_path, &suite, language)
}

fn write_config(path: &Path, suite: &SuiteConfig, language: &str) -> Result<()> {
    let content = toml::to_string_pretty(suite)
        .context("Failed to serialize suite configuration")?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!(
        "{}",
        t!("init.config_written", locale = language, path = path.display()).green()
    );
    Ok(())
}

/// The default gauntlet: five whole-project checks (the `--quick` subset)
/// and, optionally, four per-facet scratch-compile checks. Each scratch step
/// uses a distinct basename so steps cannot interfere through stale artifacts.
///
/// 默认检查序列：五个整体项目检查（即 `--quick` 子集），
/// 以及可选的四个按功能面的临时源文件编译检查。
/// 每个临时步骤使用不同的文件名，以免步骤之间通过残留产物相互干扰。
pub fn default_suite(language: &str, tool: &str, include_facets: bool) -> SuiteConfig {
    let mut steps = vec![
        StepSpec {
            name: "Build".to_string(),
            args: vec!["build".to_string()],
            quick: true,
            ..StepSpec::default()
        },
        StepSpec {
            name: "Unit Tests".to_string(),
            args: vec!["build".to_string(), "test".to_string()],
            quick: true,
            ..StepSpec::default()
        },
        StepSpec {
            name: "Performance Tests".to_string(),
            args: vec!["build".to_string(), "perf".to_string()],
            quick: true,
            ..StepSpec::default()
        },
        StepSpec {
            name: "Main Application".to_string(),
            args: vec!["build".to_string(), "run".to_string()],
            timeout_secs: Some(60),
            expect: vec![
                "This is red text".to_string(),
                "This is green text".to_string(),
                "This is blue text".to_string(),
                "Progress Bar Demo".to_string(),
                "Spinner Demo".to_string(),
                "Table Demo".to_string(),
                "Alice".to_string(),
                "Laptop".to_string(),
            ],
            quick: true,
            ..StepSpec::default()
        },
        StepSpec {
            name: "Help Command".to_string(),
            args: vec!["build".to_string(), "--help".to_string()],
            expect: vec!["Usage".to_string()],
            quick: true,
            ..StepSpec::default()
        },
    ];

    if include_facets {
        steps.extend([
            StepSpec {
                name: "Color Functionality".to_string(),
                expect: vec!["Test red text".to_string()],
                scratch: Some(ScratchSpec {
                    basename: "scratch_color.zig".to_string(),
                    source: COLOR_SCRATCH_SOURCE.to_string(),
                    compile_args: compile_args("scratch_color.zig", "scratch_color"),
                    run_artifact: true,
                }),
                ..StepSpec::default()
            },
            StepSpec {
                name: "Progress Bar Functionality".to_string(),
                scratch: Some(ScratchSpec {
                    basename: "scratch_progress.zig".to_string(),
                    source: PROGRESS_SCRATCH_SOURCE.to_string(),
                    compile_args: compile_args("scratch_progress.zig", "scratch_progress"),
                    run_artifact: false,
                }),
                ..StepSpec::default()
            },
            StepSpec {
                name: "Spinner Functionality".to_string(),
                scratch: Some(ScratchSpec {
                    basename: "scratch_spinner.zig".to_string(),
                    source: SPINNER_SCRATCH_SOURCE.to_string(),
                    compile_args: compile_args("scratch_spinner.zig", "scratch_spinner"),
                    run_artifact: false,
                }),
                ..StepSpec::default()
            },
            StepSpec {
                name: "Table Functionality".to_string(),
                scratch: Some(ScratchSpec {
                    basename: "scratch_table.zig".to_string(),
                    source: TABLE_SCRATCH_SOURCE.to_string(),
                    compile_args: compile_args("scratch_table.zig", "scratch_table"),
                    run_artifact: false,
                }),
                ..StepSpec::default()
            },
        ]);
    }

    SuiteConfig {
        language: language.to_string(),
        tool: tool.to_string(),
        preflight_args: vec!["version".to_string()],
        default_timeout_secs: 30,
        steps,
    }
}

fn compile_args(basename: &str, stem: &str) -> Vec<String> {
    vec![
        "build-exe".to_string(),
        basename.to_string(),
        "--name".to_string(),
        stem.to_string(),
    ]
}

const COLOR_SCRATCH_SOURCE: &str = r#"const std = @import("std");
const cli_color = @import("src/lib/cli_color.zig");

pub fn main() !void {
    try cli_color.printlnColor("Test red text", .red);
    try cli_color.printlnColor("Test green text", .green);
    try cli_color.printlnColor("Test blue text", .blue);
}
"#;

const PROGRESS_SCRATCH_SOURCE: &str = r#"const std = @import("std");
const progress = @import("src/lib/progress.zig");

pub fn main() !void {
    var pb = try progress.ProgressBar.init(10, null);
    defer pb.finish() catch {};

    var i: usize = 0;
    while (i <= 10) : (i += 1) {
        try pb.update(i);
    }
    try pb.finish();
}
"#;

const SPINNER_SCRATCH_SOURCE: &str = r#"const std = @import("std");
const spinner = @import("src/lib/spinner.zig");

pub fn main() !void {
    var s = try spinner.Spinner.init("Testing...", null);
    defer _ = s.stop("Test complete!") catch {};

    try s.start();
    try s.update();
    try s.update();
    try s.stop("Test complete!");
}
"#;

const TABLE_SCRATCH_SOURCE: &str = r#"const std = @import("std");
const table = @import("src/lib/table.zig");

pub fn main() !void {
    const columns = [_]table.ColumnConfig{
        table.ColumnConfig{ .header = "Name", .alignment = .left },
        table.ColumnConfig{ .header = "Age", .alignment = .right },
    };

    var t = try table.Table.init(std.heap.page_allocator, &columns, null);
    defer t.deinit();

    try t.addRow(&[_][]const u8{ "Alice", "25" });
    try t.addRow(&[_][]const u8{ "Bob", "30" });
}
"#;
