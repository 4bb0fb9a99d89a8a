//! # Console Reporting Module / 控制台报告模块
//!
//! Renders the run report: a summary table of `STATUS | name | message`
//! rows in execution order, a totals line, and a closing banner. The table
//! rows, the `PASS`/`FAIL` markers and the totals line are the CI-facing
//! output contract and are not localized; headings and banners are.
//!
//! 渲染运行报告：按执行顺序排列的 `STATUS | name | message` 摘要表、
//! 总计行和结束横幅。表格行、`PASS`/`FAIL` 标记和总计行是面向 CI 的
//! 输出契约，不做本地化；标题和横幅则做本地化。

use colored::*;

use crate::core::models::RunReport;
use crate::infra::t;

const RULE_WIDTH: usize = 50;

/// Prints the summary table, the totals line and the closing banner for one
/// run, and returns the process exit code the report maps to: `0` iff every
/// step passed, else `1`.
///
/// 打印单次运行的摘要表、总计行和结束横幅，
/// 并返回报告对应的进程退出码：所有步骤通过时为 `0`，否则为 `1`。
///
/// # Output Format / 输出格式
/// ```text
/// ==================================================
/// Test Summary:
/// ==================================================
/// PASS | Build                     |
/// FAIL | Unit Tests                | test failure output...
/// ==================================================
/// Total: 8 | Passed: 7 | Failed: 1
/// ❌ 1 test(s) failed.
/// ```
pub fn print_summary(report: &RunReport, locale: &str) -> i32 {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("{}", t!("report.summary_heading", locale = locale).bold());
    println!("{}", "=".repeat(RULE_WIDTH));

    for outcome in report.outcomes() {
        let status = if outcome.passed {
            format!("{:<4}", "PASS").green()
        } else {
            format!("{:<4}", "FAIL").red()
        };
        // Keep multi-line failure output on one report row.
        // 将多行失败输出保持在一行报告中。
        let message = outcome.message.replace('\n', " ");
        println!("{} | {:<25} | {}", status, outcome.name, message.trim());
    }

    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Total: {} | Passed: {} | Failed: {}",
        report.total(),
        report.passed_count(),
        report.failed_count()
    );

    if report.all_passed() {
        println!("{}", t!("report.all_passed", locale = locale).green().bold());
    } else {
        println!(
            "{}",
            t!(
                "report.some_failed",
                locale = locale,
                count = report.failed_count()
            )
            .red()
            .bold()
        );
    }

    report.exit_code()
}
