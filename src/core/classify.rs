//! # Result Classification Module / 结果判定模块
//!
//! Turns a raw invocation result and a step's classification rule into a
//! pass/fail verdict with a human-readable explanation. Classification is a
//! pure function of its two inputs: no hidden state, no randomness, so step
//! outcomes are reproducible given identical process output.
//!
//! 将原始调用结果和步骤的判定规则转化为带有人类可读说明的通过/失败裁决。
//! 判定是其两个输入的纯函数：没有隐藏状态，没有随机性，
//! 因此在进程输出相同时步骤结果可复现。

use crate::core::models::{ClassificationRule, InvocationResult};

/// A pass/fail verdict plus its explanation.
/// 通过/失败裁决及其说明。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    pub message: String,
}

impl Verdict {
    fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Classifies one invocation result under the given rule.
///
/// Required-substring checks are evaluated only when the exit code is zero;
/// on a nonzero exit the verdict carries the raw stderr verbatim, without
/// attempting substring matching, so a crash is never masked as a
/// "missing output" failure. Missing entries are listed in the order they
/// were declared, not the order found.
///
/// 在给定规则下判定一次调用结果。
///
/// 仅当退出码为零时才检查必需子串；退出码非零时，裁决原样携带 stderr，
/// 不进行子串匹配，这样崩溃不会被掩盖为"缺少输出"的失败。
/// 缺失条目按声明顺序列出，而非发现顺序。
pub fn classify(result: &InvocationResult, rule: &ClassificationRule) -> Verdict {
    if !result.is_success() {
        return Verdict::fail(result.stderr.clone());
    }

    match rule {
        ClassificationRule::ExitCodeOnly => Verdict::pass(),
        ClassificationRule::ExitCodeAndContains { required } => {
            let missing: Vec<&str> = required
                .iter()
                .filter(|expected| !result.stdout.contains(expected.as_str()))
                .map(String::as_str)
                .collect();

            if missing.is_empty() {
                Verdict::pass()
            } else {
                Verdict::fail(format!(
                    "Missing expected outputs: {}",
                    missing.join(", ")
                ))
            }
        }
    }
}
