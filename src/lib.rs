//! # Gauntlet Runner Library / Gauntlet Runner 库
//!
//! This library provides the core functionality for the Gauntlet Runner tool,
//! a configuration-driven acceptance harness that drives an external build
//! tool through an ordered gauntlet of checks.
//!
//! 此库为 Gauntlet Runner 工具提供核心功能，
//! 这是一个配置驱动的验收测试工具，按顺序驱动外部构建工具完成一系列检查。
//!
//! ## Modules / 模块
//!
//! - `core` - Data models, outcome classification and the step execution engine
//! - `infra` - Infrastructure services: process invocation and scratch files
//! - `reporting` - Console report rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、结果判定和步骤执行引擎
//! - `infra` - 基础设施服务：进程调用和临时源文件
//! - `reporting` - 控制台报告渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::classify;
pub use crate::core::config;
pub use crate::core::execution;
pub use crate::core::models;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
