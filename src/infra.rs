//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for Gauntlet Runner,
//! including external process invocation, scratch source files and i18n support.
//!
//! 此模块为 Gauntlet Runner 提供基础设施服务，
//! 包括外部进程调用、临时源文件和国际化支持。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
