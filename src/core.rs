//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Gauntlet Runner,
//! including data models, outcome classification, execution planning
//! and the step execution engine.
//!
//! 此模块包含 Gauntlet Runner 的核心功能，
//! 包括数据模型、结果判定、执行计划和步骤执行引擎。

pub mod classify;
pub mod config;
pub mod execution;
pub mod models;
pub mod planner;

// Re-exports
pub use config::SuiteConfig;
pub use execution::run_suite;
pub use models::{RunReport, StepOutcome};
