//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the runner: tag discovery,
//! structural validation, priority planning and isolated test execution.
//!
//! 此模块包含运行器的核心功能：标签发现、结构校验、优先级计划和隔离的测试执行。

pub mod class;
pub mod config;
pub mod execution;
pub mod models;
pub mod planner;
pub mod reflect;
pub mod registry;
pub mod runner;
pub mod tags;
pub mod validate;

// Re-exports
pub use class::{Methods, TestClass};
pub use models::{RunSummary, TestOutcome};
pub use runner::Runner;
