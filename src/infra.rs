//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the runner,
//! namely panic capture around fixture code and i18n support.
//!
//! 此模块为运行器提供基础设施服务，即夹具代码的 panic 捕获和国际化支持。

pub mod panic;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
