//! # Reporting Module / 报告模块
//!
//! This module writes the run protocol to a text sink: the class header, one
//! `<name> ... <outcome>` group per test and an optional localized summary.
//!
//! 此模块将运行协议写入文本输出：类名标题、每个测试一组 `<name> ... <outcome>`，
//! 以及可选的本地化摘要。

pub mod console;

pub use console::{ConsoleReporter, strip_ansi};
