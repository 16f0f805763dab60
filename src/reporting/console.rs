//! # Console Reporting Module / 控制台报告模块
//!
//! Writes the per-test lines of a run to any `io::Write` sink.
//!
//! ```text
//! CalculatorTests:
//! test_sum ... ok
//! test_mult ... Values(i32) are not equal!
//!     expected=10021
//!          got=21
//! ```

use colored::*;
use std::io::{self, Write};

use crate::core::config::RunnerConfig;
use crate::core::models::{RunSummary, TestOutcome};
use crate::infra::t;

/// Token written for a passing test.
pub const MSG_GOOD: &str = "ok";

/// Writes the run protocol to a sink.
/// 将运行协议写入输出。
pub struct ConsoleReporter<'a> {
    sink: &'a mut dyn Write,
    keep_colors: bool,
    locale: String,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(sink: &'a mut dyn Write, config: &RunnerConfig) -> Self {
        Self {
            sink,
            keep_colors: config.keeps_colors(),
            locale: config.locale(),
        }
    }

    /// `<class_name>:` on its own line.
    pub fn header(&mut self, class_name: &str) -> io::Result<()> {
        writeln!(self.sink, "{class_name}:")
    }

    /// `<test_name> ... ` without a newline, flushed so the name is visible
    /// while the test runs.
    pub fn test_started(&mut self, test_name: &str) -> io::Result<()> {
        write!(self.sink, "{test_name} ... ")?;
        self.sink.flush()
    }

    /// Completes the line started by [`test_started`](Self::test_started).
    /// 完成由 [`test_started`](Self::test_started) 开始的那一行。
    pub fn test_finished(&mut self, outcome: &TestOutcome) -> io::Result<()> {
        let text = match outcome {
            TestOutcome::Passed => MSG_GOOD.to_string(),
            TestOutcome::AssertionFailed { message } => message.clone(),
            TestOutcome::Errored { trace, .. } => trace.trim_end().to_string(),
        };
        self.write_line(&text)
    }

    /// Localized `N passed, N failed, N errored` line.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let line = t!(
            "run_summary",
            locale = &self.locale,
            passed = summary.passed(),
            failed = summary.failed(),
            errored = summary.errored(),
            total = summary.total()
        );
        let line = if summary.is_success() {
            line.green().bold()
        } else {
            line.red().bold()
        };
        self.write_line(&line.to_string())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        if self.keep_colors {
            writeln!(self.sink, "{text}")
        } else {
            writeln!(self.sink, "{}", strip_ansi(text))
        }
    }
}

/// Removes every ANSI escape sequence, OSC hyperlinks included.
///
/// 移除所有 ANSI 转义序列（包括 OSC 超链接）。
pub fn strip_ansi(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}
