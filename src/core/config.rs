//! # Configuration Module / 配置模块
//!
//! Runner settings, loadable from a TOML file. Every field has a default,
//! so an empty file (or no file) is a valid configuration.
//!
//! 运行器设置，可从 TOML 文件加载。每个字段都有默认值，
//! 因此空文件（或没有文件）也是有效配置。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::infra::t;

/// Default configuration file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "FixtureRunner.toml";

/// When ANSI colors reach the sink.
/// 何时将 ANSI 颜色写入输出。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow `colored`'s terminal and environment detection.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Strip every ANSI escape before writing.
    Never,
}

impl ColorMode {
    /// Applies the mode to the process-wide `colored` switch.
    /// `Auto` leaves the environment detection untouched.
    pub fn apply(self) {
        match self {
            ColorMode::Auto => colored::control::unset_override(),
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }

    /// Turns `colored` on for `Always`, whether or not stdout is a terminal.
    /// `Never` is enforced at the sink and `Auto` follows detection, so both
    /// leave the process-wide switch alone.
    pub fn force(self) {
        if self == ColorMode::Always {
            colored::control::set_override(true);
        }
    }
}

/// Runner settings.
/// 运行器设置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerConfig {
    #[serde(default)]
    pub color: ColorMode,

    /// The language for localized messages (e.g., "en", "zh-CN").
    /// Falls back to the current `rust-i18n` locale when unset.
    ///
    /// 本地化消息的语言（例如 "en", "zh-CN"）。未设置时使用当前 `rust-i18n` 区域设置。
    #[serde(default)]
    pub language: Option<String>,

    /// Write a summary line after the last test.
    /// 在最后一个测试之后写出摘要行。
    #[serde(default)]
    pub summary: bool,

    /// Capture a backtrace for every panic, regardless of `RUST_BACKTRACE`.
    #[serde(default)]
    pub force_backtrace: bool,
}

impl RunnerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| t!("config_parse_failed").to_string())
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| t!("config_read_failed_path", path = path.display()).to_string())?;
        Self::from_toml_str(&content)
    }

    /// The locale used for localized messages.
    pub fn locale(&self) -> String {
        match &self.language {
            Some(language) if !language.is_empty() => language.clone(),
            _ => (*rust_i18n::locale()).to_string(),
        }
    }

    /// Whether colors should survive on the way to the sink.
    pub fn keeps_colors(&self) -> bool {
        match self.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}
