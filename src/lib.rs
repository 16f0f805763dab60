//! # Fixture Runner Library / Fixture Runner 库
//!
//! A minimal single-class unit-test runner. A test class declares its methods
//! with `BeforeEach`, `Test` and `AfterEach` tags; the runner validates the
//! class, orders the tests by priority and runs each one on a fresh fixture,
//! reporting `ok`, an assertion diagnostic or a full error trace per test.
//!
//! 一个最小化的单类单元测试运行器。测试类用 `BeforeEach`、`Test` 和 `AfterEach`
//! 标签声明其方法；运行器校验该类、按优先级排序测试，并在新的夹具实例上运行每个测试，
//! 为每个测试报告 `ok`、断言诊断或完整的错误跟踪。
//!
//! ## Modules / 模块
//!
//! - `core` - Tag discovery, validation, planning and execution
//! - `assertions` - Assertion helpers and the assertion-failure signal
//! - `infra` - Panic capture and i18n support
//! - `reporting` - The line protocol written to the sink
//! - `cli` - Command-line interface and commands
//! - `demo` - Bundled sample test classes
//!
//! - `core` - 标签发现、校验、计划和执行
//! - `assertions` - 断言辅助函数和断言失败信号
//! - `infra` - panic 捕获和国际化支持
//! - `reporting` - 写入输出的行协议
//! - `cli` - 命令行接口和命令
//! - `demo` - 附带的示例测试类

pub mod assertions;
pub mod cli;
pub mod core;
pub mod demo;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::class::{Methods, TestClass};
pub use crate::core::config::{ColorMode, RunnerConfig};
pub use crate::core::models::{RunSummary, TestOutcome};
pub use crate::core::runner::Runner;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

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
