//! # Assertions Module / 断言模块
//!
//! Primitive checks for test methods. Every failed check returns the same
//! error type, [`AssertionFailure`], which the executor recognizes and reports
//! with its short diagnostic instead of a full trace.
//!
//! 测试方法使用的基础检查。所有失败的检查都返回同一错误类型 [`AssertionFailure`]，
//! 执行器会识别它，并只报告简短诊断信息而非完整跟踪。
//!
//! ```
//! use fixture_runner::assertions::{assert_equals_i32, assert_true};
//!
//! assert!(assert_equals_i32(21, 3 * 7).is_ok());
//! let failure = assert_true(1 > 2).unwrap_err();
//! assert!(failure.message().contains("are not true!"));
//! ```

use colored::Colorize;
use std::fmt::{self, Debug};

/// The canonical assertion-failure signal. Carries one diagnostic string.
/// 标准的断言失败信号，携带一条诊断字符串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AssertionFailure {}

/// Result of an assertion helper.
pub type AssertResult = Result<(), AssertionFailure>;

/// Builds the diagnostic shared by all helpers:
///
/// ```text
/// Values(i32) are not equal!
///     expected=10021
///          got=21
/// ```
fn diagnostic(headline: String, expected: &dyn fmt::Display, got: &dyn fmt::Display) -> String {
    format!(
        "{headline}\n{}={expected}\n{}={got}",
        "    expected".green(),
        "         got".red()
    )
}

/// Last path segment of a type name, with generic arguments kept short.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                short.push_str(&segment);
                segment.clear();
                short.push(c);
            }
            _ => segment.push(c),
        }
    }
    short.push_str(&segment);
    short
}

/// Checks that two integers are equal.
pub fn assert_equals_i32(expected: i32, got: i32) -> AssertResult {
    if got != expected {
        return Err(AssertionFailure::new(diagnostic(
            "Values(i32) are not equal!".to_string(),
            &expected,
            &got,
        )));
    }
    Ok(())
}

/// Checks that two wide integers are equal.
pub fn assert_equals_i64(expected: i64, got: i64) -> AssertResult {
    if got != expected {
        return Err(AssertionFailure::new(diagnostic(
            "Values(i64) are not equal!".to_string(),
            &expected,
            &got,
        )));
    }
    Ok(())
}

/// Checks that two comparable values are equal, i.e. their ordering is
/// `Ordering::Equal`. The diagnostic prints both values with `Debug`.
///
/// 检查两个可比较的值是否相等，即其排序结果为 `Ordering::Equal`。
pub fn assert_equals<T: Ord + Debug>(expected: T, got: T) -> AssertResult {
    if got.cmp(&expected).is_ne() {
        return Err(AssertionFailure::new(diagnostic(
            format!("Values({}) are not equal!", short_type_name::<T>()),
            &DebugDisplay(&expected),
            &DebugDisplay(&got),
        )));
    }
    Ok(())
}

/// Checks that `got` holds no value.
/// 检查 `got` 不包含任何值。
pub fn assert_null<T: Debug>(got: Option<T>) -> AssertResult {
    match got {
        None => Ok(()),
        Some(value) => Err(AssertionFailure::new(diagnostic(
            format!("Value({}) are not null!", short_type_name::<T>()),
            &"null",
            &DebugDisplay(&value),
        ))),
    }
}

pub fn assert_true(got: bool) -> AssertResult {
    if !got {
        return Err(AssertionFailure::new(diagnostic(
            "Value(bool) are not true!".to_string(),
            &true,
            &got,
        )));
    }
    Ok(())
}

pub fn assert_false(got: bool) -> AssertResult {
    if got {
        return Err(AssertionFailure::new(diagnostic(
            "Value(bool) are not false!".to_string(),
            &false,
            &got,
        )));
    }
    Ok(())
}

struct DebugDisplay<'a, T: Debug>(&'a T);

impl<T: Debug> fmt::Display for DebugDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
