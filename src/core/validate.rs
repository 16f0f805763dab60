//! # Validator Module / 校验模块
//!
//! Structural rules over a tag index: at most one `BeforeEach`, at most one
//! `AfterEach`, at least one `Test`. Violations are fatal and are raised
//! before any test runs.
//!
//! 标签索引的结构规则：最多一个 `BeforeEach`，最多一个 `AfterEach`，至少一个 `Test`。
//! 违反规则是致命的，并在任何测试运行之前报告。

use std::fmt;

use crate::core::reflect::TagIndex;
use crate::core::tags::TagKind;

/// A test class that breaks the structural rules.
/// 违反结构规则的测试类。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    /// More than one `BeforeEach` method; carries the count found.
    DuplicateBeforeEach(usize),
    /// More than one `AfterEach` method; carries the count found.
    DuplicateAfterEach(usize),
    /// No `Test` method at all.
    NoTests,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::DuplicateBeforeEach(found) => {
                write!(f, "BeforeEach method must be alone (found {found})")
            }
            StructuralError::DuplicateAfterEach(found) => {
                write!(f, "AfterEach method must be alone (found {found})")
            }
            StructuralError::NoTests => f.write_str("Test methods not found"),
        }
    }
}

impl std::error::Error for StructuralError {}

/// Checks the structural rules, in the order `BeforeEach`, `AfterEach`, `Test`.
/// Missing hooks are allowed.
pub fn verify<T>(index: &TagIndex<T>) -> Result<(), StructuralError> {
    let before = index.count(TagKind::BeforeEach);
    if before > 1 {
        return Err(StructuralError::DuplicateBeforeEach(before));
    }
    let after = index.count(TagKind::AfterEach);
    if after > 1 {
        return Err(StructuralError::DuplicateAfterEach(after));
    }
    if index.count(TagKind::Test) == 0 {
        return Err(StructuralError::NoTests);
    }
    tracing::debug!("structural rules hold");
    Ok(())
}
