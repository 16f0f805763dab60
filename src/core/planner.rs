//! # Test Execution Planner Module / 测试执行计划模块
//!
//! Orders the `Test` entries of a tag index by priority. The sort is stable,
//! so tests sharing a priority (and all unprioritized tests) keep their
//! declaration order.
//!
//! 按优先级对标签索引中的 `Test` 条目排序。排序是稳定的，
//! 因此同优先级的测试（以及所有未设置优先级的测试）保持其声明顺序。

use crate::core::reflect::{MethodEntry, TagIndex};
use crate::core::tags::TagKind;

/// The ordered sequence of tests to execute.
/// 要执行的有序测试序列。
#[derive(Debug)]
pub struct ExecutionPlan<T> {
    pub tests: Vec<MethodEntry<T>>,
}

impl<T> ExecutionPlan<T> {
    /// Simple names of the planned tests, in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.tests.iter().map(MethodEntry::name).collect()
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Creates the execution plan for the given tag index.
/// Prioritized tests come first in ascending priority, then unprioritized ones.
///
/// 为给定标签索引创建执行计划。先按优先级升序执行有优先级的测试，再执行未设置优先级的测试。
pub fn plan_execution<T>(index: &TagIndex<T>) -> ExecutionPlan<T> {
    let mut tests = index.get(TagKind::Test).to_vec();
    // `sort_by_key` is stable.
    tests.sort_by_key(MethodEntry::sort_key);

    tracing::debug!(order = ?tests.iter().map(MethodEntry::name).collect::<Vec<_>>(), "planned tests");
    ExecutionPlan { tests }
}
