//! # Tags Module / 标签模块
//!
//! The three markers a test class attaches to its methods: `BeforeEach`,
//! `Test` (with an optional priority) and `AfterEach`.
//!
//! 测试类可以附加到方法上的三种标记：`BeforeEach`、`Test`（带可选优先级）和 `AfterEach`。

use std::fmt;

/// Lowest priority value that still counts as prioritized.
pub const MIN_PRIORITY: i32 = 1;
/// Highest priority value that still counts as prioritized.
pub const MAX_PRIORITY: i32 = 10;
/// Sort key of unprioritized tests. Sorts after every legal priority.
/// 未设置优先级的测试的排序键，排在所有合法优先级之后。
pub const UNPRIORITIZED: i32 = i32::MAX;

/// The kind of a tag, used as the key of the tag index.
/// 标签的种类，用作标签索引的键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagKind {
    BeforeEach,
    Test,
    AfterEach,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::BeforeEach => f.write_str("BeforeEach"),
            TagKind::Test => f.write_str("Test"),
            TagKind::AfterEach => f.write_str("AfterEach"),
        }
    }
}

/// Parameters of the `Test` tag.
/// `Test` 标签的参数。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestTag {
    /// Requested priority. `None` means the priority was never set.
    /// 请求的优先级。`None` 表示从未设置。
    pub priority: Option<i32>,
}

impl TestTag {
    pub fn with_priority(priority: i32) -> Self {
        Self {
            priority: Some(priority),
        }
    }

    /// Returns `true` if the priority is set and within `[MIN_PRIORITY, MAX_PRIORITY]`.
    pub fn is_prioritized(&self) -> bool {
        matches!(self.priority, Some(p) if (MIN_PRIORITY..=MAX_PRIORITY).contains(&p))
    }

    /// The key the planner sorts by. Unset or out-of-range priorities
    /// collapse to [`UNPRIORITIZED`].
    ///
    /// 计划器排序所用的键。未设置或超出范围的优先级统一为 [`UNPRIORITIZED`]。
    pub fn sort_key(&self) -> i32 {
        match self.priority {
            Some(p) if self.is_prioritized() => p,
            _ => UNPRIORITIZED,
        }
    }
}

/// A tag value attached to a declared method.
/// 附加到已声明方法上的标签值。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    BeforeEach,
    Test(TestTag),
    AfterEach,
}

impl Tag {
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::BeforeEach => TagKind::BeforeEach,
            Tag::Test(_) => TagKind::Test,
            Tag::AfterEach => TagKind::AfterEach,
        }
    }

    /// The `Test` parameters, if this is a `Test` tag.
    pub fn as_test(&self) -> Option<&TestTag> {
        match self {
            Tag::Test(test) => Some(test),
            _ => None,
        }
    }
}
