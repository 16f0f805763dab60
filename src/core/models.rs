//! # Data Models Module / 数据模型模块
//!
//! Outcomes of single tests and the summary of a whole run.
//!
//! 单个测试的结果以及整次运行的摘要。

use std::fmt;

/// The step of a test's lifecycle in which a fault occurred.
/// 测试生命周期中发生故障的步骤。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Building the fresh fixture instance.
    Construct,
    BeforeEach,
    Test,
    AfterEach,
    /// Dropping the fixture once its triple is over.
    Drop,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Construct => f.write_str("constructor"),
            Phase::BeforeEach => f.write_str("BeforeEach"),
            Phase::Test => f.write_str("Test"),
            Phase::AfterEach => f.write_str("AfterEach"),
            Phase::Drop => f.write_str("destructor"),
        }
    }
}

/// How a single test ended.
/// 单个测试的结束方式。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// Construction, hooks and the test itself all succeeded.
    Passed,
    /// An assertion helper raised its failure signal.
    /// 断言辅助函数发出了失败信号。
    AssertionFailed {
        /// The assertion diagnostic, possibly multi-line and colored.
        message: String,
    },
    /// Any other error or panic.
    /// 任何其他错误或 panic。
    Errored {
        phase: Phase,
        /// Full diagnostic trace: phase, error chain and backtrace if captured.
        trace: String,
    },
}

impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, TestOutcome::Passed)
    }

    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, TestOutcome::AssertionFailed { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TestOutcome::Errored { .. })
    }
}

/// The outcome of one planned test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    pub name: &'static str,
    pub outcome: TestOutcome,
}

/// Everything that happened in one `run()`, in execution order.
/// 一次 `run()` 中发生的所有事情，按执行顺序排列。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub class_name: &'static str,
    pub reports: Vec<TestReport>,
}

impl RunSummary {
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            reports: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.reports.len()
    }

    pub fn passed(&self) -> usize {
        self.count(TestOutcome::is_passed)
    }

    pub fn failed(&self) -> usize {
        self.count(TestOutcome::is_assertion_failure)
    }

    pub fn errored(&self) -> usize {
        self.count(TestOutcome::is_error)
    }

    /// `true` when every planned test passed.
    pub fn is_success(&self) -> bool {
        self.passed() == self.total()
    }

    /// Names of the executed tests, in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.reports.iter().map(|r| r.name).collect()
    }

    pub fn outcome_of(&self, name: &str) -> Option<&TestOutcome> {
        self.reports
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    fn count(&self, pred: fn(&TestOutcome) -> bool) -> usize {
        self.reports.iter().filter(|r| pred(&r.outcome)).count()
    }
}
