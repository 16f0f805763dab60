//! # Runner Module / 运行器模块
//!
//! The host-facing entry point. Construction reflects over the test class,
//! validates it and plans the tests; `run` may then be called any number of
//! times and replays the same plan.
//!
//! 面向宿主程序的入口。构造时对测试类进行反射、校验并计划测试；
//! 之后可以多次调用 `run`，每次重放相同的计划。

use anyhow::Result;
use std::fmt;
use std::io::Write;

use crate::core::class::TestClass;
use crate::core::config::RunnerConfig;
use crate::core::execution::{self, Hooks};
use crate::core::models::RunSummary;
use crate::core::planner::{self, ExecutionPlan};
use crate::core::reflect::TagIndex;
use crate::core::tags::TagKind;
use crate::core::validate;

/// A validated, planned test class.
/// 已校验并已计划的测试类。
pub struct Runner<T> {
    index: TagIndex<T>,
    plan: ExecutionPlan<T>,
    config: RunnerConfig,
}

impl<T: TestClass> Runner<T> {
    /// Builds a runner with the default configuration.
    ///
    /// # Errors
    /// A [`StructuralError`](crate::core::validate::StructuralError) when the
    /// class declares several `BeforeEach` or `AfterEach` methods, or no test.
    pub fn new() -> Result<Self> {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Result<Self> {
        let index = TagIndex::<T>::reflect();
        validate::verify(&index)?;
        let plan = planner::plan_execution(&index);
        Ok(Self {
            index,
            plan,
            config,
        })
    }

    /// Executes every planned test, writing the report to `sink`.
    ///
    /// 执行所有已计划的测试，并将报告写入 `sink`。
    pub fn run(&self, sink: &mut dyn Write) -> Result<RunSummary> {
        let hooks = Hooks {
            before_each: self.index.hook(TagKind::BeforeEach),
            after_each: self.index.hook(TagKind::AfterEach),
        };
        execution::run_plan(&self.plan, &hooks, &self.config, sink)
    }

    /// Runs against standard output.
    pub fn run_to_stdout(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.run(&mut lock)
    }
}

impl<T> Runner<T> {
    pub fn index(&self) -> &TagIndex<T> {
        &self.index
    }

    pub fn plan(&self) -> &ExecutionPlan<T> {
        &self.plan
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}

impl<T: TestClass> fmt::Debug for Runner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("class", &T::class_name())
            .field("plan", &self.plan.names())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::class::Methods;
    use crate::core::config::ColorMode;

    struct Pair;

    impl TestClass for Pair {
        fn class_name() -> &'static str {
            "Pair"
        }

        fn construct() -> Result<Self> {
            Ok(Pair)
        }

        fn declared_methods() -> Methods<Self> {
            Methods::new()
                .test("second", |_| Ok(()))
                .test_with_priority("first", 1, |_| Ok(()))
        }
    }

    #[test]
    fn test_plan_is_built_at_construction() {
        let runner = Runner::<Pair>::new().unwrap();
        assert_eq!(runner.plan().names(), vec!["first", "second"]);
        assert_eq!(runner.index().count(TagKind::Test), 2);
        assert!(format!("{runner:?}").contains("Pair"));
    }

    #[test]
    fn test_run_writes_header_and_lines() {
        let config = RunnerConfig {
            color: ColorMode::Never,
            ..RunnerConfig::default()
        };
        let runner = Runner::<Pair>::with_config(config).unwrap();
        let mut sink = Vec::new();
        let summary = runner.run(&mut sink).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "Pair:\nfirst ... ok\nsecond ... ok\n");
        assert_eq!(summary.names(), vec!["first", "second"]);
    }

    struct Mismatch;

    impl TestClass for Mismatch {
        fn class_name() -> &'static str {
            "Mismatch"
        }

        fn construct() -> Result<Self> {
            Ok(Mismatch)
        }

        fn declared_methods() -> Methods<Self> {
            Methods::new().test("t", |_| {
                crate::assertions::assert_equals_i32(1, 2)?;
                Ok(())
            })
        }
    }

    #[test]
    fn test_always_colors_a_non_terminal_sink() {
        let config = RunnerConfig {
            color: ColorMode::Always,
            ..RunnerConfig::default()
        };
        let runner = Runner::<Mismatch>::with_config(config).unwrap();
        let mut sink = Vec::new();
        runner.run(&mut sink).unwrap();
        let text = String::from_utf8(sink).unwrap();
        assert!(text.contains("\u{1b}["), "expected ANSI escapes in {text:?}");
        assert!(crate::reporting::strip_ansi(&text).contains("    expected=1\n         got=2"));
    }
}
