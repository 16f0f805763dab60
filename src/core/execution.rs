//! # Test Execution Engine Module / 测试执行引擎模块
//!
//! Runs one planned test at a time: fresh fixture, `BeforeEach`, the test,
//! `AfterEach`. The first fault skips the remaining steps and decides the
//! outcome; the next test runs regardless.
//!
//! 每次运行一个已计划的测试：新的夹具实例、`BeforeEach`、测试本身、`AfterEach`。
//! 第一个故障会跳过剩余步骤并决定结果；无论如何都会继续下一个测试。

use anyhow::{Context, Result};
use std::io::Write;

use crate::assertions::AssertionFailure;
use crate::core::class::TestClass;
use crate::core::config::RunnerConfig;
use crate::core::models::{Phase, RunSummary, TestOutcome, TestReport};
use crate::core::planner::ExecutionPlan;
use crate::core::reflect::MethodEntry;
use crate::infra::panic;
use crate::reporting::ConsoleReporter;

/// The hooks wrapped around every test.
/// 包裹每个测试的钩子。
pub struct Hooks<'a, T> {
    pub before_each: Option<&'a MethodEntry<T>>,
    pub after_each: Option<&'a MethodEntry<T>>,
}

/// Executes every planned test and writes one result group per test.
/// Only sink I/O errors are returned; test failures end up in the summary.
///
/// 执行每个已计划的测试，并为每个测试写出一组结果。只返回输出 I/O 错误；测试失败记录在摘要中。
pub fn run_plan<T: TestClass>(
    plan: &ExecutionPlan<T>,
    hooks: &Hooks<'_, T>,
    config: &RunnerConfig,
    sink: &mut dyn Write,
) -> Result<RunSummary> {
    config.color.force();
    let mut reporter = ConsoleReporter::new(sink, config);
    let mut summary = RunSummary::new(T::class_name());

    reporter
        .header(T::class_name())
        .context("Failed to write to the report sink")?;

    for test in &plan.tests {
        reporter
            .test_started(test.name())
            .context("Failed to write to the report sink")?;

        let outcome = run_test(test, hooks, config.force_backtrace);
        tracing::debug!(test = test.name(), ?outcome, "test finished");

        reporter
            .test_finished(&outcome)
            .context("Failed to write to the report sink")?;
        summary.reports.push(TestReport {
            name: test.name(),
            outcome,
        });
    }

    if config.summary {
        reporter
            .summary(&summary)
            .context("Failed to write to the report sink")?;
    }
    Ok(summary)
}

/// A fault together with the step and method that raised it.
struct Fault {
    phase: Phase,
    method: &'static str,
    error: anyhow::Error,
}

impl Fault {
    fn at(phase: Phase, method: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |error| Self {
            phase,
            method,
            error,
        }
    }
}

/// Runs one `(before, test, after)` triple on a freshly constructed fixture.
pub fn run_test<T: TestClass>(
    test: &MethodEntry<T>,
    hooks: &Hooks<'_, T>,
    force_backtrace: bool,
) -> TestOutcome {
    match run_triple(test, hooks, force_backtrace) {
        Ok(()) => TestOutcome::Passed,
        Err(fault) => classify(fault),
    }
}

fn run_triple<T: TestClass>(
    test: &MethodEntry<T>,
    hooks: &Hooks<'_, T>,
    force_backtrace: bool,
) -> Result<(), Fault> {
    let mut instance =
        guarded(force_backtrace, T::construct).map_err(Fault::at(Phase::Construct, "new"))?;

    let steps = run_steps(&mut instance, test, hooks, force_backtrace);
    // Dropped inside the guard so a panicking `Drop` stays contained.
    let dropped = guarded(force_backtrace, || {
        drop(instance);
        Ok(())
    });

    steps?;
    dropped.map_err(Fault::at(Phase::Drop, "drop"))
}

fn run_steps<T: TestClass>(
    instance: &mut T,
    test: &MethodEntry<T>,
    hooks: &Hooks<'_, T>,
    force_backtrace: bool,
) -> Result<(), Fault> {
    if let Some(before) = hooks.before_each {
        guarded(force_backtrace, || before.method.invoke(&mut *instance))
            .map_err(Fault::at(Phase::BeforeEach, before.name()))?;
    }

    guarded(force_backtrace, || test.method.invoke(&mut *instance))
        .map_err(Fault::at(Phase::Test, test.name()))?;

    if let Some(after) = hooks.after_each {
        guarded(force_backtrace, || after.method.invoke(&mut *instance))
            .map_err(Fault::at(Phase::AfterEach, after.name()))?;
    }
    Ok(())
}

/// Runs fixture code, folding a panic into the error channel.
fn guarded<R>(force_backtrace: bool, f: impl FnOnce() -> Result<R>) -> Result<R> {
    panic::catch(force_backtrace, f).unwrap_or_else(|report| Err(report.into()))
}

/// Assertion failures are recognized by type, also behind added context.
/// Everything else is an unexpected error reported with its full trace.
///
/// 断言失败按类型识别（即使被附加了上下文）。其他一切都是意外错误，报告完整跟踪信息。
fn classify(fault: Fault) -> TestOutcome {
    let Fault {
        phase,
        method,
        error,
    } = fault;
    if let Some(failure) = error.downcast_ref::<AssertionFailure>() {
        return TestOutcome::AssertionFailed {
            message: failure.message().to_string(),
        };
    }
    TestOutcome::Errored {
        phase,
        trace: format!("error in {phase} `{method}`: {error:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::assert_equals_i32;
    use crate::core::class::Methods;
    use crate::core::reflect::TagIndex;
    use crate::core::tags::TagKind;

    #[derive(Default)]
    struct Steps {
        log: Vec<&'static str>,
    }

    impl Steps {
        fn before(&mut self) -> Result<()> {
            self.log.push("before");
            Ok(())
        }

        fn after(&mut self) -> Result<()> {
            self.log.push("after");
            assert_equals_i32(2, self.log.len() as i32 - 1)?;
            Ok(())
        }

        fn passes(&mut self) -> Result<()> {
            self.log.push("test");
            Ok(())
        }

        fn fails(&mut self) -> Result<()> {
            assert_equals_i32(1, 2).context("while comparing")?;
            Ok(())
        }

        fn errors(&mut self) -> Result<()> {
            anyhow::bail!("disk on fire")
        }

        fn panics(&mut self) -> Result<()> {
            let zero = self.log.len() as i32 - 1;
            let _ = 10 / zero;
            Ok(())
        }
    }

    impl TestClass for Steps {
        fn class_name() -> &'static str {
            "Steps"
        }

        fn construct() -> Result<Self> {
            Ok(Self::default())
        }

        fn declared_methods() -> Methods<Self> {
            Methods::new()
                .before_each("before", Self::before)
                .after_each("after", Self::after)
                .test("passes", Self::passes)
                .test("fails", Self::fails)
                .test("errors", Self::errors)
                .test("panics", Self::panics)
        }
    }

    fn outcome_of(name: &str) -> TestOutcome {
        let index = TagIndex::<Steps>::reflect();
        let hooks = Hooks {
            before_each: index.hook(TagKind::BeforeEach),
            after_each: index.hook(TagKind::AfterEach),
        };
        let test = index
            .get(TagKind::Test)
            .iter()
            .find(|e| e.name() == name)
            .unwrap();
        run_test(test, &hooks, false)
    }

    #[test]
    fn test_pass_runs_all_steps() {
        assert_eq!(outcome_of("passes"), TestOutcome::Passed);
    }

    #[test]
    fn test_assertion_behind_context_is_recognized() {
        match outcome_of("fails") {
            TestOutcome::AssertionFailed { message } => {
                assert!(message.contains("are not equal!"))
            }
            other => panic!("Expected AssertionFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_error_is_unexpected() {
        match outcome_of("errors") {
            TestOutcome::Errored { phase, trace } => {
                assert_eq!(phase, Phase::Test);
                assert!(trace.contains("error in Test `errors`"));
                assert!(trace.contains("disk on fire"));
            }
            other => panic!("Expected Errored, got {other:?}"),
        }
    }

    #[test]
    fn test_panic_is_unexpected() {
        match outcome_of("panics") {
            TestOutcome::Errored { phase, trace } => {
                assert_eq!(phase, Phase::Test);
                assert!(trace.contains("attempt to divide by zero"));
            }
            other => panic!("Expected Errored, got {other:?}"),
        }
    }

    struct LoudDrop;

    impl Drop for LoudDrop {
        fn drop(&mut self) {
            panic!("fixture refused to close");
        }
    }

    impl TestClass for LoudDrop {
        fn class_name() -> &'static str {
            "LoudDrop"
        }

        fn construct() -> Result<Self> {
            Ok(LoudDrop)
        }

        fn declared_methods() -> Methods<Self> {
            Methods::new().test("first", |_| Ok(()))
        }
    }

    #[test]
    fn test_panicking_drop_is_contained() {
        let index = TagIndex::<LoudDrop>::reflect();
        let hooks = Hooks {
            before_each: None,
            after_each: None,
        };
        let test = &index.get(TagKind::Test)[0];
        match run_test(test, &hooks, false) {
            TestOutcome::Errored { phase, trace } => {
                assert_eq!(phase, Phase::Drop);
                assert!(trace.contains("error in destructor `drop`"));
                assert!(trace.contains("fixture refused to close"));
            }
            other => panic!("Expected Errored, got {other:?}"),
        }
    }
}
