// Shared test helpers for integration tests
#![allow(dead_code)]

use anyhow::Result;
use fixture_runner::{ColorMode, RunSummary, Runner, RunnerConfig, TestClass};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A configuration that produces plain, deterministic English output.
pub fn plain_config() -> RunnerConfig {
    RunnerConfig {
        color: ColorMode::Never,
        language: Some("en".to_string()),
        ..RunnerConfig::default()
    }
}

/// Runs `T` with [`plain_config`] and returns the summary and everything written to the sink.
pub fn run_captured<T: TestClass>() -> (RunSummary, String) {
    let runner = Runner::<T>::with_config(plain_config()).expect("class should be valid");
    run_runner(&runner)
}

pub fn run_runner<T: TestClass>(runner: &Runner<T>) -> (RunSummary, String) {
    let mut sink = Vec::new();
    let summary = runner.run(&mut sink).expect("writing to a Vec cannot fail");
    (summary, String::from_utf8(sink).expect("report is UTF-8"))
}

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    /// `(instance id, step)` pairs recorded by [`Recorder`] methods on this thread.
    pub static EVENTS: RefCell<Vec<(usize, &'static str)>> = const { RefCell::new(Vec::new()) };
}

pub fn take_events() -> Vec<(usize, &'static str)> {
    EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

/// A fixture that records which instance every step ran on.
pub struct Recorder {
    pub id: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            id: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn record(&self, step: &'static str) {
        EVENTS.with(|events| events.borrow_mut().push((self.id, step)));
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn record_before(r: &mut Recorder) -> Result<()> {
    r.record("before");
    Ok(())
}

pub fn record_test(r: &mut Recorder) -> Result<()> {
    r.record("test");
    Ok(())
}

pub fn record_after(r: &mut Recorder) -> Result<()> {
    r.record("after");
    Ok(())
}
