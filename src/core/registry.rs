//! # Class Registry Module / 类注册表模块
//!
//! Looks test classes up by name, the way a host program names the class it
//! wants to test. Classes are registered by type and stored type-erased.
//!
//! 按名称查找测试类，就像宿主程序指定要测试的类一样。类按类型注册并以类型擦除方式存储。

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

use crate::core::class::TestClass;
use crate::core::config::RunnerConfig;
use crate::core::models::RunSummary;
use crate::core::runner::Runner;
use crate::infra::t;

/// A runner whose test class type has been erased.
/// 测试类类型已被擦除的运行器。
pub trait DynRunner {
    fn class_name(&self) -> &'static str;
    /// Planned test names, in execution order.
    fn plan(&self) -> Vec<&'static str>;
    fn run(&self, sink: &mut dyn Write) -> Result<RunSummary>;
}

impl<T: TestClass> DynRunner for Runner<T> {
    fn class_name(&self) -> &'static str {
        T::class_name()
    }

    fn plan(&self) -> Vec<&'static str> {
        Runner::plan(self).names()
    }

    fn run(&self, sink: &mut dyn Write) -> Result<RunSummary> {
        Runner::run(self, sink)
    }
}

type Factory = fn(RunnerConfig) -> Result<Box<dyn DynRunner>>;

fn factory<T: TestClass>(config: RunnerConfig) -> Result<Box<dyn DynRunner>> {
    Ok(Box::new(Runner::<T>::with_config(config)?))
}

/// Name → test class lookup.
#[derive(Default)]
pub struct Registry {
    classes: BTreeMap<&'static str, Factory>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its class name. Re-registering a name replaces it.
    pub fn register<T: TestClass>(mut self) -> Self {
        self.classes.insert(T::class_name(), factory::<T>);
        self
    }

    /// Registered class names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.classes.keys().copied().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Builds the runner for `name`. Structural errors surface here.
    ///
    /// 为 `name` 构建运行器。结构错误在此处暴露。
    pub fn runner(&self, name: &str, config: RunnerConfig) -> Result<Box<dyn DynRunner>> {
        let Some(factory) = self.classes.get(name) else {
            anyhow::bail!(t!("class_not_found", locale = &config.locale(), name = name));
        };
        factory(config)
    }
}
