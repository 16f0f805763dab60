//! # Demo Module / 示例模块
//!
//! Sample test classes bundled with the binary. They exercise every part of
//! the runner and double as fixtures for the integration tests.
//!
//! 随二进制程序附带的示例测试类。它们覆盖运行器的各个部分，同时也作为集成测试的夹具。

pub mod calculator;

use crate::core::registry::Registry;

/// Registry holding every bundled demo class.
pub fn registry() -> Registry {
    Registry::new()
        .register::<calculator::CalculatorTests>()
        .register::<calculator::DivisionByZeroTests>()
}
