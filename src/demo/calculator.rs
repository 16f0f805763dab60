//! A checked integer calculator and the test classes that exercise it.

use anyhow::{Context, Result};
use std::fmt;

use crate::assertions::{assert_equals, assert_equals_i32, assert_null, assert_true};
use crate::core::class::{Methods, TestClass};

/// Arithmetic faults of [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArithmeticError {
    Overflow,
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::Overflow => f.write_str("integer overflow"),
            ArithmeticError::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    pub fn sum(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        a.checked_add(b).ok_or(ArithmeticError::Overflow)
    }

    pub fn diff(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        a.checked_sub(b).ok_or(ArithmeticError::Overflow)
    }

    pub fn mult(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        a.checked_mul(b).ok_or(ArithmeticError::Overflow)
    }

    pub fn div(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        a.checked_div(b).ok_or(ArithmeticError::Overflow)
    }
}

/// Four calculator tests. `test_mult` expects a wrong value on purpose to
/// show an assertion failure; `test_diff` is unprioritized and runs last.
#[derive(Debug, Default)]
pub struct CalculatorTests {
    calculator: Option<Calculator>,
}

impl CalculatorTests {
    fn init(&mut self) -> Result<()> {
        self.calculator = Some(Calculator);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.calculator = None;
        Ok(())
    }

    fn calculator(&self) -> Result<&Calculator> {
        self.calculator.as_ref().context("calculator not initialized")
    }

    fn test_sum(&mut self) -> Result<()> {
        let (v1, v2) = (3, 7);
        let got = self.calculator()?.sum(v1, v2)?;
        assert_equals_i32(v1 + v2, got)?;
        Ok(())
    }

    fn test_diff(&mut self) -> Result<()> {
        let (v1, v2) = (3, 7);
        let got = self.calculator()?.diff(v1, v2)?;
        assert_equals_i32(v1 - v2, got)?;
        Ok(())
    }

    fn test_mult(&mut self) -> Result<()> {
        let (v1, v2) = (3, 7);
        let expected = v1 * v2 + 10000;
        let got = self.calculator()?.mult(v1, v2)?;
        assert_equals_i32(expected, got)?;
        Ok(())
    }

    fn test_div(&mut self) -> Result<()> {
        let (v1, v2) = (30, 5);
        let got = self.calculator()?.div(v1, v2)?;
        assert_equals_i32(v1 / v2, got)?;
        Ok(())
    }
}

impl TestClass for CalculatorTests {
    fn class_name() -> &'static str {
        "CalculatorTests"
    }

    fn construct() -> Result<Self> {
        Ok(Self::default())
    }

    fn declared_methods() -> Methods<Self> {
        Methods::new()
            .before_each("init", Self::init)
            .test_with_priority("test_sum", 1, Self::test_sum)
            .test("test_diff", Self::test_diff)
            .test_with_priority("test_mult", 2, Self::test_mult)
            .test_with_priority("test_div", 3, Self::test_div)
            .after_each("close", Self::close)
    }
}

/// Division by zero, caught and uncaught, plus overflow and nullity checks.
/// No hooks: each test builds what it needs.
#[derive(Debug, Default)]
pub struct DivisionByZeroTests {
    calculator: Calculator,
}

impl DivisionByZeroTests {
    fn test_caught(&mut self) -> Result<()> {
        let err = match self.calculator.div(10, 0) {
            Ok(value) => anyhow::bail!("expected division by zero, got {value}"),
            Err(err) => err,
        };
        assert_equals(ArithmeticError::DivisionByZero, err)?;
        Ok(())
    }

    fn test_uncaught(&mut self) -> Result<()> {
        let got = self.calculator.div(10, 0)?;
        assert_equals_i32(0, got)?;
        Ok(())
    }

    fn test_overflow(&mut self) -> Result<()> {
        assert_true(self.calculator.sum(i32::MAX, 1).is_err())?;
        assert_null(self.calculator.div(i32::MIN, -1).ok())?;
        Ok(())
    }

    fn test_native_division(&mut self) -> Result<()> {
        let zero = self.calculator.diff(5, 5)?;
        assert_equals_i32(0, 10 / zero)?;
        Ok(())
    }
}

impl TestClass for DivisionByZeroTests {
    fn class_name() -> &'static str {
        "DivisionByZeroTests"
    }

    fn construct() -> Result<Self> {
        Ok(Self::default())
    }

    fn declared_methods() -> Methods<Self> {
        Methods::new()
            .test_with_priority("test_caught", 1, Self::test_caught)
            .test_with_priority("test_uncaught", 2, Self::test_uncaught)
            .test_with_priority("test_overflow", 3, Self::test_overflow)
            .test("test_native_division", Self::test_native_division)
    }
}
