// src/cli/commands/list.rs

use anyhow::Result;
use colored::*;

use crate::{cli::GlobalOptions, cli::commands::run::resolve_config, demo, infra::t};

/// Prints every registered class with its planned tests, in execution order.
/// Classes that fail validation are listed with the structural error.
///
/// 打印每个已注册的类及其按执行顺序排列的计划测试。未通过校验的类会与其结构错误一起列出。
pub fn execute(options: &GlobalOptions) -> Result<()> {
    let config = resolve_config(options)?;
    let registry = demo::registry();

    if registry.names().is_empty() {
        println!("{}", t!("no_classes_registered", locale = &config.locale()).yellow());
        return Ok(());
    }

    for name in registry.names() {
        match registry.runner(name, config.clone()) {
            Ok(runner) => {
                println!("{}:", runner.class_name().bold());
                for test in runner.plan() {
                    println!("  - {test}");
                }
            }
            Err(e) => println!("{}: {}", name.bold(), e.to_string().red()),
        }
    }
    Ok(())
}
