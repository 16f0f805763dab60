// src/cli/commands/run.rs

use anyhow::Result;
use colored::*;
use std::{fs, path::Path};

use crate::{
    cli::GlobalOptions,
    core::config::{DEFAULT_CONFIG_FILE, RunnerConfig},
    demo,
    infra::t,
};

/// Runs each named class in turn, on standard output.
/// A rejected or unknown class is reported and counts as a failure; the
/// remaining classes still run.
///
/// 依次在标准输出上运行每个指定的类。被拒绝或未知的类会被报告并计为失败；其余类仍会运行。
pub fn execute(classes: &[String], options: &GlobalOptions) -> Result<bool> {
    let config = resolve_config(options)?;
    let locale = config.locale();
    let registry = demo::registry();

    let mut all_passed = true;
    for (i, name) in classes.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let runner = match registry.runner(name, config.clone()) {
            Ok(runner) => runner,
            Err(e) => {
                eprintln!(
                    "{} {}: {}",
                    "Error:".red().bold(),
                    t!("class_rejected", locale = &locale, name = name),
                    e
                );
                all_passed = false;
                continue;
            }
        };
        let summary = runner.run(&mut std::io::stdout().lock())?;
        tracing::info!(
            class = summary.class_name,
            passed = summary.passed(),
            failed = summary.failed(),
            errored = summary.errored(),
            "class finished"
        );
        all_passed &= summary.is_success();
    }

    if config.summary {
        let banner = if all_passed {
            t!("all_classes_passed", locale = &locale).green().bold()
        } else {
            t!("some_classes_failed", locale = &locale).red().bold()
        };
        println!("\n{banner}");
    }
    Ok(all_passed)
}

/// Explicit `--config` must exist; otherwise `FixtureRunner.toml` in the
/// working directory is used when present. Command-line flags win over the file.
pub fn resolve_config(options: &GlobalOptions) -> Result<RunnerConfig> {
    let mut config = match &options.config {
        Some(path) => load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load(Path::new(DEFAULT_CONFIG_FILE))?,
        None => RunnerConfig::default(),
    };

    if let Some(color) = options.color {
        config.color = color;
    }
    if let Some(language) = &options.language {
        config.language = Some(language.clone());
    }
    config.summary |= options.summary;

    config.color.apply();
    Ok(config)
}

fn load(path: &Path) -> Result<RunnerConfig> {
    let config = RunnerConfig::load(path)?;
    let shown = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    tracing::debug!("{}", t!("config_loaded", path = shown.display()));
    Ok(config)
}
