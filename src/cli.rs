// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::config::ColorMode;
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    let pos = args.iter().position(|arg| arg == "--lang")?;
    args.get(pos + 1).cloned()
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("fixture-runner")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("color")
                .long("color")
                .help(t!("arg_color", locale = locale).to_string())
                .value_name("WHEN")
                .value_parser(["auto", "always", "never"])
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help(t!("arg_summary", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("classes")
                        .help(t!("arg_classes", locale = locale).to_string())
                        .value_name("CLASS")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(Command::new("list").about(t!("cmd_list_about", locale = locale).to_string()))
}

/// Options shared by every subcommand.
/// 所有子命令共享的选项。
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub color: Option<ColorMode>,
    pub language: Option<String>,
    pub summary: bool,
}

impl GlobalOptions {
    fn from_matches(matches: &ArgMatches) -> Self {
        let color = matches
            .get_one::<String>("color")
            .map(|when| match when.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            });
        Self {
            config: matches.get_one::<PathBuf>("config").cloned(),
            color,
            language: matches.get_one::<String>("lang").cloned(),
            summary: matches.get_flag("summary"),
        }
    }
}

/// Parses the command line and dispatches. Returns `true` when every class ran clean.
pub fn run() -> Result<bool> {
    // Pre-parse language and initialize i18n first.
    match pre_parse_language() {
        Some(language) => rust_i18n::set_locale(&language),
        None => crate::init(),
    }
    let language = (*rust_i18n::locale()).to_string();

    let matches = build_cli(&language).get_matches();
    let options = GlobalOptions::from_matches(&matches);

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let classes: Vec<String> = run_matches
                .get_many::<String>("classes")
                .map(|values| values.cloned().collect())
                .unwrap_or_default();
            commands::run::execute(&classes, &options)
        }
        Some(("list", _)) => {
            commands::list::execute(&options)?;
            Ok(true)
        }
        _ => {
            // `subcommand_required` makes clap print help before we get here.
            Ok(true)
        }
    }
}
