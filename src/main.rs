mod cli;

use std::path::PathBuf;
use std::process;

use clap::Parser;

use cli::{Cli, Commands, CommonArgs};
use olfato::{complexity, dups, quality, refactor};

fn target(common: &CommonArgs) -> PathBuf {
    common.path.clone().unwrap_or_else(|| PathBuf::from("."))
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Quality {
            common,
            min_severity,
            max_smells,
            max_complexity,
            top,
        } => quality::run(
            &target(&common),
            common.json,
            &common.filters,
            common.config.as_deref(),
            &min_severity,
            max_smells,
            max_complexity,
            top,
        ),
        Commands::Complexity {
            common,
            max_complexity,
            top,
            per_function,
            sort_by,
        } => complexity::run(
            &target(&common),
            common.json,
            &common.filters,
            common.config.as_deref(),
            max_complexity,
            top,
            per_function,
            &sort_by,
        ),
        Commands::Dups {
            common,
            min_lines,
            report,
            show_all,
        } => dups::run(
            &target(&common),
            common.json,
            &common.filters,
            min_lines,
            report,
            show_all,
        ),
        Commands::Refactor { common, top } => refactor::run(
            &target(&common),
            common.json,
            &common.filters,
            common.config.as_deref(),
            top,
        ),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
