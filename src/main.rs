//! taskman - personal task tracker

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskman::cli::{self, Cli, Commands};

/// Exit status when no command is given, matching clap's usage errors.
const USAGE_EXIT_CODE: u8 = 2;

fn main() -> ExitCode {
    if std::env::var("TASKMAN_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskman=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    let Some(command) = cli.command else {
        eprintln!("No command given. Use --help to see the available commands.");
        return ExitCode::from(USAGE_EXIT_CODE);
    };

    // Completions never touch the tasks file.
    if let Commands::Completion { shell } = command {
        generate(shell, &mut Cli::command(), "taskman", &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let mut store = cli::open_store(cli.file);

    let result = match command {
        Commands::Add(args) => cli::add::run(&mut store, args),
        Commands::View(args) => cli::view::run(&store, args),
        Commands::Delete(args) => cli::delete::run(&mut store, args),
        Commands::Edit(args) => cli::edit::run(&mut store, args),
        Commands::Search(args) => cli::search::run(&store, args),
        Commands::Completion { .. } => unreachable!(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
