//! CLI command implementations

pub mod add;
pub mod definition;
pub mod delete;
pub mod edit;
pub mod search;
pub mod view;

pub use definition::{Cli, Commands};

use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::task::{Task, TaskStore};

/// Open the tasks file named by `file`, the config, or the default.
///
/// Config and load problems are reported on stderr and never abort the command.
pub fn open_store(file: Option<PathBuf>) -> TaskStore {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring config: {:#}", e);
        eprintln!("Warning: could not read config ({:#}), using defaults.", e);
        Config::default()
    });

    let store = TaskStore::open(config.resolve_tasks_file(file)).with_backup(config.backup);
    if let Some(e) = store.load_warning() {
        eprintln!("Warning: {}. Continuing with no tasks.", e);
        if let Some(copy) = store.pending_corrupt_copy() {
            eprintln!(
                "The current file will be kept as {} before it is overwritten.",
                copy.display()
            );
        }
    }
    store
}

pub fn print_tasks(tasks: &[&Task]) {
    for (i, task) in tasks.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", task);
    }
    println!("\nTotal: {} {}", tasks.len(), plural(tasks.len()));
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}
