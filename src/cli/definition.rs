//! Top-level clap definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::add::AddArgs;
use super::delete::DeleteArgs;
use super::edit::EditArgs;
use super::search::SearchArgs;
use super::view::ViewArgs;

#[derive(Parser)]
#[command(name = "taskman")]
#[command(about = "Track personal tasks in a local JSON file")]
#[command(version)]
pub struct Cli {
    /// Tasks file (defaults to the configured file, then ./tasks.json)
    #[arg(short, long, global = true, env = "TASKMAN_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Show all tasks, or the tasks in one category
    View(ViewArgs),

    /// Delete a task by ID
    Delete(DeleteArgs),

    /// Change fields of a task; values are taken by position
    Edit(EditArgs),

    /// Find tasks whose name, description or category contains a word
    Search(SearchArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
