//! `taskman view` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{TaskStore, View};

#[derive(Args)]
pub struct ViewArgs {
    /// Only show tasks in this category (exact match)
    #[arg(short, long)]
    category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(store: &TaskStore, args: ViewArgs) -> Result<()> {
    let view = store.view(args.category.as_deref());

    if args.json {
        let tasks = match view {
            View::Tasks(tasks) => tasks,
            View::Empty | View::NoneInCategory(_) => Vec::new(),
        };
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    match view {
        View::Empty => println!("No tasks found."),
        View::NoneInCategory(category) => println!("No tasks in category \"{}\".", category),
        View::Tasks(tasks) => super::print_tasks(&tasks),
    }

    Ok(())
}
