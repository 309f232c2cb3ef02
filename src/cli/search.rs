//! `taskman search` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::TaskStore;

#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    query: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(store: &TaskStore, args: SearchArgs) -> Result<()> {
    let found = store.search(&args.query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(());
    }

    if found.is_empty() {
        if store.is_empty() {
            println!("No tasks found.");
        } else {
            println!("No tasks matching \"{}\".", args.query);
        }
        return Ok(());
    }

    super::print_tasks(&found);
    Ok(())
}
