//! `taskman delete` command implementation

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::task::TaskStore;

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ID
    id: u32,
}

pub fn run(store: &mut TaskStore, args: DeleteArgs) -> Result<()> {
    let removed = store
        .delete(args.id)
        .with_context(|| format!("Task {} was removed but the change could not be saved", args.id))?;

    match removed {
        Some(task) => {
            println!("Deleted: {}", task.summary_line());
            Ok(())
        }
        None => bail!("Task not found: {}", args.id),
    }
}
