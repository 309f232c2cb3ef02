//! `taskman edit` command implementation

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::task::{TaskStore, TaskUpdate};

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    id: u32,

    /// New name
    name: Option<String>,

    /// New description
    description: Option<String>,

    /// New category
    category: Option<String>,

    /// New deadline
    deadline: Option<String>,

    /// New priority
    priority: Option<String>,

    /// Mark the task complete
    #[arg(long, conflicts_with = "undone")]
    done: bool,

    /// Mark the task incomplete
    #[arg(long)]
    undone: bool,
}

impl EditArgs {
    fn status(&self) -> Option<bool> {
        match (self.done, self.undone) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    fn into_update(self) -> TaskUpdate {
        let status = self.status();
        TaskUpdate {
            name: self.name,
            description: self.description,
            category: self.category,
            deadline: self.deadline,
            priority: self.priority,
            status,
        }
    }
}

pub fn run(store: &mut TaskStore, args: EditArgs) -> Result<()> {
    let id = args.id;
    if store.get(id).is_none() {
        bail!("Task not found: {}", id);
    }

    let update = args.into_update();
    if update.is_empty() {
        bail!(
            "Nothing to change for task {}: give at least one new value, --done or --undone",
            id
        );
    }

    let task = store
        .edit(id, update)
        .with_context(|| format!("Task {} was updated but could not be saved", id))?
        .with_context(|| format!("Task not found: {}", id))?;

    println!("Task {} updated.\n", id);
    println!("{}", task);
    Ok(())
}
