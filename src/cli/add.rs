//! `taskman add` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::{NewTask, StoreError, TaskStore};

#[derive(Args)]
pub struct AddArgs {
    /// Task name
    name: String,

    /// What the task is about
    description: String,

    /// Category label used for grouping
    category: String,

    /// Deadline, any date format
    deadline: String,

    /// Priority label (e.g. High, Medium, Low)
    priority: String,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        NewTask::new(
            args.name,
            args.description,
            args.category,
            args.deadline,
            args.priority,
        )
    }
}

pub fn run(store: &mut TaskStore, args: AddArgs) -> Result<()> {
    let name = args.name.clone();
    let task = match store.add(args.into()) {
        Ok(task) => task,
        Err(e @ StoreError::IdsExhausted) => {
            return Err(anyhow::Error::new(e).context(format!("Task \"{}\" was not added", name)))
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("Task \"{}\" was added but could not be saved", name)))
        }
    };

    println!("Task \"{}\" added (id {}).", task.name, task.id);
    Ok(())
}
