//! taskman library - task records, their JSON file store and the CLI commands

pub mod cli;
pub mod config;
pub mod task;
