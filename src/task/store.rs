//! Task storage - JSON file persistence
//!
//! The whole task list is rewritten on every mutation. Writes go to a temporary
//! file next to the target and are renamed over it, so a crash mid-write leaves
//! either the old or the new list on disk. Nothing guards against two processes
//! writing the same file: the last writer wins.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::{Result, StoreError};
use super::model::{NewTask, Task, TaskUpdate};

/// Outcome of listing tasks, keeping "nothing stored" apart from "nothing in this category".
#[derive(Debug, PartialEq, Eq)]
pub enum View<'a> {
    Empty,
    NoneInCategory(String),
    Tasks(Vec<&'a Task>),
}

pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    /// `None` once every id up to `u32::MAX` has been handed out
    next_id: Option<u32>,
    backup: bool,
    load_warning: Option<StoreError>,
    /// Where an unparsable file is copied before the first save replaces it
    corrupt_copy: Option<PathBuf>,
}

impl TaskStore {
    /// Open the store backed by `path`.
    ///
    /// Never fails: an unreadable or malformed file yields an empty store and
    /// the error is kept in [`TaskStore::load_warning`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tasks, load_warning) = match Self::load_tasks(&path) {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                warn!("Starting with no tasks: {}", e);
                (Vec::new(), Some(e))
            }
        };

        let corrupt_copy = match load_warning {
            Some(StoreError::Parse { .. }) => Some(corrupt_copy_path(&path)),
            _ => None,
        };

        let next_id = next_id_after(&tasks);
        debug!(
            path = %path.display(),
            count = tasks.len(),
            next_id = ?next_id,
            "Loaded tasks"
        );

        Self {
            path,
            tasks,
            next_id,
            backup: true,
            load_warning,
            corrupt_copy,
        }
    }

    /// Copy the previous file to `<file>.bak` before each save (on by default).
    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    /// Strict loader: a missing or blank file is an empty list, anything else must parse.
    pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn next_id(&self) -> Option<u32> {
        self.next_id
    }

    pub fn load_warning(&self) -> Option<&StoreError> {
        self.load_warning.as_ref()
    }

    /// Path the unparsable file will be copied to before it is first overwritten.
    pub fn pending_corrupt_copy(&self) -> Option<&Path> {
        self.corrupt_copy.as_deref()
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new incomplete task and persist.
    ///
    /// On a save error the task stays in memory and its id stays consumed.
    /// Fails without touching anything once the id range is used up.
    pub fn add(&mut self, fields: NewTask) -> Result<&Task> {
        let id = self.next_id.ok_or(StoreError::IdsExhausted)?;
        let task = Task::new(id, fields);
        self.next_id = id.checked_add(1);
        debug!(id = task.id, name = %task.name, "Adding task");

        let index = self.tasks.len();
        self.tasks.push(task);
        self.save()?;
        Ok(&self.tasks[index])
    }

    /// All tasks, or those whose category equals `category` exactly, in insertion order.
    pub fn view(&self, category: Option<&str>) -> View<'_> {
        if self.tasks.is_empty() {
            return View::Empty;
        }

        match category {
            None => View::Tasks(self.tasks.iter().collect()),
            Some(category) => {
                let tasks: Vec<&Task> = self
                    .tasks
                    .iter()
                    .filter(|t| t.category == category)
                    .collect();
                if tasks.is_empty() {
                    View::NoneInCategory(category.to_string())
                } else {
                    View::Tasks(tasks)
                }
            }
        }
    }

    pub fn search(&self, query: &str) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.matches(query)).collect()
    }

    /// Remove the task with `id`. Returns `None` without saving when no task matches.
    pub fn delete(&mut self, id: u32) -> Result<Option<Task>> {
        let Some(index) = self.position(id) else {
            debug!(id, "Delete: no such task");
            return Ok(None);
        };

        let removed = self.tasks.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Apply `update` to the task with `id`. Returns `None` without saving when no task matches.
    pub fn edit(&mut self, id: u32, update: TaskUpdate) -> Result<Option<&Task>> {
        let Some(index) = self.position(id) else {
            debug!(id, "Edit: no such task");
            return Ok(None);
        };

        update.apply(&mut self.tasks[index]);
        self.save()?;
        Ok(Some(&self.tasks[index]))
    }

    /// Write the full task list, replacing the file atomically.
    ///
    /// The new file keeps the permissions of the one it replaces. A file that
    /// failed to parse at open is first copied to its own `.corrupt` path.
    pub fn save(&mut self) -> Result<()> {
        let content = encode(&self.tasks)?;

        let persist_err = |source: std::io::Error| StoreError::Persist {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(persist_err)?;

        if let Some(corrupt) = &self.corrupt_copy {
            if self.path.exists() {
                fs::copy(&self.path, corrupt).map_err(|source| StoreError::Preserve {
                    path: corrupt.clone(),
                    source,
                })?;
                warn!("Kept unreadable tasks file as {}", corrupt.display());
            }
        }

        if self.backup && self.path.exists() {
            let backup_path = backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let mut tmp = NamedTempFile::new_in(dir).map_err(persist_err)?;
        tmp.write_all(&content).map_err(persist_err)?;
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(persist_err)?;
        }
        tmp.as_file().sync_all().map_err(persist_err)?;
        tmp.persist(&self.path).map_err(|e| persist_err(e.error))?;
        self.corrupt_copy = None;

        debug!(
            path = %self.path.display(),
            count = self.tasks.len(),
            "Saved tasks"
        );
        Ok(())
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }
}

/// Four-space indented JSON, non-ASCII text kept as-is.
fn encode(tasks: &[Task]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tasks.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

fn next_id_after(tasks: &[Task]) -> Option<u32> {
    match tasks.iter().map(|t| t.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

pub fn backup_path(path: &Path) -> PathBuf {
    with_suffix(path, ".bak")
}

/// `<file>.corrupt`, or `<file>.corrupt.N` when earlier copies already exist.
pub fn corrupt_copy_path(path: &Path) -> PathBuf {
    let first = with_suffix(path, ".corrupt");
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| with_suffix(path, &format!(".corrupt.{}", n)))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
