//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One tracked task as stored in the tasks file.
///
/// Field contents are never validated: deadline and priority are free-form
/// labels and any text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub deadline: String,
    pub priority: String,
    /// `true` once the task is complete
    #[serde(default)]
    pub status: bool,
}

impl Task {
    pub fn new(id: u32, fields: NewTask) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            category: fields.category,
            deadline: fields.deadline,
            priority: fields.priority,
            status: false,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.status {
            "done"
        } else {
            "not done"
        }
    }

    /// Case-insensitive substring match against name, description and category.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.description, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }

    /// Single-line rendering used in confirmations.
    pub fn summary_line(&self) -> String {
        let check = if self.status { "x" } else { " " };
        format!(
            "[{}] #{} {} ({}, {}, due {})",
            check, self.id, self.name, self.category, self.priority, self.deadline
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Task #{}: {}", self.id, self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Category: {}", self.category)?;
        writeln!(f, "Deadline: {}", self.deadline)?;
        writeln!(f, "Priority: {}", self.priority)?;
        write!(f, "Status: {}", self.status_label())
    }
}

/// Fields supplied when creating a task. The id and status are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub category: String,
    pub deadline: String,
    pub priority: String,
}

impl NewTask {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        deadline: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category: category.into(),
            deadline: deadline.into(),
            priority: priority.into(),
        }
    }
}

/// Partial update for an existing task. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub status: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.deadline.is_none()
            && self.priority.is_none()
            && self.status.is_none()
    }

    pub fn apply(self, task: &mut Task) {
        if let Some(name) = self.name {
            task.name = name;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        Task::new(
            7,
            NewTask::new(
                "Test Task",
                "This is a test task",
                "Test",
                "2024-12-31",
                "High",
            ),
        )
    }

    #[test]
    fn test_new_task_starts_incomplete() {
        let task = sample();
        assert_eq!(task.id, 7);
        assert!(!task.status);
        assert_eq!(task.status_label(), "not done");
    }

    #[test]
    fn test_display_has_one_labelled_line_per_field() {
        let rendered = sample().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Task #7: Test Task",
                "Description: This is a test task",
                "Category: Test",
                "Deadline: 2024-12-31",
                "Priority: High",
                "Status: not done",
            ]
        );
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let task = sample();
        assert!(task.matches("test"));
        assert!(task.matches("TEST TASK"));
        assert!(task.matches("a test"));
    }

    #[test]
    fn test_matches_checks_category_but_not_priority() {
        let mut task = sample();
        task.category = "Groceries".to_string();
        assert!(task.matches("grocer"));
        assert!(!task.matches("high"));
        assert!(!task.matches("2024"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(sample().matches(""));
    }

    #[test]
    fn test_matches_non_ascii_text() {
        let mut task = sample();
        task.name = "Купить молоко".to_string();
        assert!(task.matches("купить"));
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut task = sample();
        let before = task.clone();

        TaskUpdate {
            name: Some("Renamed".to_string()),
            priority: Some("Low".to_string()),
            ..Default::default()
        }
        .apply(&mut task);

        assert_eq!(task.name, "Renamed");
        assert_eq!(task.priority, "Low");
        assert_eq!(task.description, before.description);
        assert_eq!(task.category, before.category);
        assert_eq!(task.deadline, before.deadline);
        assert_eq!(task.status, before.status);
        assert_eq!(task.id, before.id);
    }

    #[test]
    fn test_update_can_reopen_completed_task() {
        let mut task = sample();
        task.status = true;

        TaskUpdate {
            status: Some(false),
            ..Default::default()
        }
        .apply(&mut task);

        assert!(!task.status);
    }

    #[test]
    fn test_update_is_empty() {
        assert!(TaskUpdate::default().is_empty());
        let update = TaskUpdate {
            status: Some(true),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_summary_line() {
        let mut task = sample();
        assert_eq!(
            task.summary_line(),
            "[ ] #7 Test Task (Test, High, due 2024-12-31)"
        );
        task.status = true;
        assert!(task.summary_line().starts_with("[x]"));
    }

    #[test]
    fn test_missing_status_deserializes_as_incomplete() {
        let json = r#"{"id":3,"name":"a","description":"b","category":"c","deadline":"d","priority":"e"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 3);
        assert!(!task.status);
    }
}
