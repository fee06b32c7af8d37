//! Column entity: an ordered lane of task references.

use super::{BoardDomainError, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display title of a column, non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnTitle(String);

impl ColumnTitle {
    /// Creates a validated, trimmed column title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] when the value is
    /// blank.
    pub fn new(value: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyColumnTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColumnTitle {
    type Error = BoardDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnTitle> for String {
    fn from(value: ColumnTitle) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered lane on the board.
///
/// `task_ids` defines both membership and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    id: ColumnId,
    title: ColumnTitle,
    #[serde(default)]
    task_ids: Vec<TaskId>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn new(id: ColumnId, title: ColumnTitle) -> Self {
        Self {
            id,
            title,
            task_ids: Vec::new(),
        }
    }

    /// Sets the initial task order, used when seeding or restoring a board.
    #[must_use]
    pub fn with_task_ids(mut self, task_ids: impl IntoIterator<Item = TaskId>) -> Self {
        self.task_ids = task_ids.into_iter().collect();
        self
    }

    /// Returns the column identifier.
    #[must_use]
    pub const fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the display title.
    #[must_use]
    pub const fn title(&self) -> &ColumnTitle {
        &self.title
    }

    /// Returns the task identifiers in display order.
    #[must_use]
    pub fn task_ids(&self) -> &[TaskId] {
        &self.task_ids
    }

    /// Returns the number of task references in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }

    /// Returns `true` when the column lists `task_id`.
    #[must_use]
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.task_ids.contains(task_id)
    }

    /// Returns the display index of `task_id` in this column.
    #[must_use]
    pub fn position(&self, task_id: &TaskId) -> Option<usize> {
        self.task_ids.iter().position(|id| id == task_id)
    }

    /// Removes every occurrence of `task_id`, returning whether any was
    /// found.
    pub(super) fn remove(&mut self, task_id: &TaskId) -> bool {
        let before = self.task_ids.len();
        self.task_ids.retain(|id| id != task_id);
        self.task_ids.len() != before
    }

    /// Inserts `task_id` at `index`, or appends when `index` is `None` or
    /// past the end.
    pub(super) fn insert(&mut self, index: Option<usize>, task_id: TaskId) {
        let len = self.task_ids.len();
        let at = index.map_or(len, |requested| requested.min(len));
        self.task_ids.insert(at, task_id);
    }
}
