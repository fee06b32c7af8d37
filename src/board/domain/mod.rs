//! Domain model for the task board.
//!
//! The board domain holds the ordered columns, the task map and the pure
//! state transitions that keep the two consistent. It has no knowledge of
//! clocks beyond the [`mockable::Clock`] passed in at task creation, and no
//! knowledge of how the presentation layer renders or persists boards.

mod board;
mod column;
mod error;
mod ids;
mod priority;
mod task;

pub use board::{Board, BoardSnapshot, DragTarget};
pub use column::{Column, ColumnTitle};
pub use error::{BoardDomainError, BoardOperationError, InvariantViolation, ParsePriorityError};
pub use ids::{ColumnId, TaskId};
pub use priority::Priority;
pub use task::{PersistedTaskData, Tag, Task, TaskDetails, TaskEdit, TaskTitle};
