//! Engine configuration.

use serde::{Deserialize, Serialize};

/// When the engine refreshes a task's `updated_at` timestamp.
///
/// Edits always refresh it; this policy covers moves and reorders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// Moves and reorders leave `updated_at` at its previous value.
    #[default]
    CreationOnly,
    /// Moves and reorders stamp `updated_at` with the current time.
    TouchOnChange,
}

/// Configuration for a [`BoardEngine`](super::BoardEngine).
///
/// Hosts can load this from JSON; missing fields take their defaults.
///
/// # Examples
///
/// ```
/// use kanban_engine::board::services::{EngineConfig, TimestampPolicy};
///
/// let config: EngineConfig =
///     serde_json::from_str(r#"{"timestamp_policy": "touch_on_change"}"#)
///         .expect("valid configuration");
/// assert_eq!(config.timestamp_policy, TimestampPolicy::TouchOnChange);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Timestamp refresh policy for moves and reorders.
    pub timestamp_policy: TimestampPolicy,
    /// Whether to check every board invariant after each applied command.
    pub verify_invariants: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timestamp_policy: TimestampPolicy::CreationOnly,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl EngineConfig {
    /// Stamps timestamps at creation only and skips invariant checks.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            timestamp_policy: TimestampPolicy::CreationOnly,
            verify_invariants: false,
        }
    }

    /// Refreshes timestamps on every move and checks invariants after
    /// every command.
    #[must_use]
    pub const fn audited() -> Self {
        Self {
            timestamp_policy: TimestampPolicy::TouchOnChange,
            verify_invariants: true,
        }
    }
}
