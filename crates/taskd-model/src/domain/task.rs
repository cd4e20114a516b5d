use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::TaskId;

/// A single task record as stored and as returned over the wire.
///
/// Timestamps serialize as RFC 3339 strings. `created_at` is set once at
/// creation; `last_updated_at` starts equal to it and is refreshed on every
/// successful update, so `last_updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned unique identifier.
    pub id: TaskId,
    /// Human-readable title, 1–200 characters.
    pub title: String,
    /// Completion flag, `false` for freshly created tasks.
    pub is_done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated_at: OffsetDateTime,
}
