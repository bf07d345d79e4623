//! Category domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An expense category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name (e.g. "Meals", "Travel").
    pub name: String,
    /// Optional free-text description.
    pub description: String,
    /// Whether the category is available for new submissions.
    pub active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
