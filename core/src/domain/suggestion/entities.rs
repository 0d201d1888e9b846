use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

/// A cached meal name. `suggestion` is unique across the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MealSuggestion {
    pub id: Uuid,
    pub suggestion: String,
    pub created_at: DateTime<Utc>,
}

impl MealSuggestion {
    pub fn new(suggestion: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            suggestion,
            created_at: now,
        }
    }
}
