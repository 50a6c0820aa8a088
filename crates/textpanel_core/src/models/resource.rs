//! External resource reference model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single external style or script reference.
///
/// `id` is assigned once at creation and never changes; `url` is free text and
/// may be empty or repeated within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub url: String,
}

impl Resource {
    /// Create a resource with a freshly generated identifier.
    ///
    /// # Arguments
    /// - `url`: Reference URL as typed by the user.
    ///
    /// # Returns
    /// A new [`Resource`] with a v4 UUID id.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
        }
    }
}
