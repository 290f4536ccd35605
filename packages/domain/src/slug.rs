//! Stable speaker identifier (URL-safe slug).
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(pub String);

impl Slug {
    /// Create a new slug.
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the underlying slug string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route of the speaker detail page this slug addresses.
    pub fn detail_route(&self) -> String {
        format!("/speakers/{}", self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
