//! Source-of-truth record describing one guest speaker.
use serde::{Deserialize, Serialize};

use crate::slug::Slug;

/// One roster entry. Field names serialize in camelCase so the embedded
/// roster JSON matches the upstream data file.
///
/// Roster order is display order and is preserved end-to-end; slugs are
/// unique across a roster (enforced at the [`crate::roster`] boundary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Stable identifier, unique across the roster; also the detail-page
    /// path segment.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// Short biography, shown verbatim as the card quote.
    pub short_bio: String,
    /// Session role label (keynote, panelist, ...). Optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_role: Option<String>,
    /// Session timing label.
    pub session_time: String,
    /// Image reference: an absolute URL, or a bundled-asset path that still
    /// needs resolution.
    pub image: String,
}
