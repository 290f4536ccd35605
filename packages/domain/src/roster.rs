//! Embedded speaker roster and its validation.
//!
//! The render path downstream of this module never fails; this is the one
//! fallible boundary. Callers are expected to degrade to an empty roster on
//! error rather than crash.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::speaker::Speaker;

const ROSTER_JSON: &str = include_str!("../data/speakers.json");

static ROSTER: Lazy<Result<Vec<Speaker>, RosterError>> = Lazy::new(|| parse_roster(ROSTER_JSON));

/// Errors raised while loading a speaker roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster JSON did not match the speaker record shape.
    #[error("roster parse: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records share a slug; slugs must be unique across a roster.
    #[error("duplicate speaker slug: {0}")]
    DuplicateSlug(String),
}

/// Parse and validate a roster from camelCase JSON.
///
/// Record order is preserved and an empty roster is legal. The only
/// structural invariant checked here is slug uniqueness.
pub fn parse_roster(json: &str) -> Result<Vec<Speaker>, RosterError> {
    let speakers: Vec<Speaker> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for speaker in &speakers {
        if !seen.insert(speaker.slug.as_str()) {
            return Err(RosterError::DuplicateSlug(speaker.slug.as_str().to_string()));
        }
    }

    Ok(speakers)
}

/// The roster bundled with the crate, parsed and validated once.
pub fn builtin_roster() -> Result<&'static [Speaker], &'static RosterError> {
    match &*ROSTER {
        Ok(speakers) => Ok(speakers),
        Err(err) => Err(err),
    }
}
