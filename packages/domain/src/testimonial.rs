//! Render-ready projection of speaker records into testimonial cards.
//!
//! View-models are rebuilt from the roster on every render pass. They carry
//! no identity beyond their position and are never persisted; the mapping is
//! deterministic, so two passes over the same roster are structurally equal.

use serde::{Deserialize, Serialize};

use crate::assets::{AssetResolver, is_absolute_url};
use crate::slug::Slug;
use crate::speaker::Speaker;

/// Separator between the role label and the timing label in the byline.
pub const ROLE_SEPARATOR: &str = " – ";

/// Derived view of one speaker, shaped for the card renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    /// 1-based position in the source sequence.
    pub id: u32,
    /// Quote text: the speaker's short biography, verbatim. Escaping is the
    /// renderer's concern.
    pub quote: String,
    /// Display name, verbatim.
    pub name: String,
    /// Byline: `"<role> – <time>"`, or the timing label alone when no role
    /// label is present.
    pub role: String,
    /// Fully-qualified image URL.
    pub image_src: String,
    /// Detail-page slug. `None` renders a plain, non-navigable card.
    pub slug: Option<Slug>,
}

/// Per-card navigation choice, decided once per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTarget {
    /// The whole card links to the speaker detail page.
    Navigable(Slug),
    /// The card is plain, non-interactive content.
    Plain,
}

impl Testimonial {
    /// Decide whether this card navigates anywhere.
    pub fn target(&self) -> CardTarget {
        match &self.slug {
            Some(slug) => CardTarget::Navigable(slug.clone()),
            None => CardTarget::Plain,
        }
    }
}

/// Map an ordered speaker roster into testimonial view-models.
///
/// Exactly one view-model per record, in input order, ids `1..=N`. Absolute
/// image URLs pass through untouched; anything else goes through `resolver`.
/// An empty roster maps to an empty list.
pub fn testimonials_from_speakers(
    speakers: &[Speaker],
    resolver: &impl AssetResolver,
) -> Vec<Testimonial> {
    speakers
        .iter()
        .enumerate()
        .map(|(index, speaker)| Testimonial {
            id: index as u32 + 1,
            quote: speaker.short_bio.clone(),
            name: speaker.name.clone(),
            role: role_line(speaker.session_role.as_deref(), &speaker.session_time),
            image_src: image_src(&speaker.image, resolver),
            slug: Some(speaker.slug.clone()),
        })
        .collect()
}

/// Compose the byline from the optional role label and the timing label.
/// An empty role label counts as absent.
fn role_line(session_role: Option<&str>, session_time: &str) -> String {
    match session_role {
        Some(role) if !role.is_empty() => format!("{role}{ROLE_SEPARATOR}{session_time}"),
        _ => session_time.to_string(),
    }
}

fn image_src(image: &str, resolver: &impl AssetResolver) -> String {
    if is_absolute_url(image) {
        image.to_string()
    } else {
        resolver.resolve(image)
    }
}
