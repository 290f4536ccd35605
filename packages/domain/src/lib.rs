//! # Dais Domain
//!
//! Shared domain objects and types for the dais speakers section.
//!
//! This crate contains the pure half of the system: the speaker record, the
//! testimonial view-model it projects into, the roster boundary, and the
//! reveal-animation state and timing. Nothing here touches a renderer; the
//! `dais` crate consumes these types to produce markup.

pub mod assets;
pub mod reveal;
pub mod roster;
pub mod slug;
pub mod speaker;
pub mod testimonial;

// Re-export core types
pub use assets::{AssetBase, AssetResolver, is_absolute_url};
pub use reveal::{HIDDEN_OFFSET_PX, RevealPhase, RevealTiming};
pub use roster::{RosterError, builtin_roster, parse_roster};
pub use slug::Slug;
pub use speaker::Speaker;
pub use testimonial::{CardTarget, ROLE_SEPARATOR, Testimonial, testimonials_from_speakers};

/// Prelude module containing commonly used types.
pub mod prelude {
    pub use crate::{
        AssetBase, AssetResolver, CardTarget, RevealPhase, RevealTiming, Slug, Speaker,
        Testimonial, testimonials_from_speakers,
    };
}
