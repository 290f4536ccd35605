//! # Dais
//!
//! Speakers section and testimonial grid components for event sites.
//!
//! The project splits in two: [`dais_domain`] holds the data model and the
//! pure speaker-to-testimonial mapping, while this crate renders that model
//! with Dioxus. [`SpeakerSection`] is the embeddable unit; [`SpeakerPage`]
//! wraps it in a full document for the static exporter.
//!
//! Markup is classed rather than styled inline (the reveal transform is the
//! one exception), so embedders inject [`STYLESHEET`] once per page. With
//! the `web` feature enabled the grid hides until it scrolls into view, then
//! reveals card by card; without it the markup renders at rest.

pub mod icons;
pub mod page;
pub mod reveal;
pub mod speaker;
pub mod style;
pub mod testimonials;

pub use dais_domain as domain;

pub use icons::QuoteIcon;
pub use page::{
    SpeakerPage, SpeakerPageProps, render_speaker_page, render_speaker_page_pretty,
    roster_or_empty,
};
pub use reveal::{Reveal, use_reveal};
pub use speaker::{
    SPEAKER_SECTION_ID, SPEAKERS_SUBTITLE, SPEAKERS_TITLE, SpeakerSection, SpeakerSectionProps,
};
pub use style::{STYLESHEET, reveal_style};
pub use testimonials::{TestimonialSection, TestimonialSectionProps};
