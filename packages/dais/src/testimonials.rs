//! Testimonial grid section with a viewport-triggered, staggered reveal.

use dais_domain::{CardTarget, RevealPhase, RevealTiming, Testimonial};
use dioxus::prelude::*;

use crate::icons::QuoteIcon;
use crate::reveal::use_reveal;
use crate::style::reveal_style;

// -----------------------------------------------------------------------------
// Component Props
// -----------------------------------------------------------------------------

#[derive(Props, PartialEq, Clone)]
pub struct TestimonialSectionProps {
    /// Section heading.
    #[props(into)]
    pub title: String,
    /// Supporting line rendered under the heading.
    #[props(into)]
    pub subtitle: String,
    /// Cards to render, already mapped and in display order.
    pub testimonials: Vec<Testimonial>,
}

// -----------------------------------------------------------------------------
// Testimonial Section Component
// -----------------------------------------------------------------------------

#[component]
pub fn TestimonialSection(props: TestimonialSectionProps) -> Element {
    let reveal = use_reveal();
    let phase = reveal.phase();
    let timing = RevealTiming::default();

    rsx! {
        section {
            class: "dais-testimonials",
            div {
                class: "dais-testimonials-inner",
                h2 { class: "dais-testimonials-title", "{props.title}" }
                p { class: "dais-testimonials-subtitle", "{props.subtitle}" }
                div {
                    class: "dais-testimonials-grid",
                    onmounted: move |event| reveal.observe(event),
                    for (index, testimonial) in props.testimonials.iter().enumerate() {
                        {testimonial_item(testimonial, phase, timing, index)}
                    }
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Helper Components
// -----------------------------------------------------------------------------

/// Renders one grid cell, wrapping the card in a link when it has somewhere
/// to go. The two arms stay separate so a card never half-navigates.
fn testimonial_item(
    testimonial: &Testimonial,
    phase: RevealPhase,
    timing: RevealTiming,
    index: usize,
) -> Element {
    let card = testimonial_card(testimonial, phase, timing, index);
    match testimonial.target() {
        CardTarget::Navigable(slug) => {
            let href = slug.detail_route();
            rsx! {
                a {
                    key: "{testimonial.id}",
                    class: "dais-card-link",
                    href: "{href}",
                    {card}
                }
            }
        }
        CardTarget::Plain => rsx! {
            div {
                key: "{testimonial.id}",
                class: "dais-card-plain",
                {card}
            }
        },
    }
}

/// Renders one card: full-bleed portrait, scrim, quote and byline.
fn testimonial_card(
    testimonial: &Testimonial,
    phase: RevealPhase,
    timing: RevealTiming,
    index: usize,
) -> Element {
    let style = reveal_style(phase, timing, index);

    rsx! {
        figure {
            class: "dais-card",
            style: "{style}",
            div {
                class: "dais-card-media",
                img {
                    class: "dais-card-image",
                    src: "{testimonial.image_src}",
                    alt: "{testimonial.name}",
                }
                div { class: "dais-card-scrim" }
            }
            div {
                class: "dais-card-body",
                QuoteIcon { class: "dais-card-glyph" }
                blockquote {
                    class: "dais-card-quote",
                    "{testimonial.quote}"
                }
                figcaption {
                    class: "dais-card-byline",
                    span { class: "dais-card-name", "— {testimonial.name}," }
                    span { class: "dais-card-role", "{testimonial.role}" }
                }
            }
        }
    }
}
