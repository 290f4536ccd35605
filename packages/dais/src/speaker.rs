//! Speakers marketing-page section: anchor target, register link and the
//! testimonial grid fed from the roster.

use dais_domain::{AssetBase, Speaker, testimonials_from_speakers};
use dioxus::prelude::*;

use crate::testimonials::TestimonialSection;

/// Anchor id targeted by in-page navigation links.
pub const SPEAKER_SECTION_ID: &str = "speaker";

/// Grid heading.
pub const SPEAKERS_TITLE: &str = "Guest Speakers";

/// Supporting line rendered under the heading.
pub const SPEAKERS_SUBTITLE: &str = "Hear from leading voices in immigration advocacy";

const REGISTER_LABEL: &str = "Register Now";
const REGISTER_ROUTE: &str = "/register";

// -----------------------------------------------------------------------------
// Component Props
// -----------------------------------------------------------------------------

#[derive(Props, PartialEq, Clone)]
pub struct SpeakerSectionProps {
    /// Roster records, in display order.
    pub speakers: Vec<Speaker>,
    /// Base path prepended to relative portrait paths. Empty means the site
    /// root, so `jane.jpg` resolves to `/jane.jpg`.
    #[props(into, default)]
    pub asset_base: String,
}

// -----------------------------------------------------------------------------
// Speaker Section Component
// -----------------------------------------------------------------------------

#[component]
pub fn SpeakerSection(props: SpeakerSectionProps) -> Element {
    let resolver = AssetBase::new(props.asset_base.clone());

    rsx! {
        div {
            id: SPEAKER_SECTION_ID,
            div {
                class: "dais-speaker-cta",
                a {
                    class: "dais-button",
                    href: REGISTER_ROUTE,
                    {REGISTER_LABEL}
                }
            }
            TestimonialSection {
                title: SPEAKERS_TITLE,
                subtitle: SPEAKERS_SUBTITLE,
                testimonials: testimonials_from_speakers(&props.speakers, &resolver),
            }
        }
    }
}
