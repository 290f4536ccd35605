//! Server-side rendering checks for the speakers section markup.

use dais::domain::{Slug, Speaker, Testimonial};
use dais::page::{render_speaker_page, render_speaker_page_pretty, roster_or_empty};
use dais::speaker::SpeakerSection;
use dais::testimonials::TestimonialSection;
use dioxus::prelude::*;

/// Build a roster entry with the given slug, role and portrait path
fn speaker(slug: &str, name: &str, role: Option<&str>, image: &str) -> Speaker {
    Speaker {
        slug: Slug::new(slug),
        name: name.to_string(),
        short_bio: format!("{name} works with families navigating the immigration system."),
        session_role: role.map(str::to_string),
        session_time: "10:00 AM".to_string(),
        image: image.to_string(),
    }
}

/// Render an element to its HTML string
fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

#[test]
fn test_slugged_cards_link_to_detail_routes() {
    let html = render(rsx! {
        SpeakerSection {
            speakers: vec![speaker("jane-doe", "Jane Doe", Some("Keynote"), "jane.jpg")],
        }
    });

    assert!(html.contains(r#"href="/speakers/jane-doe""#));
    assert!(html.contains(r#"class="dais-card-link""#));
    // Default asset base resolves bundled portraits against the site root
    assert!(html.contains(r#"src="/jane.jpg""#));
    assert!(html.contains(r#"alt="Jane Doe""#));
}

#[test]
fn test_byline_composes_role_and_timing() {
    let html = render(rsx! {
        SpeakerSection {
            speakers: vec![
                speaker("ada-reyes", "Ada Reyes", Some("Keynote"), "ada.jpg"),
                speaker("ben-osei", "Ben Osei", None, "ben.jpg"),
            ],
        }
    });

    // Roled speakers get "<role> – <time>"; the rest get the time alone
    assert!(html.contains(">Keynote – 10:00 AM<"));
    assert!(html.contains(">10:00 AM<"));
    assert!(html.contains("— Ada Reyes,"));
}

#[test]
fn test_preserves_card_order() {
    let html = render(rsx! {
        SpeakerSection {
            speakers: vec![
                speaker("ada-reyes", "Ada Reyes", Some("Keynote"), "ada.jpg"),
                speaker("ben-osei", "Ben Osei", None, "ben.jpg"),
                speaker("cal-ibarra", "Cal Ibarra", Some("Panelist"), "cal.jpg"),
            ],
        }
    });

    let ada = html.find("Ada Reyes").unwrap();
    let ben = html.find("Ben Osei").unwrap();
    let cal = html.find("Cal Ibarra").unwrap();
    assert!(ada < ben);
    assert!(ben < cal);
}

#[test]
fn test_empty_roster_renders_section_without_cards() {
    let html = render(rsx! {
        SpeakerSection { speakers: Vec::new() }
    });

    assert!(html.contains("Guest Speakers"));
    assert!(html.contains("Hear from leading voices in immigration advocacy"));
    assert!(!html.contains("dais-card"));
}

#[test]
fn test_register_cta_and_anchor_render() {
    let html = render(rsx! {
        SpeakerSection { speakers: Vec::new() }
    });

    assert!(html.contains(r#"id="speaker""#));
    assert!(html.contains(r#"href="/register""#));
    assert!(html.contains("Register Now"));
}

#[test]
fn test_slugless_testimonials_render_plain_cards() {
    let testimonial = Testimonial {
        id: 1,
        quote: "No detail page for this one.".to_string(),
        name: "Anon".to_string(),
        role: "10:00 AM".to_string(),
        image_src: "/anon.jpg".to_string(),
        slug: None,
    };
    let html = render(rsx! {
        TestimonialSection {
            title: "Guest Speakers",
            subtitle: "Hear from leading voices",
            testimonials: vec![testimonial],
        }
    });

    assert!(html.contains(r#"class="dais-card-plain""#));
    assert!(!html.contains("<a "));
}

#[test]
fn test_quote_markup_is_escaped() {
    let testimonial = Testimonial {
        id: 1,
        quote: "Fights <b>fear</b> & doubt daily.".to_string(),
        name: "Anon".to_string(),
        role: "10:00 AM".to_string(),
        image_src: "/anon.jpg".to_string(),
        slug: None,
    };
    let html = render(rsx! {
        TestimonialSection {
            title: "Guest Speakers",
            subtitle: "Hear from leading voices",
            testimonials: vec![testimonial],
        }
    });

    assert!(html.contains("&lt;b&gt;fear&lt;/b&gt;"));
    assert!(html.contains("&amp; doubt"));
    assert!(!html.contains("<b>"));
}

#[test]
fn test_quote_glyph_is_marked_decorative() {
    let html = render(rsx! {
        SpeakerSection {
            speakers: vec![speaker("jane-doe", "Jane Doe", Some("Keynote"), "jane.jpg")],
        }
    });

    assert!(html.contains("<svg"));
    assert!(html.contains(r#"class="dais-card-glyph""#));
    // The quote text carries the meaning; the glyph stays hidden from
    // assistive technology
    assert!(html.contains(r#"aria-hidden="true""#));
}

#[test]
fn test_ssr_markup_reveals_with_staggered_delays() {
    let html = render(rsx! {
        SpeakerSection {
            speakers: vec![
                speaker("ada-reyes", "Ada Reyes", Some("Keynote"), "ada.jpg"),
                speaker("ben-osei", "Ben Osei", None, "ben.jpg"),
                speaker("cal-ibarra", "Cal Ibarra", Some("Panelist"), "cal.jpg"),
            ],
        }
    });

    // Without a browser viewport the grid renders at rest, with each card's
    // transition delay baked in at one stagger interval per index
    assert!(html.contains("opacity:1"));
    assert!(html.contains("ease-out 0ms"));
    assert!(html.contains("ease-out 200ms"));
    assert!(html.contains("ease-out 400ms"));
    assert!(!html.contains("opacity:0"));
}

#[test]
fn test_page_document_shell() {
    let html = render_speaker_page(
        vec![speaker("jane-doe", "Jane Doe", None, "jane.jpg")],
        "/event",
    );

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.ends_with("</html>"));
    assert!(html.contains("<title>Guest Speakers</title>"));
    assert!(html.contains(".dais-testimonials-grid"));
    assert!(html.contains(r#"src="/event/jane.jpg""#));
}

#[test]
fn test_pretty_render_indents_the_document() {
    let speakers = vec![speaker("jane-doe", "Jane Doe", Some("Keynote"), "jane.jpg")];
    let compact = render_speaker_page(speakers.clone(), "");
    let pretty = render_speaker_page_pretty(speakers, "");

    // Same document, re-laid with one tag per line and nesting indentation
    assert!(pretty.lines().count() > compact.lines().count());
    assert_eq!(pretty.lines().next(), Some("<!DOCTYPE html>"));
    assert!(pretty.contains("\n  <head>"));
    assert!(pretty.contains(r#"href="/speakers/jane-doe""#));
    assert!(pretty.trim_end().ends_with("</html>"));
}

#[test]
fn test_builtin_roster_renders_full_grid() {
    let html = render_speaker_page(roster_or_empty(), "");

    // Six roster entries, all slugged, so six linked cards
    assert_eq!(html.matches(r#"class="dais-card-link""#).count(), 6);
    assert!(html.contains(r#"href="/speakers/maria-alvarez""#));
    // Entries without a role label fall back to the bare timing label
    assert!(html.contains(">11:00 AM<"));
    // Absolute portrait URLs pass through the resolver untouched
    assert!(html.contains(r#"src="https://images.example.org/speakers/amira-haddad.jpg""#));
    assert!(html.contains(r#"src="/speakers/maria-alvarez.jpg""#));
}
