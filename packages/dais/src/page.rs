//! Standalone page assembly and server-side rendering entry points.
//!
//! Embedders that already own a page drop [`SpeakerSection`] into their own
//! tree and inject [`STYLESHEET`] themselves. [`SpeakerPage`] is the
//! batteries-included alternative: the document head and body around the
//! section, which [`render_speaker_page`] wraps in the doctype and `html`
//! shell for the exporter binary and one-call renders.

use dais_domain::Speaker;
use dioxus::prelude::*;

use crate::speaker::{SPEAKERS_TITLE, SpeakerSection};
use crate::style::STYLESHEET;

// -----------------------------------------------------------------------------
// Component Props
// -----------------------------------------------------------------------------

#[derive(Props, PartialEq, Clone)]
pub struct SpeakerPageProps {
    /// Roster records, in display order.
    pub speakers: Vec<Speaker>,
    /// Base path prepended to relative portrait paths.
    #[props(into, default)]
    pub asset_base: String,
}

// -----------------------------------------------------------------------------
// Speaker Page Component
// -----------------------------------------------------------------------------

/// Document head and body wrapping [`SpeakerSection`], stylesheet included.
/// The render entry points below add the doctype and `html` element.
#[component]
pub fn SpeakerPage(props: SpeakerPageProps) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1",
            }
            title { "{SPEAKERS_TITLE}" }
            style { {STYLESHEET} }
        }
        body {
            SpeakerSection {
                speakers: props.speakers,
                asset_base: props.asset_base,
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Rendering Entry Points
// -----------------------------------------------------------------------------

/// Renders the speakers page to a complete HTML document string.
pub fn render_speaker_page(speakers: Vec<Speaker>, asset_base: impl Into<String>) -> String {
    render_page(speakers, asset_base.into(), false)
}

/// Like [`render_speaker_page`], but with indented markup for inspection.
pub fn render_speaker_page_pretty(speakers: Vec<Speaker>, asset_base: impl Into<String>) -> String {
    render_page(speakers, asset_base.into(), true)
}

fn render_page(speakers: Vec<Speaker>, asset_base: String, pretty: bool) -> String {
    let mut dom = VirtualDom::new_with_props(
        SpeakerPage,
        SpeakerPageProps {
            speakers,
            asset_base,
        },
    );
    dom.rebuild_in_place();

    let document = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    );
    if pretty {
        indent_markup(&document)
    } else {
        document
    }
}

/// Built-in roster, or an empty list when the embedded JSON fails to load.
/// The page itself still renders (heading, register link, empty grid).
pub fn roster_or_empty() -> Vec<Speaker> {
    match dais_domain::builtin_roster() {
        Ok(speakers) => speakers.to_vec(),
        Err(error) => {
            tracing::warn!(%error, "builtin roster unavailable, rendering an empty grid");
            Vec::new()
        }
    }
}

// -----------------------------------------------------------------------------
// Markup Indenting
// -----------------------------------------------------------------------------

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Re-lays compact renderer output with one tag per line and two-space
/// nesting. Text runs are kept verbatim, trimmed per line.
fn indent_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len() * 2);
    let mut depth = 0usize;
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        push_text(&mut out, depth, &rest[..open]);
        rest = &rest[open..];

        let Some(close) = rest.find('>') else { break };
        let tag = &rest[..=close];
        if tag.starts_with("</") {
            depth = depth.saturating_sub(1);
            push_line(&mut out, depth, tag);
        } else {
            push_line(&mut out, depth, tag);
            if opens_scope(tag) {
                depth += 1;
            }
        }
        rest = &rest[close + 1..];
    }
    push_text(&mut out, depth, rest);
    out
}

fn push_text(out: &mut String, depth: usize, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if !line.is_empty() {
            push_line(out, depth, line);
        }
    }
}

fn push_line(out: &mut String, depth: usize, content: &str) {
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(content);
    out.push('\n');
}

fn opens_scope(tag: &str) -> bool {
    !tag.starts_with("<!") && !tag.ends_with("/>") && !is_void_element(tag)
}

fn is_void_element(tag: &str) -> bool {
    let name = tag
        .trim_start_matches('<')
        .split([' ', '>', '/'])
        .next()
        .unwrap_or("");
    VOID_ELEMENTS.contains(&name)
}
