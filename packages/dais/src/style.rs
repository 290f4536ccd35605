//! Section stylesheet and per-card reveal styling.
//!
//! Components emit classed markup only; embedders (and the exporter) inject
//! [`STYLESHEET`] once per page. The reveal animation splits in two: the
//! static transition rules live in the stylesheet, while the per-card phase
//! and stagger delay are computed here as an inline style so the schedule is
//! explicit crate code rather than animation-runtime orchestration.

use dais_domain::{HIDDEN_OFFSET_PX, RevealPhase, RevealTiming};

/// Stylesheet for the speakers section and testimonial grid.
///
/// Grid columns: one below 48rem, two from 48rem, three from 64rem. Cards:
/// 20rem cover-fit media anchored to the top, bottom scrim gradient, quote
/// clamped to four visible lines. Navigable cards get a focus ring and a
/// hover affordance in the accent color `#788668`.
pub const STYLESHEET: &str = "
.dais-testimonials{width:100%;background:#ffffff;padding:4rem 0;}
@media (min-width:40rem){.dais-testimonials{padding:6rem 0;}}
.dais-testimonials-inner{max-width:72rem;margin:0 auto;padding:0 1rem;text-align:center;}
.dais-testimonials-title{margin:0;font-size:1.875rem;line-height:2.25rem;font-weight:700;letter-spacing:-0.025em;color:#111827;}
@media (min-width:40rem){.dais-testimonials-title{font-size:2.25rem;line-height:2.5rem;}}
.dais-testimonials-subtitle{max-width:42rem;margin:1rem auto 0;font-size:1.125rem;line-height:1.75rem;color:#6b7280;}
.dais-testimonials-grid{margin-top:3rem;display:grid;grid-template-columns:1fr;gap:2rem;}
@media (min-width:48rem){.dais-testimonials-grid{grid-template-columns:repeat(2,1fr);}}
@media (min-width:64rem){.dais-testimonials-grid{grid-template-columns:repeat(3,1fr);}}
.dais-card-link{display:block;height:100%;border-radius:0.5rem;text-decoration:none;}
.dais-card-plain{display:block;height:100%;border-radius:0.5rem;}
.dais-card-link:focus{outline:none;}
.dais-card-link:focus-visible{outline:none;box-shadow:0 0 0 2px #ffffff,0 0 0 4px #788668;}
.dais-card-link:hover .dais-card-image{transform:scale(1.03);}
.dais-card{position:relative;margin:0;height:100%;display:flex;flex-direction:column;overflow:hidden;border-radius:0.5rem;background:#ffffff;box-shadow:0 1px 2px rgb(0 0 0/0.05);}
.dais-card-media{position:relative;flex:1 1 0;min-height:0;}
.dais-card-image{display:block;height:20rem;width:100%;object-fit:cover;object-position:top;transition:transform 300ms ease-out;}
.dais-card-scrim{position:absolute;inset:0;background:linear-gradient(to top,rgb(0 0 0/0.7),rgb(0 0 0/0.4) 50%,transparent);}
.dais-card-body{position:absolute;bottom:0;left:0;right:0;padding:1.5rem;text-align:left;color:#ffffff;}
.dais-card-glyph{margin-bottom:1rem;height:2rem;width:2rem;color:rgb(255 255 255/0.4);}
.dais-card-quote{margin:0;font-size:1rem;font-weight:500;line-height:1.625;display:-webkit-box;-webkit-box-orient:vertical;-webkit-line-clamp:4;overflow:hidden;}
.dais-card-byline{margin-top:1rem;}
.dais-card-name{font-weight:600;color:#ffffff;}
.dais-card-role{margin-left:0.25rem;color:rgb(255 255 255/0.6);}
.dais-speaker-cta{max-width:80rem;margin:0 auto;padding:5rem 1rem 2rem;text-align:center;}
.dais-button{display:inline-block;padding:0.75rem 2rem;border-radius:0.375rem;background:#788668;color:#ffffff;font-weight:500;text-decoration:none;}
.dais-button:hover{background:rgb(120 134 104/0.9);}
.dais-button:focus-visible{outline:none;box-shadow:0 0 0 2px #ffffff,0 0 0 4px #788668;}
";

/// Inline style driving one card's reveal animation.
///
/// Hidden cards are transparent and offset down by [`HIDDEN_OFFSET_PX`].
/// Revealed cards sit at rest behind a transition whose delay is the card's
/// stagger offset, so card `i` starts exactly one stagger interval after
/// card `i - 1`.
pub fn reveal_style(phase: RevealPhase, timing: RevealTiming, index: usize) -> String {
    match phase {
        RevealPhase::Hidden => {
            format!("opacity:0;transform:translateY({HIDDEN_OFFSET_PX}px)")
        }
        RevealPhase::Revealed => {
            let duration = timing.duration.as_millis();
            let delay = timing.delay_for(index).as_millis();
            format!(
                "opacity:1;transform:translateY(0);\
                 transition:opacity {duration}ms ease-out {delay}ms,\
                 transform {duration}ms ease-out {delay}ms"
            )
        }
    }
}
