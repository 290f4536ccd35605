//! Viewport-triggered reveal state for the testimonial grid.
//!
//! [`use_reveal`] owns a [`RevealPhase`] signal and a mount callback. The
//! grid container passes its `onmounted` event to [`Reveal::observe`]; once
//! the element scrolls into view the phase flips to revealed and every card
//! plays its staggered entrance. The transition fires at most once per mount.
//!
//! Outside the `web` feature there is no viewport to watch, so the phase
//! starts revealed and server-rendered markup shows the grid at rest.

use dais_domain::RevealPhase;
use dioxus::prelude::*;

/// Fraction of the grid that must be visible before the reveal fires.
#[cfg(feature = "web")]
const VIEWPORT_THRESHOLD: f64 = 0.2;

/// Reveal state shared by the grid container and its cards.
#[derive(Clone, Copy)]
pub struct Reveal {
    phase: Signal<RevealPhase>,
    on_mount: Callback<MountedEvent>,
}

impl Reveal {
    /// Current phase, subscribing the caller to future changes.
    pub fn phase(&self) -> RevealPhase {
        *self.phase.read()
    }

    /// Hands the mounted grid element to the viewport watcher.
    pub fn observe(&self, event: MountedEvent) {
        self.on_mount.call(event);
    }
}

/// Hook that arms the reveal for one grid instance.
pub fn use_reveal() -> Reveal {
    let phase = use_signal(initial_phase);
    let on_mount = use_callback(move |event: MountedEvent| arm(phase, &event));
    Reveal { phase, on_mount }
}

#[cfg(feature = "web")]
fn initial_phase() -> RevealPhase {
    RevealPhase::Hidden
}

#[cfg(not(feature = "web"))]
fn initial_phase() -> RevealPhase {
    RevealPhase::Revealed
}

#[cfg(feature = "web")]
fn arm(mut phase: Signal<RevealPhase>, event: &MountedEvent) {
    use wasm_bindgen::{JsCast, JsValue, closure::Closure};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    if phase.peek().is_revealed() {
        return;
    }
    let Some(element) = event.data().downcast::<web_sys::Element>().cloned() else {
        // Mounted outside a real browser DOM; nothing to watch.
        reveal_now(phase);
        return;
    };

    let trigger = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if intersecting && phase.write().trigger() {
                tracing::debug!("testimonial grid entered the viewport");
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VIEWPORT_THRESHOLD));
    match IntersectionObserver::new_with_options(trigger.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&element);
            // The observer disconnects after the first reveal; the leaked
            // closure stays callable until then.
            trigger.forget();
        }
        Err(error) => {
            drop(trigger);
            tracing::debug!(?error, "IntersectionObserver unavailable, revealing immediately");
            gloo_timers::callback::Timeout::new(0, move || reveal_now(phase)).forget();
        }
    }
}

#[cfg(not(feature = "web"))]
fn arm(phase: Signal<RevealPhase>, _event: &MountedEvent) {
    reveal_now(phase);
}

fn reveal_now(mut phase: Signal<RevealPhase>) {
    if phase.write().trigger() {
        tracing::debug!("testimonial grid revealed");
    }
}
