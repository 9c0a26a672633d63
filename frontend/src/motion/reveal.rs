use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::motion::dom::{add_class, html_elements};

pub const REVEAL_CANDIDATES: &str = ".card, .data-card, .testimonial-card";
/// Fraction of an element that must be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Reveals `.reveal` elements once as they scroll into view. Dropping the
/// handle disconnects the observer.
pub struct Reveal {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Reveal {
    pub fn bind(document: &Document) -> Option<Self> {
        add_class(&html_elements(document, REVEAL_CANDIDATES), "reveal");

        let items = html_elements(document, ".reveal");
        if items.is_empty() {
            return None;
        }

        let callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("is-visible");
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        for item in &items {
            observer.observe(item);
        }

        Some(Self { observer, _callback: callback })
    }
}

impl Drop for Reveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
