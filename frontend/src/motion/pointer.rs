use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::motion::dom::html_elements;
use crate::motion::listener::Listener;

pub const TILT_SELECTOR: &str = ".card, .info-card, .data-card, .testimonial-card";
pub const SPOTLIGHT_SELECTOR: &str = ".cta-spotlight";
pub const TILT_REST: &str = "rotateX(0deg) rotateY(0deg)";

/// Max tilt in degrees at a card's edge.
const TILT_RANGE: f64 = 8.0;

/// Pointer position inside a box, both axes normalized to 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Relative {
    pub x: f64,
    pub y: f64,
}

impl Relative {
    pub fn within(client_x: f64, client_y: f64, left: f64, top: f64, width: f64, height: f64) -> Self {
        let axis = |offset: f64, size: f64| if size > 0.0 { offset / size } else { 0.5 };
        Self {
            x: axis(client_x - left, width),
            y: axis(client_y - top, height),
        }
    }

    fn from_event(element: &HtmlElement, event: &MouseEvent) -> Self {
        let rect = element.get_bounding_client_rect();
        Self::within(
            event.client_x() as f64,
            event.client_y() as f64,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        )
    }
}

/// (rotateX, rotateY) in degrees. Tilts away from the pointer vertically
/// and toward it horizontally.
pub fn tilt_angles(pointer: Relative) -> (f64, f64) {
    ((0.5 - pointer.y) * TILT_RANGE, (pointer.x - 0.5) * TILT_RANGE)
}

pub fn tilt_transform(pointer: Relative) -> String {
    let (rotate_x, rotate_y) = tilt_angles(pointer);
    format!("rotateX({}deg) rotateY({}deg)", rotate_x, rotate_y)
}

/// `--spotlight-x` / `--spotlight-y` values.
pub fn spotlight_vars(pointer: Relative) -> (String, String) {
    (format!("{}%", pointer.x * 100.0), format!("{}%", pointer.y * 100.0))
}

fn mouse(event: &web_sys::Event) -> Option<&MouseEvent> {
    event.dyn_ref::<MouseEvent>()
}

pub fn bind_tilt(document: &Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for card in html_elements(document, TILT_SELECTOR) {
        let _ = card.class_list().add_1("tilt-card");

        let target = card.clone();
        listeners.extend(Listener::new(&card, "mousemove", move |event| {
            let Some(event) = mouse(&event) else { return };
            let pointer = Relative::from_event(&target, event);
            let _ = target.style().set_property("transform", &tilt_transform(pointer));
            let _ = target.class_list().add_1("is-tilting");
        }));

        let target = card.clone();
        listeners.extend(Listener::new(&card, "mouseleave", move |_| {
            let _ = target.style().set_property("transform", TILT_REST);
            let _ = target.class_list().remove_1("is-tilting");
        }));
    }
    listeners
}

pub fn bind_spotlight(document: &Document) -> Vec<Listener> {
    let mut listeners = Vec::new();
    for spotlight in html_elements(document, SPOTLIGHT_SELECTOR) {
        let target = spotlight.clone();
        listeners.extend(Listener::new(&spotlight, "mousemove", move |event| {
            let Some(event) = mouse(&event) else { return };
            let (x, y) = spotlight_vars(Relative::from_event(&target, event));
            let style = target.style();
            let _ = style.set_property("--spotlight-x", &x);
            let _ = style.set_property("--spotlight-y", &y);
        }));

        let target = spotlight.clone();
        listeners.extend(Listener::new(&spotlight, "mouseenter", move |_| {
            let _ = target.class_list().add_1("is-active");
        }));

        let target = spotlight.clone();
        listeners.extend(Listener::new(&spotlight, "mouseleave", move |_| {
            let _ = target.class_list().remove_1("is-active");
        }));
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        let centre = Relative::within(150.0, 100.0, 100.0, 50.0, 100.0, 100.0);
        assert_eq!(centre, Relative { x: 0.5, y: 0.5 });
        assert_eq!(tilt_angles(centre), (0.0, 0.0));
        assert_eq!(tilt_transform(centre), "rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn corners_reach_full_tilt() {
        assert_eq!(tilt_angles(Relative { x: 0.0, y: 0.0 }), (4.0, -4.0));
        assert_eq!(tilt_angles(Relative { x: 1.0, y: 1.0 }), (-4.0, 4.0));
        assert_eq!(tilt_transform(Relative { x: 1.0, y: 0.0 }), "rotateX(4deg) rotateY(4deg)");
    }

    #[test]
    fn zero_sized_box_stays_centred() {
        assert_eq!(Relative::within(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), Relative { x: 0.5, y: 0.5 });
    }

    #[test]
    fn spotlight_uses_percentages() {
        let pointer = Relative::within(25.0, 150.0, 0.0, 0.0, 100.0, 200.0);
        assert_eq!(spotlight_vars(pointer), ("25%".to_string(), "75%".to_string()));
    }
}
