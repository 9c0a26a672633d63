use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::motion::easing::{lerp, Ease};
use crate::motion::listener::Listener;

/// Progress of `element` through the viewport, from its top edge touching
/// the viewport bottom (0.0) to its bottom edge leaving the viewport top (1.0).
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let distance = viewport_height + height;
    if distance <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    ((viewport_height - top) / distance).clamp(0.0, 1.0)
}

pub fn element_progress(window: &Window, element: &Element) -> f64 {
    let rect = element.get_bounding_client_rect();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    scroll_progress(rect.top(), rect.height(), viewport_height)
}

/// Background position in percent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackgroundPosition {
    pub x: f64,
    pub y: f64,
}

impl BackgroundPosition {
    pub const CENTER: BackgroundPosition = BackgroundPosition { x: 50.0, y: 50.0 };

    /// Parses the computed `background-position` value. Only percentages
    /// and the center/edge keywords are understood.
    pub fn parse(value: &str) -> Option<Self> {
        // Multiple backgrounds: the first layer drives the parallax.
        let first = value.split(',').next()?.trim();
        let mut parts = first.split_whitespace().map(parse_component);
        let x = parts.next()??;
        let y = match parts.next() {
            Some(component) => component?,
            None => 50.0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { x, y })
    }

    pub fn lerp(self, to: BackgroundPosition, t: f64) -> Self {
        Self {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }

    pub fn to_css(self) -> String {
        format!("{}% {}%", round(self.x), round(self.y))
    }
}

fn round(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn parse_component(token: &str) -> Option<f64> {
    match token {
        "left" | "top" => Some(0.0),
        "center" => Some(50.0),
        "right" | "bottom" => Some(100.0),
        _ => token.strip_suffix('%')?.parse().ok(),
    }
}

/// A style property scrubbed by the scroll position of its own element.
pub struct Parallax {
    pub from: BackgroundPosition,
    pub to: BackgroundPosition,
    pub ease: Ease,
}

impl Parallax {
    pub fn at(&self, progress: f64) -> BackgroundPosition {
        self.from.lerp(self.to, self.ease.apply(progress))
    }
}

pub const PHILOSOPHY_TARGET: BackgroundPosition = BackgroundPosition { x: 0.0, y: 50.0 };

/// Scrubs the background of element `id` toward `to` as it scrolls past.
pub fn bind_parallax(window: &Window, id: &str, to: BackgroundPosition) -> Option<Listener> {
    let section = window
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()?;

    let from = window
        .get_computed_style(&section)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("background-position").ok())
        .and_then(|value| BackgroundPosition::parse(&value))
        .unwrap_or(BackgroundPosition::CENTER);
    let parallax = Parallax { from, to, ease: Ease::Linear };

    let update = {
        let window = window.clone();
        let section = section.clone();
        move || {
            let position = parallax.at(element_progress(&window, &section));
            let _ = section.style().set_property("background-position", &position.to_css());
        }
    };
    update();

    Listener::new(window, "scroll", move |_| update())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_enter_to_exit() {
        // 800px viewport, 400px section.
        assert_eq!(scroll_progress(800.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-400.0, 400.0, 800.0), 1.0);
        assert_eq!(scroll_progress(200.0, 400.0, 800.0), 0.5);
    }

    #[test]
    fn progress_clamps_outside_the_range() {
        assert_eq!(scroll_progress(2000.0, 400.0, 800.0), 0.0);
        assert_eq!(scroll_progress(-5000.0, 400.0, 800.0), 1.0);
    }

    #[test]
    fn degenerate_viewport() {
        assert_eq!(scroll_progress(10.0, 0.0, 0.0), 0.0);
        assert_eq!(scroll_progress(-10.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn parses_computed_positions() {
        assert_eq!(BackgroundPosition::parse("100% 50%"), Some(BackgroundPosition { x: 100.0, y: 50.0 }));
        assert_eq!(BackgroundPosition::parse("center"), Some(BackgroundPosition::CENTER));
        assert_eq!(BackgroundPosition::parse("left top"), Some(BackgroundPosition { x: 0.0, y: 0.0 }));
        assert_eq!(BackgroundPosition::parse("25% 75%, 0% 0%"), Some(BackgroundPosition { x: 25.0, y: 75.0 }));
        assert_eq!(BackgroundPosition::parse("12px 30px"), None);
        assert_eq!(BackgroundPosition::parse(""), None);
    }

    #[test]
    fn parallax_is_linear_between_endpoints() {
        let parallax = Parallax {
            from: BackgroundPosition { x: 100.0, y: 50.0 },
            to: PHILOSOPHY_TARGET,
            ease: Ease::Linear,
        };
        assert_eq!(parallax.at(0.0).to_css(), "100% 50%");
        assert_eq!(parallax.at(0.25).to_css(), "75% 50%");
        assert_eq!(parallax.at(1.0).to_css(), "0% 50%");
    }
}
