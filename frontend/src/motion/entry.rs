use web_sys::{Document, HtmlElement};

use crate::motion::dom::html_elements;
use crate::motion::easing::{lerp, Ease};
use crate::motion::frame::FrameLoop;

/// Slide-up-and-fade-in played once when the hero mounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    pub selector: &'static str,
    /// Starting offset below the resting position, in px.
    pub offset_y: f64,
    pub duration: f64,
    pub delay: f64,
    pub ease: Ease,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceFrame {
    pub translate_y: f64,
    pub opacity: f64,
}

pub const HERO_ENTRANCES: [Entrance; 3] = [
    Entrance { selector: ".hero-title", offset_y: 60.0, duration: 1.2, delay: 0.0, ease: Ease::Power3Out },
    Entrance { selector: ".hero-subtitle", offset_y: 80.0, duration: 1.4, delay: 0.2, ease: Ease::Power3Out },
    Entrance { selector: ".primary-btn", offset_y: 100.0, duration: 1.6, delay: 0.4, ease: Ease::Power3Out },
];

impl Entrance {
    pub fn sample(&self, elapsed: f64) -> EntranceFrame {
        let linear = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed - self.delay) / self.duration
        };
        let t = self.ease.apply(linear);
        EntranceFrame {
            translate_y: lerp(self.offset_y, 0.0, t),
            opacity: t,
        }
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.delay + self.duration
    }
}

fn apply(element: &HtmlElement, frame: EntranceFrame) {
    let style = element.style();
    let _ = style.set_property("transform", &format!("translate(0px, {:.3}px)", frame.translate_y));
    let _ = style.set_property("opacity", &format!("{:.4}", frame.opacity));
}

/// Plays `entrances` on whatever matching elements exist. Each element is
/// put in its starting pose immediately so nothing flashes before the first frame.
pub fn play(document: &Document, entrances: &[Entrance]) -> Option<FrameLoop> {
    let tracks: Vec<(Entrance, Vec<HtmlElement>)> = entrances
        .iter()
        .map(|entrance| (*entrance, html_elements(document, entrance.selector)))
        .filter(|(_, elements)| !elements.is_empty())
        .collect();
    if tracks.is_empty() {
        return None;
    }

    for (entrance, elements) in &tracks {
        for element in elements {
            apply(element, entrance.sample(0.0));
        }
    }

    let mut origin: Option<f64> = None;
    Some(FrameLoop::start(move |timestamp| {
        let start = *origin.get_or_insert(timestamp);
        let elapsed = (timestamp - start) / 1000.0;
        for (entrance, elements) in &tracks {
            let frame = entrance.sample(elapsed);
            for element in elements {
                apply(element, frame);
            }
        }
        !tracks.iter().all(|(entrance, _)| entrance.is_finished(elapsed))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_offset() {
        let title = HERO_ENTRANCES[0];
        assert_eq!(title.sample(0.0), EntranceFrame { translate_y: 60.0, opacity: 0.0 });
    }

    #[test]
    fn delay_holds_the_starting_pose() {
        let button = HERO_ENTRANCES[2];
        assert_eq!(button.sample(0.3), EntranceFrame { translate_y: 100.0, opacity: 0.0 });
        assert!(button.sample(0.5).opacity > 0.0);
    }

    #[test]
    fn settles_at_rest() {
        for entrance in HERO_ENTRANCES {
            let end = entrance.delay + entrance.duration;
            assert!(entrance.is_finished(end));
            assert!(!entrance.is_finished(end - 0.01));
            assert_eq!(entrance.sample(end + 0.05), EntranceFrame { translate_y: 0.0, opacity: 1.0 });
        }
    }

    #[test]
    fn staggered_durations() {
        let ends: Vec<f64> = HERO_ENTRANCES.iter().map(|e| e.delay + e.duration).collect();
        assert!(ends.windows(2).all(|w| w[0] < w[1]));
    }
}
