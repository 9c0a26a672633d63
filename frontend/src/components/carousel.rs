use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const AUTO_ADVANCE_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Which card is showing. Always in range while there are cards.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub len: usize,
    pub active: usize,
}

pub enum CarouselAction {
    Advance,
    Select(usize),
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let active = match action {
            CarouselAction::Advance => (self.active + 1) % self.len,
            CarouselAction::Select(index) if index < self.len => index,
            CarouselAction::Select(_) => return self,
        };
        Rc::new(Self { len: self.len, active })
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let len = props.testimonials.len();
    let state = use_reducer(|| CarouselState::new(len));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |len| {
                let interval = (*len > 0).then(|| {
                    Interval::new(AUTO_ADVANCE_MS, move || dispatcher.dispatch(CarouselAction::Advance))
                });
                move || drop(interval)
            },
            len,
        );
    }

    let cards = props.testimonials.iter().enumerate().map(|(i, t)| {
        html! {
            <article class={classes!("testimonial-card", (i == state.active).then(|| "is-active"))}>
                <p class="testimonial-quote">{t.quote}</p>
                <div class="testimonial-author">
                    <strong>{t.name}</strong>
                    <span>{t.role}</span>
                </div>
            </article>
        }
    });

    let dots = (0..len).map(|i| {
        let onclick = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::Select(i)))
        };
        html! {
            <button
                class={classes!("testimonial-dot", (i == state.active).then(|| "is-active"))}
                aria-label={format!("Show testimonial {}", i + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div class="testimonial-carousel">
            <div id="testimonialTrack" class="testimonial-track">
                { for cards }
            </div>
            <div id="testimonialDots" class="testimonial-dots">
                { for dots }
            </div>
        </div>
    }
}
