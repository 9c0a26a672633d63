use std::rc::Rc;

use yew::prelude::*;
use yew_router::components::Link;

use crate::components::carousel::{Testimonial, TestimonialCarousel};
use crate::config::CmsConfig;
use crate::content::item::Category;
use crate::content::loader;
use crate::motion::{entry, pointer, reveal::Reveal, scroll};
use crate::scene::hero::HeroScene;
use crate::Route;

struct Service {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SERVICES: [Service; 4] = [
    Service {
        icon: "🧠",
        title: "Applied AI",
        body: "Assistants, document intelligence and forecasting wired into the tools your teams already use.",
    },
    Service {
        icon: "🥽",
        title: "Immersive Learning",
        body: "XR training labs and interactive simulations that turn procedures into muscle memory.",
    },
    Service {
        icon: "⚙️",
        title: "Automation",
        body: "Workflow automation and integrations that take the busywork out of operations.",
    },
    Service {
        icon: "☁️",
        title: "Cloud Products",
        body: "Web and mobile products built on modern UI, APIs and cloud workflows.",
    },
];

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "The AI roadmap workshop gave our leadership a plan we could actually execute in a quarter.",
            name: "Operations Head",
            role: "Regional logistics firm",
        },
        Testimonial {
            quote: "Our trainees learn the plant floor in XR before they ever set foot on it. Onboarding time dropped by half.",
            name: "Training Lead",
            role: "Manufacturing partner",
        },
        Testimonial {
            quote: "The internship was real work on real pipelines. I shipped evaluation tooling that is still in use.",
            name: "Former Intern",
            role: "AI Engineering cohort",
        },
    ]
}

fn content_grid(category: Category, heading: &str, lead: &str) -> Html {
    html! {
        <section id={category.slug()} class="data-section">
            <div class="section-header">
                <h2>{heading}</h2>
                <p>{lead}</p>
            </div>
            // Filled by the content loader once a source answers.
            <div id={category.container_id()} class="data-grid"></div>
        </section>
    }
}

/// Counts finished grid renders. Card effects rebind whenever it moves so
/// injected cards pick up tilt and reveal.
#[derive(Debug, Default, PartialEq)]
struct GridRenders(u32);

impl Reducible for GridRenders {
    type Action = Category;

    fn reduce(self: Rc<Self>, _category: Category) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let grid_renders = use_reducer(GridRenders::default);

    // Entry animations, parallax and the CTA spotlight
    {
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let document = window.as_ref().and_then(|w| w.document());

                let entrances = document.as_ref().and_then(|d| entry::play(d, &entry::HERO_ENTRANCES));
                let parallax = window
                    .as_ref()
                    .and_then(|w| scroll::bind_parallax(w, "philosophy", scroll::PHILOSOPHY_TARGET));
                let spotlight = document.as_ref().map(pointer::bind_spotlight).unwrap_or_default();

                move || {
                    drop(entrances);
                    drop(parallax);
                    drop(spotlight);
                }
            },
            (),
        );
    }

    // Reveal and tilt, rebound after each content grid renders
    {
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let revealed = document.as_ref().and_then(Reveal::bind);
                let tilted = document.as_ref().map(pointer::bind_tilt).unwrap_or_default();

                move || {
                    drop(revealed);
                    drop(tilted);
                }
            },
            grid_renders.0,
        );
    }

    // Events and internships
    {
        let dispatcher = grid_renders.dispatcher();
        use_effect_with_deps(
            move |_| {
                let rendered = Callback::from(move |category: Category| dispatcher.dispatch(category));
                loader::spawn_loaders(CmsConfig::from_build_env(), rendered);
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <header class="hero">
                <HeroScene scrub_trigger={"showcase"} />
                <div class="hero-content">
                    <h1 class="hero-title">{"Intelligence you can walk into."}</h1>
                    <p class="hero-subtitle">
                        {"We build AI systems and immersive learning experiences for teams that would rather ship than speculate."}
                    </p>
                    <Link<Route> to={Route::Contact} classes="primary-btn">
                        {"Start a project"}
                    </Link<Route>>
                </div>
            </header>

            <section id="showcase" class="showcase">
                <div class="section-header">
                    <h2>{"What we build"}</h2>
                    <p>{"From first prototype to production rollout."}</p>
                </div>
                <div class="card-grid">
                    { for SERVICES.iter().map(|s| html! {
                        <div class="card">
                            <span class="card-icon">{s.icon}</span>
                            <h3>{s.title}</h3>
                            <p>{s.body}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="philosophy" class="philosophy">
                <div class="philosophy-content">
                    <h2>{"Useful before impressive"}</h2>
                    <p>
                        {"Every engagement starts with a workflow someone is tired of doing by hand. We measure success in hours returned, not demos delivered."}
                    </p>
                    <div class="info-grid">
                        <div class="info-card">
                            <h3>{"Small teams"}</h3>
                            <p>{"Engineers talk to your operators directly."}</p>
                        </div>
                        <div class="info-card">
                            <h3>{"Short loops"}</h3>
                            <p>{"Working software every two weeks."}</p>
                        </div>
                        <div class="info-card">
                            <h3>{"Open handover"}</h3>
                            <p>{"You own the code, models and runbooks."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section class="testimonials">
                <div class="section-header">
                    <h2>{"What partners say"}</h2>
                </div>
                <TestimonialCarousel testimonials={testimonials()} />
            </section>

            { content_grid(Category::Events, "Upcoming events", "Workshops, demos and open sessions.") }
            { content_grid(Category::Internships, "Internships", "Learn by shipping alongside our engineers.") }

            <section class="cta-spotlight">
                <h2>{"Have a workflow worth rethinking?"}</h2>
                <p>{"Tell us about it. We reply within two working days."}</p>
                <Link<Route> to={Route::Contact} classes="primary-btn">
                    {"Talk to us"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .landing-page {
                    background: #05070d;
                    color: #e8ecf5;
                    overflow-x: hidden;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 0 2rem;
                }

                .hero-canvas {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    max-width: 760px;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin-bottom: 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #a9b4cc;
                    margin-bottom: 2.5rem;
                }

                .primary-btn {
                    display: inline-block;
                    padding: 0.9rem 2.2rem;
                    border-radius: 999px;
                    background: linear-gradient(45deg, #2194ce, #7eb2ff);
                    color: #fff;
                    text-decoration: none;
                    font-weight: 600;
                }

                .showcase, .philosophy, .testimonials, .data-section, .cta-spotlight {
                    position: relative;
                    z-index: 1;
                    padding: 6rem 2rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .card-grid, .info-grid, .data-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .card, .info-card, .data-card, .testimonial-card {
                    background: rgba(20, 26, 40, 0.8);
                    border: 1px solid rgba(126, 178, 255, 0.15);
                    border-radius: 16px;
                    padding: 2rem;
                }

                .philosophy {
                    max-width: none;
                    background: radial-gradient(circle at 30% 40%, rgba(33, 148, 206, 0.25), transparent 60%) no-repeat;
                    background-size: 200% 100%;
                    background-position: 100% 50%;
                }

                .philosophy-content {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .data-meta {
                    display: flex;
                    gap: 1rem;
                    color: #7eb2ff;
                    font-size: 0.9rem;
                }

                .data-link {
                    color: #7eb2ff;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }

                .tilt-card {
                    transition: transform 0.2s ease;
                    transform-style: preserve-3d;
                    will-change: transform;
                }

                .tilt-card.is-tilting {
                    transition: none;
                }

                .testimonial-track {
                    position: relative;
                    min-height: 220px;
                }

                .testimonial-card {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 0.6s ease;
                }

                .testimonial-card.is-active {
                    opacity: 1;
                }

                .testimonial-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 1.5rem;
                }

                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.3);
                    cursor: pointer;
                }

                .testimonial-dot.is-active {
                    background: #7eb2ff;
                }

                .cta-spotlight {
                    --spotlight-x: 50%;
                    --spotlight-y: 50%;
                    text-align: center;
                    border-radius: 24px;
                    background: radial-gradient(circle at var(--spotlight-x) var(--spotlight-y), rgba(126, 178, 255, 0.08), transparent 50%);
                    transition: background 0.3s ease;
                }

                .cta-spotlight.is-active {
                    background: radial-gradient(circle at var(--spotlight-x) var(--spotlight-y), rgba(126, 178, 255, 0.3), transparent 45%);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grid_render_moves_the_counter() {
        let renders = Rc::new(GridRenders::default());
        let renders = renders.reduce(Category::Events);
        let after_events = renders.0;
        let renders = renders.reduce(Category::Internships);
        assert_eq!((after_events, renders.0), (1, 2));
    }
}
