use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

use motion::listener::Listener;

mod config;
mod content {
    pub mod item;
    pub mod fallback;
    pub mod source;
    pub mod api;
    pub mod cms;
    pub mod render;
    pub mod loader;
}
mod motion {
    pub mod dom;
    pub mod easing;
    pub mod entry;
    pub mod frame;
    pub mod listener;
    pub mod pointer;
    pub mod reveal;
    pub mod scroll;
}
mod scene {
    pub mod camera;
    pub mod geometry;
    pub mod hero;
    pub mod state;
}
mod components {
    pub mod carousel;
}
mod pages {
    pub mod landing;
    pub mod contact;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    contact::Contact,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    // Default link target of event cards
    #[at("/contact.html")]
    LegacyContact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Contact | Route::LegacyContact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().and_then(|window| {
                let watched = window.clone();
                Listener::new(&window, "scroll", move |_| {
                    let scroll_y = watched.scroll_y().unwrap_or(0.0);
                    let hero_height = watched
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(600.0);
                    is_scrolled.set(scroll_y > hero_height * 0.8);
                })
            });

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"BDITS"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#showcase" class="nav-link" onclick={close_menu.clone()}>{"Services"}</a>
                    <a href="/#events" class="nav-link" onclick={close_menu.clone()}>{"Events"}</a>
                    <a href="/#internships" class="nav-link" onclick={close_menu.clone()}>{"Internships"}</a>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-login-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
