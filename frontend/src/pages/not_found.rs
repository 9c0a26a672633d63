use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <section>
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home} classes="primary-btn">
                    {"Back to home"}
                </Link<Route>>
            </section>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: #05070d;
                    color: #e8ecf5;
                }
                "#}
            </style>
        </div>
    }
}
