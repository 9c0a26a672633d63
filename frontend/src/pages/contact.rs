use yew::prelude::*;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="contact-panel">
                <h1>{"Get in touch"}</h1>
                <p>{"Projects, partnerships, internships or a workshop for your team: write to us and a real person answers."}</p>
                <div class="contact-options">
                    <a class="primary-btn" href="mailto:hr@bdits.in">{"hr@bdits.in"}</a>
                    <p class="contact-note">{"Based in Vijayawada, working with teams everywhere."}</p>
                </div>
            </section>
            <style>
                {r#"
                .contact-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #05070d;
                    color: #e8ecf5;
                    padding: 6rem 2rem;
                }

                .contact-panel {
                    max-width: 640px;
                    text-align: center;
                }

                .contact-options {
                    margin-top: 2.5rem;
                }

                .contact-note {
                    color: #a9b4cc;
                    margin-top: 1.5rem;
                }
                "#}
            </style>
        </div>
    }
}
