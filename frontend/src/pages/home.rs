use yew::prelude::*;

use crate::components::{
    footer::Footer,
    header::Header,
    hero::Hero,
    pricing::Pricing,
    problem::Problem,
    seo::StructuredData,
    solution::Solution,
};
use crate::hooks::form_modal::use_form_modal;
use crate::wizard::view::FormWizard;

/// Landing page. While the registration form is open it replaces the
/// whole page.
#[function_component(Home)]
pub fn home() -> Html {
    let modal = use_form_modal();

    if modal.is_open {
        return html! {
            <FormWizard on_close={modal.close.clone()} />
        };
    }

    html! {
        <div class="home-page">
            <StructuredData />
            <Header on_open_form={modal.open.clone()} />
            <main>
                <Hero on_open_form={modal.open.clone()} />
                <Problem />
                <Solution />
                <Pricing on_open_form={modal.open.clone()} />
            </main>
            <Footer />
            <style>
                {r#"
                    .home-page {
                        min-height: 100vh;
                        background: #fff;
                        color: #111827;
                        font-family: 'Inter', system-ui, sans-serif;
                        overflow-x: hidden;
                    }
                    .section-container { max-width: 80rem; margin: 0 auto; }
                    .section-header {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                        margin-bottom: 5rem;
                    }
                    .section-copy { display: flex; flex-direction: column; gap: 1.5rem; }
                    .section-badge {
                        display: inline-flex;
                        align-self: flex-start;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.05em;
                    }
                    .pricing-header .section-badge { align-self: center; }
                    .section-title {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 900;
                        line-height: 1.1;
                        margin: 0;
                    }
                    .section-lead { font-size: 1.25rem; color: #4b5563; line-height: 1.7; }
                    .section-illustration { display: flex; justify-content: center; }
                    .section-illustration img { max-width: 100%; height: auto; }
                    .muted { color: #374151; }
                    .gradient-text {
                        background: linear-gradient(to right, #0052cc, #f97316);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .danger-text { color: #dc2626; }
                    .card-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1rem;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }
                    .card-icon.large { width: 5rem; height: 5rem; border-radius: 1.5rem; }
                    .dot {
                        display: inline-block;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        margin-right: 0.75rem;
                        vertical-align: middle;
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(2rem);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }
                    .reveal.visible { opacity: 1; transform: none; }
                    @media (prefers-reduced-motion: reduce) {
                        .reveal { transition: none; }
                    }
                "#}
            </style>
        </div>
    }
}
