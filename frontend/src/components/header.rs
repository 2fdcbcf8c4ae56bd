use yew::prelude::*;
use yew_hooks::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_open_form: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let onclick = {
        let on_open_form = props.on_open_form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_form.emit(());
        })
    };

    html! {
        <header class={classes!("site-header", (scroll_y > 8.0).then(|| "scrolled"))}>
            <div class="header-content">
                <a href="/" class="header-logo">
                    <img src="/logo.png" alt="Intakesense Logo" width="256" height="64" />
                </a>
                <button class="header-cta" {onclick}>
                    <span class="wide-only">{"Start Free Trial"}</span>
                    <span class="narrow-only">{"Get Started"}</span>
                </button>
            </div>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        background: rgba(255, 255, 255, 0.9);
                        backdrop-filter: blur(24px);
                        border-bottom: 1px solid rgba(229, 231, 235, 0.5);
                        transition: box-shadow 0.25s;
                    }
                    .site-header.scrolled {
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo img {
                        height: 3rem;
                        width: auto;
                        object-fit: contain;
                    }
                    .header-cta {
                        min-height: 52px;
                        padding: 0.75rem 1.5rem;
                        border: 1px solid rgba(0, 102, 255, 0.2);
                        border-radius: 1rem;
                        background: linear-gradient(to bottom right, #0052cc, #0047b3, #003d99);
                        color: #fff;
                        font-weight: 600;
                        font-size: 1.125rem;
                        cursor: pointer;
                    }
                    .narrow-only { display: none; }
                    @media (max-width: 640px) {
                        .wide-only { display: none; }
                        .narrow-only { display: inline; }
                        .header-content { height: 4rem; }
                    }
                "#}
            </style>
        </header>
    }
}
