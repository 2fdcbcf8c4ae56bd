use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src="/logo.png" alt="Intakesense" width="40" height="40" />
                <div>
                    <span class="footer-name gradient-text">{"Intakesense"}</span>
                    <span class="footer-tagline">{"AI RECRUITMENT"}</span>
                </div>
            </div>
            <p class="footer-pitch">{"AI-powered recruitment platform with guaranteed results"}</p>
            <p class="footer-copyright">{format!("© {} Intakesense. All rights reserved.", year)}</p>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 1.5rem;
                        border-top: 1px solid #e5e7eb;
                        background: #fff;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
                    .footer-brand img { object-fit: contain; }
                    .footer-name { display: block; font-size: 1.5rem; font-weight: 700; }
                    .footer-tagline { display: block; font-size: 0.75rem; color: #6b7280; letter-spacing: 0.05em; }
                    .footer-pitch { color: #4b5563; text-align: center; max-width: 28rem; margin: 0; }
                    .footer-copyright { font-size: 0.875rem; color: #6b7280; margin: 0; }
                "#}
            </style>
        </footer>
    }
}
