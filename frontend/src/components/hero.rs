use yew::prelude::*;

use crate::components::accent::Accent;
use crate::hooks::scroll_reveal::{use_staggered_reveal, RevealOptions};

struct ValueProp {
    title: &'static str,
    desc: &'static str,
    accent: Accent,
}

const VALUE_PROPS: &[ValueProp] = &[
    ValueProp { title: "Zero Risk", desc: "Pay after 90 days", accent: Accent::Emerald },
    ValueProp { title: "Fast", desc: "12-day delivery", accent: Accent::Blue },
    ValueProp { title: "Proven", desc: "89% retention", accent: Accent::Purple },
];

const TRUST: &[(&str, Accent)] = &[
    ("No contracts", Accent::Green),
    ("2-min setup", Accent::Blue),
    ("300+ companies", Accent::Purple),
];

const STATS: &[(&str, &str, Accent)] = &[
    ("1,200+", "Hires", Accent::Green),
    ("12", "Days", Accent::Primary),
    ("₹24Cr", "Saved", Accent::Purple),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_form: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let (props_ref, props_visible) = use_staggered_reveal(VALUE_PROPS.len(), RevealOptions::default().with_delay(200));
    let onclick = {
        let on_open_form = props.on_open_form.clone();
        Callback::from(move |_: MouseEvent| on_open_form.emit(()))
    };

    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-copy">
                    <div class="hero-badge">
                        <span class="dot" style={Accent::Emerald.gradient()}></span>
                        <span>{"₹0 UPFRONT • GUARANTEED RESULTS"}</span>
                    </div>

                    <h1 class="hero-headline">
                        <span>{"Hire the"}</span>
                        <span class="gradient-text">{"Perfect Candidate"}</span>
                        <span>{"in "}<span style={Accent::Primary.ink()}>{"12 Days"}</span></span>
                        <span class="hero-headline-sub">{"or it's completely free"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"India's only recruitment platform with a "}
                        <strong>{"90-day performance guarantee."}</strong>
                    </p>

                    <div class="value-props" ref={props_ref}>
                        { for VALUE_PROPS.iter().zip(props_visible).map(|(item, visible)| html! {
                            <div class={classes!("value-prop", "reveal", visible.then_some("visible"))} style={item.accent.tint()}>
                                <div class="value-title" style={item.accent.ink()}>{item.title}</div>
                                <div class="value-desc">{item.desc}</div>
                            </div>
                        }) }
                    </div>

                    <div class="hero-cta-group">
                        <button class="hero-cta" {onclick}>{"Start Hiring →"}</button>
                        <button class="hero-secondary">{"ROI Calculator"}</button>
                    </div>

                    <div class="hero-trust">
                        { for TRUST.iter().map(|(label, accent)| html! {
                            <span><span class="dot" style={accent.gradient()}></span>{*label}</span>
                        }) }
                    </div>

                    <div class="hero-stats">
                        { for STATS.iter().map(|(value, label, accent)| html! {
                            <div class="hero-stat">
                                <div class="hero-stat-value" style={accent.ink()}>{*value}</div>
                                <div class="hero-stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="hero-illustration">
                    <img
                        src="/illustrations/undraw_artificial-intelligence_43qa.svg"
                        alt="AI-Powered Recruitment"
                        width="280"
                        height="220"
                    />
                </div>
            </div>

            <div class="scroll-indicator">
                <span>{"Scroll to Explore"}</span>
                <div class="scroll-mouse"><div></div></div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: calc(100vh - 80px);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 3rem 1.5rem 4rem;
                        background: linear-gradient(to bottom, #fff, #f9fafb, #fff);
                    }
                    .hero-grid {
                        max-width: 72rem;
                        width: 100%;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    @media (min-width: 1024px) {
                        .hero-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
                    }
                    .hero-copy { display: flex; flex-direction: column; gap: 1.75rem; }
                    .hero-badge {
                        display: inline-flex;
                        align-self: flex-start;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        border: 1px solid #a7f3d0;
                        background: #ecfdf5;
                        color: #047857;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                    }
                    .hero-headline {
                        display: flex;
                        flex-direction: column;
                        font-size: clamp(2rem, 5vw, 3.75rem);
                        font-weight: 900;
                        line-height: 0.95;
                        margin: 0;
                    }
                    .hero-headline-sub {
                        font-size: clamp(1.25rem, 3vw, 2.25rem);
                        font-weight: 700;
                        color: #4b5563;
                        margin-top: 0.5rem;
                    }
                    .hero-subtitle { font-size: 1.25rem; color: #4b5563; max-width: 36rem; }
                    .value-props {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(9rem, 1fr));
                        gap: 0.75rem;
                    }
                    .value-prop { padding: 0.75rem; border-radius: 0.75rem; border: 1px solid; }
                    .value-title { font-size: 0.875rem; font-weight: 700; }
                    .value-desc { font-size: 0.75rem; color: #4b5563; }
                    .hero-cta-group { display: flex; flex-wrap: wrap; gap: 0.75rem; }
                    .hero-cta, .hero-secondary {
                        min-height: 56px;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        font-size: 1.125rem;
                        cursor: pointer;
                    }
                    .hero-cta {
                        flex: 1;
                        border: 1px solid rgba(0, 102, 255, 0.2);
                        background: linear-gradient(to bottom right, #0052cc, #0047b3, #003d99);
                        color: #fff;
                        font-weight: 700;
                        box-shadow: 0 20px 25px -5px rgba(0, 41, 102, 0.3);
                    }
                    .hero-secondary {
                        border: 1px solid rgba(209, 213, 219, 0.6);
                        background: rgba(255, 255, 255, 0.8);
                        color: #374151;
                        font-weight: 600;
                    }
                    .hero-trust { display: flex; gap: 1.5rem; font-size: 0.875rem; color: #6b7280; }
                    .hero-stats {
                        display: flex;
                        gap: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .hero-stat { text-align: center; }
                    .hero-stat-value { font-size: 1.5rem; font-weight: 900; }
                    .hero-stat-label { font-size: 0.875rem; color: #4b5563; }
                    .hero-illustration { display: flex; justify-content: center; align-items: flex-start; }
                    .hero-illustration img { max-width: 200px; height: auto; position: sticky; top: 100px; }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.75rem;
                        color: #9ca3af;
                        text-transform: uppercase;
                    }
                    .scroll-mouse {
                        width: 1.5rem;
                        height: 2.5rem;
                        border: 2px solid #93c5fd;
                        border-radius: 9999px;
                        padding: 0.25rem;
                        box-sizing: border-box;
                    }
                    .scroll-mouse div {
                        width: 0.25rem;
                        height: 0.5rem;
                        margin: 0 auto;
                        border-radius: 9999px;
                        background: #0066ff;
                    }
                    @media (max-width: 640px) {
                        .scroll-indicator { display: none; }
                    }
                "#}
            </style>
        </section>
    }
}
