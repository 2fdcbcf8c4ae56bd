use yew::prelude::*;

use crate::components::accent::Accent;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_staggered_reveal, RevealOptions};

struct Metric {
    label: &'static str,
    value: &'static str,
    desc: &'static str,
}

struct Feature {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    accent: Accent,
    metrics: [Metric; 2],
    highlights: [&'static str; 3],
    process_steps: [&'static str; 3],
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "AI + Human Intelligence",
        subtitle: "The Perfect Match",
        description: "Our proprietary AI scans 5M+ Indian profiles while expert recruiters add the human touch for cultural fit and soft skills assessment.",
        accent: Accent::Primary,
        metrics: [
            Metric { label: "Time Reduction", value: "75%", desc: "Faster hiring process" },
            Metric { label: "Match Accuracy", value: "94%", desc: "Perfect role-candidate fit" },
        ],
        highlights: ["5M+ candidate database", "Cultural fit assessment", "Soft skills evaluation"],
        process_steps: ["AI Screening", "Human Verification", "Cultural Assessment"],
    },
    Feature {
        title: "Full Responsibility Guarantee",
        subtitle: "We Own The Outcome",
        description: "Unlike agencies that disappear after payment, we monitor every placement for 2 years. If they leave, we replace them free. Your success is our responsibility.",
        accent: Accent::Emerald,
        metrics: [
            Metric { label: "Retention Rate", value: "89%", desc: "Hires stay 2+ years" },
            Metric { label: "Replacement Cost", value: "₹0", desc: "Free replacements" },
        ],
        highlights: ["2-year replacement guarantee", "Zero replacement fees", "Performance monitoring"],
        process_steps: ["Placement", "Performance Tracking", "Free Replacement"],
    },
    Feature {
        title: "Precision Targeting",
        subtitle: "Find Hidden Gems",
        description: "Access passive candidates from top Indian companies who aren't actively looking but are open to the right opportunity.",
        accent: Accent::Orange,
        metrics: [
            Metric { label: "Passive Candidates", value: "70%", desc: "Not actively looking" },
            Metric { label: "Top-tier Companies", value: "250+", desc: "Source companies" },
        ],
        highlights: ["Passive candidate network", "Top company sourcing", "Confidential approach"],
        process_steps: ["Target Identification", "Discreet Outreach", "Opportunity Presentation"],
    },
    Feature {
        title: "Lightning Speed",
        subtitle: "Faster Than Ever",
        description: "Our streamlined process and pre-vetted talent pools mean most positions are filled within 12 days, not months.",
        accent: Accent::Purple,
        metrics: [
            Metric { label: "Average Time", value: "12", desc: "Days to placement" },
            Metric { label: "First Candidates", value: "48hr", desc: "Initial shortlist ready" },
        ],
        highlights: ["Pre-vetted talent pools", "Rapid response system", "Dedicated coordinators"],
        process_steps: ["Instant Search", "Quick Screening", "Fast Placement"],
    },
];

struct Benefit {
    title: &'static str,
    value: &'static str,
    desc: &'static str,
    accent: Accent,
}

const BENEFITS: &[Benefit] = &[
    Benefit { title: "Cost Reduction", value: "60%", desc: "Lower hiring costs vs traditional agencies", accent: Accent::Emerald },
    Benefit { title: "Speed Boost", value: "5x", desc: "Faster than traditional hiring", accent: Accent::Blue },
    Benefit { title: "Retention", value: "89%", desc: "Hires stay 2+ years", accent: Accent::Indigo },
    Benefit { title: "Coverage", value: "28", desc: "Indian states covered", accent: Accent::Teal },
    Benefit { title: "Growth", value: "3x", desc: "Scale your team faster", accent: Accent::Orange },
];

#[derive(Properties, PartialEq)]
struct FeatureRowProps {
    index: usize,
}

#[function_component(FeatureRow)]
fn feature_row(props: &FeatureRowProps) -> Html {
    let (row_ref, visible) = use_scroll_reveal(RevealOptions::default());
    let Some(feature) = FEATURES.get(props.index) else {
        return html! {};
    };
    let last_step = feature.process_steps.len() - 1;

    html! {
        <div
            ref={row_ref}
            class={classes!(
                "feature-row",
                "reveal",
                (props.index % 2 == 1).then_some("reversed"),
                visible.then_some("visible")
            )}
        >
            <div class="feature-copy">
                <div class="card-icon large" style={feature.accent.gradient()}></div>
                <div class="feature-subtitle">{feature.subtitle}</div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>

                <h4>{"Key Features:"}</h4>
                <ul class="feature-highlights">
                    { for feature.highlights.iter().map(|highlight| html! {
                        <li><span class="dot" style={feature.accent.gradient()}></span>{*highlight}</li>
                    }) }
                </ul>

                <h4>{"How It Works:"}</h4>
                <ol class="process-steps">
                    { for feature.process_steps.iter().enumerate().map(|(idx, step)| html! {
                        <li>
                            <span class="step-number" style={feature.accent.gradient()}>{idx + 1}</span>
                            <span>{*step}</span>
                            if idx < last_step {
                                <span class="step-arrow">{"→"}</span>
                            }
                        </li>
                    }) }
                </ol>
            </div>

            <div class="metrics-card">
                <h4>{"Performance Metrics"}</h4>
                <p class="metrics-caption">{"Real results from our platform"}</p>
                <div class="metrics-grid">
                    { for feature.metrics.iter().map(|metric| html! {
                        <div class="metric">
                            <div class="metric-value">{metric.value}</div>
                            <div class="metric-label">{metric.label}</div>
                            <div class="metric-desc">{metric.desc}</div>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Solution)]
pub fn solution() -> Html {
    let (benefits_ref, benefits_visible) = use_staggered_reveal(BENEFITS.len(), RevealOptions::default());

    html! {
        <section class="solution-section">
            <div class="section-container">
                <div class="section-header">
                    <div class="section-copy">
                        <div class="section-badge" style={Accent::Green.tint()}>
                            <span style={Accent::Green.ink()}>{"THE INTAKESENSE ADVANTAGE"}</span>
                        </div>
                        <h2 class="section-title">
                            {"Our "}<span class="gradient-text">{"Solution"}</span><br />
                            <span class="muted">{"AI-Powered Recruitment"}</span>
                        </h2>
                        <p class="section-lead">
                            {"Advanced AI meets human expertise to deliver faster, more accurate hiring with guaranteed results."}
                        </p>
                    </div>
                    <div class="section-illustration">
                        <img
                            src="/illustrations/undraw_solution-mindset_pit7.svg"
                            alt="Smart Solutions"
                            width="400"
                            height="300"
                            loading="lazy"
                        />
                    </div>
                </div>

                <div class="feature-rows">
                    { for (0..FEATURES.len()).map(|index| html! { <FeatureRow {index} /> }) }
                </div>

                <div class="benefits">
                    <h3>{"Proven Results"}</h3>
                    <p class="section-lead">{"Real performance metrics from clients using our platform."}</p>
                    <div class="benefits-grid" ref={benefits_ref}>
                        { for BENEFITS.iter().zip(benefits_visible).map(|(benefit, visible)| html! {
                            <div class={classes!("benefit", "reveal", visible.then_some("visible"))}>
                                <div class="card-icon" style={benefit.accent.gradient()}></div>
                                <div class="benefit-value">{benefit.value}</div>
                                <div class="benefit-title">{benefit.title}</div>
                                <div class="benefit-desc">{benefit.desc}</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="solution-cta">
                    <h3>{"Start Hiring Smarter Today"}</h3>
                    <p>{"Join 300+ companies using AI-powered recruitment. Guaranteed results or it's free."}</p>
                    <div class="solution-cta-trust">
                        <span>{"✓ 15-day free trial"}</span>
                        <span>{"✓ No setup fees"}</span>
                        <span>{"✓ Cancel anytime"}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .solution-section { padding: 6rem 1.5rem; }
                    .feature-rows { display: flex; flex-direction: column; gap: 5rem; margin-bottom: 6rem; }
                    .feature-row {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .feature-row.reversed .feature-copy { order: 2; }
                    .feature-subtitle {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #6b7280;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .feature-copy h3 { font-size: 1.875rem; font-weight: 700; color: #111827; }
                    .feature-copy p { color: #4b5563; line-height: 1.7; max-width: 36rem; }
                    .feature-copy h4 { font-weight: 600; color: #1f2937; }
                    .feature-highlights { list-style: none; padding: 0; display: grid; gap: 0.75rem; }
                    .process-steps { list-style: none; padding: 0; display: flex; flex-wrap: wrap; gap: 1rem; }
                    .process-steps li { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; color: #4b5563; }
                    .step-number {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        color: #fff;
                        font-weight: 700;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .step-arrow { color: #9ca3af; }
                    .metrics-card {
                        padding: 2.5rem;
                        background: #fff;
                        border: 2px solid #e5e7eb;
                        border-radius: 1.5rem;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        text-align: center;
                    }
                    .metrics-caption { font-size: 0.875rem; color: #6b7280; }
                    .metrics-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-top: 2rem; }
                    .metric-value { font-size: 2.25rem; font-weight: 900; color: #111827; }
                    .metric-label { font-size: 0.875rem; font-weight: 600; color: #374151; }
                    .metric-desc { font-size: 0.75rem; color: #6b7280; }
                    .benefits { text-align: center; }
                    .benefits h3 { font-size: 2.25rem; font-weight: 700; color: #111827; }
                    .benefits-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    .benefit {
                        padding: 2rem;
                        background: #fff;
                        border: 2px solid #e5e7eb;
                        border-radius: 1.5rem;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .benefit-value { font-size: 2.25rem; font-weight: 900; color: #111827; }
                    .benefit-title { font-size: 1.125rem; font-weight: 700; color: #1f2937; }
                    .benefit-desc { font-size: 0.875rem; color: #4b5563; }
                    .solution-cta {
                        max-width: 64rem;
                        margin: 4rem auto 0;
                        padding: 4rem 2rem;
                        border-radius: 1.5rem;
                        background: linear-gradient(to right, #0052cc, #f97316);
                        color: #fff;
                        text-align: center;
                    }
                    .solution-cta h3 { font-size: 2.5rem; font-weight: 900; margin: 0 0 1rem; }
                    .solution-cta-trust {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 2rem;
                        padding-top: 2rem;
                        font-size: 0.875rem;
                        opacity: 0.8;
                    }
                "#}
            </style>
        </section>
    }
}
