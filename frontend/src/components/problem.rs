use yew::prelude::*;

use crate::components::accent::Accent;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_staggered_reveal, RevealOptions};

struct ProblemCard {
    stat: &'static str,
    unit: &'static str,
    label: &'static str,
    description: &'static str,
    impact: &'static str,
    accent: Accent,
}

const PROBLEMS: &[ProblemCard] = &[
    ProblemCard {
        stat: "78%",
        unit: "%",
        label: "High Attrition Rate",
        description: "Indian companies face higher employee turnover than global average",
        impact: "Loss of ₹5L+ per employee",
        accent: Accent::Red,
    },
    ProblemCard {
        stat: "65",
        unit: " days",
        label: "Prolonged Hiring",
        description: "Average time to fill critical positions in India",
        impact: "Productivity drops by 40%",
        accent: Accent::Amber,
    },
    ProblemCard {
        stat: "2.5",
        unit: " Lakhs",
        label: "Cost Per Hire",
        description: "Total recruitment expense including hidden costs",
        impact: "Budget overrun by 200%",
        accent: Accent::Purple,
    },
    ProblemCard {
        stat: "64%",
        unit: "%",
        label: "Failed Placements",
        description: "Hires that don't last beyond first 12 months",
        impact: "Repeated hiring cycles",
        accent: Accent::Rose,
    },
];

const IMPACT_METRICS: &[(&str, &str, Accent)] = &[
    ("₹15L+", "Annual loss per unfilled position", Accent::Red),
    ("40%", "Productivity drop during vacancies", Accent::Orange),
    ("85%", "Companies miss growth targets", Accent::Purple),
];

/// Bar fill for a stat: percentages fill to their own value, anything
/// else to a flat 75%.
pub fn progress_percent(stat: &str) -> u32 {
    if stat.contains('%') {
        stat.replace('%', "").trim().parse::<u32>().unwrap_or(75).min(100)
    } else {
        75
    }
}

#[function_component(Problem)]
pub fn problem() -> Html {
    let (header_ref, header_visible) = use_scroll_reveal(RevealOptions::default());
    let (cards_ref, cards_visible) = use_staggered_reveal(PROBLEMS.len(), RevealOptions::default());

    html! {
        <section class="problem-section">
            <div class="section-container">
                <div ref={header_ref} class={classes!("section-header", "reveal", header_visible.then_some("visible"))}>
                    <div class="section-copy">
                        <div class="section-badge" style={Accent::Red.tint()}>
                            <span style={Accent::Red.ink()}>{"CURRENT STATE OF HIRING IN INDIA"}</span>
                        </div>
                        <h2 class="section-title">
                            {"The "}<span class="danger-text">{"Hiring Problem"}</span><br />
                            <span class="muted">{"Facing Indian Companies"}</span>
                        </h2>
                        <p class="section-lead">
                            {"Traditional recruitment is broken. High costs, long delays, and poor retention are holding businesses back."}
                        </p>
                    </div>
                    <div class="section-illustration">
                        <img
                            src="/illustrations/undraw_time-management_4ss6.svg"
                            alt="Time Management Crisis"
                            width="400"
                            height="300"
                            loading="lazy"
                        />
                    </div>
                </div>

                <div class="problem-grid" ref={cards_ref}>
                    { for PROBLEMS.iter().zip(cards_visible).map(|(problem, visible)| html! {
                        <div class={classes!("problem-card", "reveal", visible.then_some("visible"))}>
                            <div class="card-icon" style={problem.accent.gradient()}></div>
                            <div class="problem-stat">
                                <span class="problem-stat-value">{problem.stat.trim_end_matches('%')}</span>
                                <span class="problem-stat-unit">{problem.unit}</span>
                            </div>
                            <div class="progress-track">
                                <div
                                    class="progress-fill"
                                    style={format!("width: {}%; {}", progress_percent(problem.stat), problem.accent.gradient())}
                                ></div>
                            </div>
                            <h3>{problem.label}</h3>
                            <p>{problem.description}</p>
                            <div class="problem-impact">{problem.impact}</div>
                        </div>
                    }) }
                </div>

                <div class="inaction">
                    <h3>{"The Cost of "}<span class="danger-text">{"Inaction"}</span></h3>
                    <p class="section-lead">
                        {"While you struggle with traditional hiring, competitors using AI-powered recruitment are scaling faster and hiring better talent."}
                    </p>
                    <div class="impact-metrics">
                        { for IMPACT_METRICS.iter().map(|(value, label, accent)| html! {
                            <div class="impact-metric">
                                <div class="impact-value" style={accent.ink()}>{*value}</div>
                                <div class="impact-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                    <div class="transition-divider">
                        <span>{"BUT THERE'S A BETTER WAY"}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .problem-section { padding: 6rem 1.5rem; }
                    .problem-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                        gap: 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .problem-card {
                        position: relative;
                        padding: 2rem;
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 1.5rem;
                    }
                    .problem-stat { display: flex; align-items: baseline; gap: 0.25rem; }
                    .problem-stat-value { font-size: 2.5rem; font-weight: 900; color: #111827; }
                    .problem-stat-unit { font-size: 1.5rem; font-weight: 700; color: #4b5563; }
                    .progress-track {
                        height: 0.375rem;
                        background: #e5e7eb;
                        border-radius: 9999px;
                        margin: 0.5rem 0 1rem;
                    }
                    .progress-fill { height: 100%; border-radius: 9999px; }
                    .problem-card h3 { font-size: 1.25rem; font-weight: 700; color: #1f2937; }
                    .problem-card p { color: #4b5563; line-height: 1.6; }
                    .problem-impact {
                        padding-top: 0.75rem;
                        border-top: 1px solid #f3f4f6;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: #dc2626;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .inaction { max-width: 56rem; margin: 6rem auto 0; text-align: center; }
                    .inaction h3 { font-size: 2.25rem; font-weight: 700; color: #1f2937; }
                    .impact-metrics {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 2rem;
                        padding: 3rem 0;
                    }
                    .impact-value { font-size: 1.875rem; font-weight: 900; }
                    .impact-label { font-size: 0.875rem; color: #4b5563; }
                    .transition-divider {
                        position: relative;
                        padding: 2rem 0;
                        border-top: 1px solid #d1d5db;
                    }
                    .transition-divider span {
                        position: relative;
                        top: -3.25rem;
                        padding: 0.75rem 1.5rem;
                        background: #fff;
                        border: 1px solid #d1d5db;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #374151;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_stats_fill_to_their_value() {
        assert_eq!(progress_percent("78%"), 78);
        assert_eq!(progress_percent("64%"), 64);
    }

    #[test]
    fn other_stats_fill_to_three_quarters() {
        assert_eq!(progress_percent("65"), 75);
        assert_eq!(progress_percent("2.5"), 75);
        assert_eq!(progress_percent("lots%"), 75);
    }
}
