use yew::prelude::*;

use crate::components::accent::Accent;
use crate::hooks::scroll_reveal::{use_scroll_reveal, use_staggered_reveal, RevealOptions};

struct BusinessImpact {
    roi: &'static str,
    cost: &'static str,
    speed: &'static str,
}

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    description: &'static str,
    accent: Accent,
    outcomes: &'static [&'static str],
    limitations: &'static [&'static str],
    business_impact: Option<BusinessImpact>,
    cta: &'static str,
    popular: bool,
    badge: &'static str,
    savings: &'static str,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Trial",
        price: "₹0",
        period: "for first hire",
        description: "Test our guarantee with zero risk",
        accent: Accent::Green,
        outcomes: &[
            "Fill 1 position completely free",
            "Experience our 12-day process",
            "Meet your dedicated recruiter",
            "90-day retention guarantee",
        ],
        limitations: &["One active position only", "Standard candidate pool", "Email + chat support"],
        business_impact: None,
        cta: "Start Free Trial",
        popular: false,
        badge: "100% FREE",
        savings: "Save ₹1-3L vs traditional agencies",
    },
    Plan {
        name: "Growth",
        price: "₹80K",
        period: "per successful hire",
        description: "Perfect for growing SMEs and mid-sized companies",
        accent: Accent::Primary,
        outcomes: &[
            "Fill unlimited positions",
            "Access premium talent pool",
            "Dedicated account manager",
            "2-year replacement guarantee",
            "Salary negotiation included",
        ],
        limitations: &[],
        business_impact: Some(BusinessImpact {
            roi: "150% average ROI in Year 1",
            cost: "60% less than traditional agencies",
            speed: "5x faster than internal hiring",
        }),
        cta: "Start Hiring Now",
        popular: true,
        badge: "BEST VALUE",
        savings: "₹0 if we don't deliver",
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "pricing",
        description: "Complete talent acquisition partnership",
        accent: Accent::Purple,
        outcomes: &[
            "Everything in Growth plan",
            "C-level and leadership search",
            "Custom talent pipelines",
            "Dedicated recruitment team",
            "Advanced analytics & reporting",
        ],
        limitations: &[],
        business_impact: Some(BusinessImpact {
            roi: "Guaranteed positive ROI",
            cost: "Predictable monthly investment",
            speed: "Same-week candidate delivery",
        }),
        cta: "Book Strategy Call",
        popular: false,
        badge: "WHITE GLOVE",
        savings: "Volume discounts available",
    },
];

const HIDDEN_COSTS: &[&str] = &[
    "₹15L+ revenue loss per unfilled position",
    "40% productivity drop in affected teams",
    "6-8 months average hiring time",
    "64% of hires fail within 18 months",
];

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub on_open_form: Callback<()>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let (header_ref, header_visible) = use_scroll_reveal(RevealOptions::default());
    let (plans_ref, plans_visible) = use_staggered_reveal(PLANS.len(), RevealOptions::default().with_delay(100));

    let cta = {
        let on_open_form = props.on_open_form.clone();
        Callback::from(move |_: MouseEvent| on_open_form.emit(()))
    };

    html! {
        <section class="pricing-section">
            <div class="section-container">
                <div ref={header_ref} class={classes!("pricing-header", "reveal", header_visible.then_some("visible"))}>
                    <div class="section-badge" style={Accent::Primary.tint()}>
                        <span style={Accent::Primary.ink()}>{"INDIA'S MOST AFFORDABLE RECRUITMENT SOLUTION"}</span>
                    </div>
                    <h2 class="section-title">
                        {"Stop Wasting Money on"}
                        <span class="danger-text block">{"Failed Hires"}</span>
                    </h2>
                    <p class="section-lead">
                        {"Traditional agencies charge ₹1-3L upfront, then disappear."}
                        <strong class="block">{"We only get paid when your hire completes 90 days."}</strong>
                    </p>
                    <div class="hidden-costs">
                        <h3>{"The Hidden Cost of Empty Desks:"}</h3>
                        <div class="hidden-costs-grid">
                            { for HIDDEN_COSTS.iter().map(|cost| html! { <div>{"• "}{*cost}</div> }) }
                        </div>
                    </div>
                    <div class="risk-reversal">
                        <p class="risk-title">{"Zero Risk Guarantee"}</p>
                        <p>{"If we don't deliver, you don't pay. Period."}</p>
                    </div>
                    <p class="plan-question">{"Which plan matches your hiring volume?"}</p>
                    <p class="plan-note">{"All plans include our 90-day retention guarantee"}</p>
                    <img
                        src="/illustrations/undraw_growth-analytics_bhy7.svg"
                        alt="Growth Analytics"
                        width="400"
                        height="300"
                        loading="lazy"
                    />
                </div>

                <div class="plans-grid" ref={plans_ref}>
                    { for PLANS.iter().zip(plans_visible).map(|(plan, visible)| html! {
                        <div class={classes!("plan", "reveal", plan.popular.then_some("popular"), visible.then_some("visible"))}>
                            <div class="plan-badge">{plan.badge}</div>
                            <div class="card-icon" style={plan.accent.gradient()}></div>
                            <h3>{plan.name}</h3>
                            <p class="plan-description">{plan.description}</p>
                            <div class="plan-price">
                                <span class="plan-amount">{plan.price}</span>
                                <span class="plan-period">{plan.period}</span>
                            </div>
                            <div class="plan-savings">{plan.savings}</div>
                            if let Some(impact) = &plan.business_impact {
                                <dl class="plan-impact">
                                    <dt>{"ROI:"}</dt><dd>{impact.roi}</dd>
                                    <dt>{"Cost vs competitors:"}</dt><dd>{impact.cost}</dd>
                                    <dt>{"Speed:"}</dt><dd>{impact.speed}</dd>
                                </dl>
                            }
                            <h4>{"What You Get:"}</h4>
                            <ul class="plan-outcomes">
                                { for plan.outcomes.iter().map(|outcome| html! { <li>{"✓ "}{*outcome}</li> }) }
                            </ul>
                            if !plan.limitations.is_empty() {
                                <>
                                    <h4>{"Limitations:"}</h4>
                                    <ul class="plan-limitations">
                                        { for plan.limitations.iter().map(|limit| html! { <li>{*limit}</li> }) }
                                    </ul>
                                </>
                            }
                            <button
                                class="plan-cta"
                                style={if plan.popular { Accent::Primary.gradient() } else { plan.accent.gradient() }}
                                onclick={cta.clone()}
                            >
                                {plan.cta}
                            </button>
                        </div>
                    }) }
                </div>

                <div class="guarantee">
                    <div class="guarantee-badge">{"✓ PERFORMANCE GUARANTEE"}</div>
                    <h3>{"We're So Confident, We'll Work For Free"}</h3>
                    <p>
                        {"If we don't fill your position within 12 days, or if your hire leaves within 90 days,"}
                        <span class="highlight">{" we refund every rupee."}</span>
                    </p>
                    <div class="guarantee-columns">
                        <ul>
                            <li class="column-title">{"What We Guarantee:"}</li>
                            <li>{"✓ Position filled within 12 days"}</li>
                            <li>{"✓ Hire stays minimum 90 days"}</li>
                            <li>{"✓ Free replacement if they leave"}</li>
                            <li>{"✓ Full refund if we fail"}</li>
                        </ul>
                        <ul>
                            <li class="column-title">{"Your Investment:"}</li>
                            <li>{"✓ ₹0 upfront costs"}</li>
                            <li>{"✓ No retainer fees"}</li>
                            <li>{"✓ No hidden charges"}</li>
                            <li>{"✓ Pay only for results"}</li>
                        </ul>
                    </div>
                </div>

                <div class="consultation">
                    <h3>{"Still Not Sure? Let's Talk."}</h3>
                    <p>
                        {"Book a 15-minute call to discuss your specific hiring challenges."}
                        <strong class="block">{"No sales pitch, just honest advice."}</strong>
                    </p>
                    <button class="plan-cta" style={Accent::Primary.gradient()} onclick={cta.clone()}>
                        {"Book Free Consultation"}
                    </button>
                    <p class="plan-note">{"15-minute consultation • Zero commitment • Actionable insights guaranteed"}</p>
                </div>
            </div>
            <style>
                {r#"
                    .pricing-section { padding: 8rem 1.5rem; background: linear-gradient(to bottom, #f9fafb, #fff); }
                    .block { display: block; margin-top: 0.5rem; }
                    .pricing-header { max-width: 56rem; margin: 0 auto 5rem; text-align: center; }
                    .pricing-header img { max-width: 28rem; width: 100%; height: auto; }
                    .hidden-costs {
                        background: #fef2f2;
                        border: 1px solid #fecaca;
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        margin: 2rem 0;
                        color: #b91c1c;
                    }
                    .hidden-costs h3 { color: #991b1b; font-size: 1.125rem; margin-top: 0; }
                    .hidden-costs-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1rem; }
                    .risk-reversal {
                        padding: 1rem;
                        background: #eff6ff;
                        border: 1px solid #bfdbfe;
                        border-radius: 0.75rem;
                        color: #2563eb;
                    }
                    .risk-title { font-weight: 600; color: #1e40af; margin: 0; }
                    .plan-question { font-size: 1.125rem; font-weight: 500; color: #374151; }
                    .plan-note { font-size: 0.875rem; color: #6b7280; }
                    .plans-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .plan {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        padding: 2.5rem;
                        background: #fff;
                        border: 2px solid #e5e7eb;
                        border-radius: 1.5rem;
                    }
                    .plan.popular {
                        border-color: #bfdbfe;
                        box-shadow: 0 25px 50px -12px rgba(0, 102, 255, 0.25);
                    }
                    @media (min-width: 1024px) {
                        .plan.popular.visible { transform: scale(1.05); }
                    }
                    .plan-badge {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: #1f2937;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                    }
                    .plan.popular .plan-badge { background: linear-gradient(to right, #0052cc, #ea580c); }
                    .plan h3 { font-size: 1.5rem; font-weight: 700; color: #111827; margin-bottom: 0.5rem; }
                    .plan-description { color: #4b5563; }
                    .plan-price { display: flex; align-items: baseline; gap: 0.5rem; }
                    .plan-amount { font-size: 3rem; font-weight: 900; color: #111827; }
                    .plan-period { font-size: 1.125rem; color: #4b5563; }
                    .plan-savings {
                        background: #f0fdf4;
                        border: 1px solid #bbf7d0;
                        border-radius: 0.5rem;
                        padding: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #15803d;
                    }
                    .plan-impact { display: grid; grid-template-columns: auto 1fr; gap: 0.5rem; font-size: 0.875rem; }
                    .plan-impact dt { color: #4b5563; }
                    .plan-impact dd { margin: 0; text-align: right; font-weight: 600; color: #0052cc; }
                    .plan-outcomes, .plan-limitations { list-style: none; padding: 0; display: grid; gap: 0.75rem; flex-grow: 1; }
                    .plan-limitations { color: #6b7280; font-size: 0.875rem; }
                    .plan-cta {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 1rem;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 700;
                        cursor: pointer;
                    }
                    .guarantee {
                        max-width: 56rem;
                        margin: 6rem auto 4rem;
                        padding: 3rem;
                        border-radius: 1rem;
                        background: linear-gradient(to right, #111827, #1f2937);
                        color: #fff;
                        text-align: center;
                    }
                    .guarantee-badge {
                        display: inline-block;
                        padding: 0.75rem 1.5rem;
                        border-radius: 9999px;
                        background: #22c55e;
                        font-weight: 700;
                    }
                    .guarantee h3 { font-size: 2.25rem; font-weight: 900; }
                    .guarantee p { font-size: 1.25rem; color: #e5e7eb; }
                    .guarantee .highlight { color: #facc15; font-weight: 600; }
                    .guarantee-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 1.5rem;
                        text-align: left;
                    }
                    .guarantee-columns ul { list-style: none; padding: 0; display: grid; gap: 0.5rem; font-size: 0.875rem; color: #d1d5db; }
                    .guarantee-columns .column-title { font-weight: 600; color: #4ade80; }
                    .consultation { max-width: 48rem; margin: 0 auto; text-align: center; }
                    .consultation h3 { font-size: 1.875rem; font-weight: 700; color: #111827; }
                    .consultation .plan-cta { width: auto; padding: 1rem 2rem; }
                "#}
            </style>
        </section>
    }
}
