use serde_json::{json, Value};
use yew::prelude::*;

use crate::config;

pub fn organization_data(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": "Intakesense",
        "description": "AI-powered recruitment platform with guaranteed placements in 12 days or it's free.",
        "url": site_url,
        "logo": format!("{}/logo.png", site_url),
        "image": format!("{}/logo.png", site_url),
        "sameAs": [
            "https://twitter.com/intakesense",
            "https://linkedin.com/company/intakesense"
        ],
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer service",
            "availableLanguage": ["English"]
        },
        "foundingDate": "2024",
        "knowsAbout": [
            "AI Recruitment",
            "Talent Acquisition",
            "Hiring Technology",
            "Recruitment Automation",
            "Candidate Matching"
        ],
        "areaServed": "Worldwide",
        "serviceType": "Recruitment Technology Platform",
        "slogan": "Guaranteed placements in 12 days or it's free",
        "hasOfferCatalog": {
            "@type": "OfferCatalog",
            "name": "Recruitment Services",
            "itemListElement": [{
                "@type": "Offer",
                "itemOffered": {
                    "@type": "Service",
                    "name": "AI-Powered Recruitment",
                    "description": "Guaranteed candidate placement in 12 days"
                }
            }]
        }
    })
}

pub fn website_data(site_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": "Intakesense",
        "url": site_url,
        "description": "AI-powered recruitment platform with guaranteed placements",
        "inLanguage": "en-US",
        "isAccessibleForFree": true,
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", site_url),
            "query-input": "required name=search_term_string"
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct JsonLdProps {
    pub data: Value,
}

#[function_component(JsonLd)]
pub fn json_ld(props: &JsonLdProps) -> Html {
    html! {
        <script type="application/ld+json">{props.data.to_string()}</script>
    }
}

#[function_component(StructuredData)]
pub fn structured_data() -> Html {
    let site_url = config::get_site_url();
    html! {
        <>
            <JsonLd data={organization_data(site_url)} />
            <JsonLd data={website_data(site_url)} />
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_points_at_site() {
        let data = organization_data("https://intakesense.com");
        assert_eq!(data["@type"], "Organization");
        assert_eq!(data["logo"], "https://intakesense.com/logo.png");
    }

    #[test]
    fn search_action_keeps_template_placeholder() {
        let data = website_data("https://intakesense.com");
        assert_eq!(
            data["potentialAction"]["target"],
            "https://intakesense.com/search?q={search_term_string}"
        );
        assert_eq!(data["isAccessibleForFree"], true);
    }
}
