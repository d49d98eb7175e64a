use crate::content::{FEATURES, Feature, GET_STARTED, LEARN_MORE, RiskLevel, TAGLINE};
use dioxus::prelude::*;
use sme_kernel::domain::constants::PRODUCT_NAME;
use sme_ui::prelude::*;
use strum::IntoEnumIterator;

/// The whole landing view: hero, feature grid and risk legend.
#[component]
pub fn LandingPage() -> Element {
    rsx! {
        main { class: "min-h-screen bg-neutral-50",
            div { class: "container mx-auto px-4 py-16",
                Hero {}
                FeatureGrid {}
                RiskLegend {}
            }
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { class: "text-center mb-16",
            h1 { class: "text-4xl md:text-5xl font-bold text-neutral-900 mb-4", "{PRODUCT_NAME}" }
            p { class: "text-lg md:text-xl text-neutral-600 max-w-2xl mx-auto mb-8", "{TAGLINE}" }
            div { class: "flex gap-4 justify-center flex-col sm:flex-row",
                Button {
                    size: ButtonSize::Lg,
                    class: cn([StyleToken::Primary.bg(), "hover:bg-primary-dark"]),
                    "{GET_STARTED}"
                }
                Button { size: ButtonSize::Lg, variant: ButtonVariant::Outline, "{LEARN_MORE}" }
            }
        }
    }
}

#[component]
fn FeatureGrid() -> Element {
    rsx! {
        div { class: "grid md:grid-cols-3 gap-6 max-w-5xl mx-auto",
            for feature in FEATURES {
                FeatureCard { feature }
            }
        }
    }
}

#[component]
fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        Card { class: "border-neutral-200",
            CardHeader {
                CardTitle { class: StyleToken::Primary.text(), "{feature.title}" }
                CardDescription { "{feature.summary}" }
            }
            CardContent {
                p { class: "text-neutral-600 text-sm", "{feature.detail}" }
            }
        }
    }
}

#[component]
fn RiskLegend() -> Element {
    rsx! {
        div { class: "mt-16 text-center",
            div { class: "inline-flex gap-6 flex-wrap justify-center",
                for level in RiskLevel::iter() {
                    LegendEntry { level }
                }
            }
        }
    }
}

#[component]
fn LegendEntry(level: RiskLevel) -> Element {
    let swatch = cn(["w-3 h-3 rounded-full", level.token().bg()]);
    let label = level.label();

    rsx! {
        span { class: "inline-flex items-center gap-2", "data-risk": level.as_ref(),
            span { class: "{swatch}" }
            span { class: "text-sm text-neutral-600", "{label}" }
        }
    }
}

/// Renders [`LandingPage`] to an HTML fragment.
#[must_use]
pub fn render_page() -> String {
    let mut dom = VirtualDom::new(LandingPage);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
