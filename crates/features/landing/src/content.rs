//! Fixed copy of the landing page.

use sme_ui::StyleToken;
use strum_macros::{AsRefStr, EnumIter};

pub const TAGLINE: &str = "AI-powered supply chain risk assessment for SME suppliers. Identify \
                           risks, validate compliance, and secure your supply chain.";

pub const GET_STARTED: &str = "Get Started";
pub const LEARN_MORE: &str = "Learn More";

/// One card of the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Risk Assessment",
        summary: "Comprehensive AI-driven analysis of supplier risk factors",
        detail: "Automated evaluation of compliance status, and operational risks across your \
                 supply chain.",
    },
    Feature {
        title: "Evidence Collection",
        summary: "Automated data gathering from multiple sources",
        detail: "Collects and analyzes data from public records, regulatory databases, and \
                 supplier documentation.",
    },
    Feature {
        title: "Detailed Reports",
        summary: "Actionable insights and recommendations",
        detail: "Generate comprehensive reports with risk scores, findings, and recommended \
                 follow-up actions.",
    },
];

/// Entries of the status legend, lowest risk first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    #[must_use]
    pub const fn token(self) -> StyleToken {
        match self {
            Self::Low => StyleToken::Success,
            Self::Medium => StyleToken::Warning,
            Self::High => StyleToken::Error,
        }
    }
}
