use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Named colors of the design system.
///
/// Each token resolves to utility classes (`bg-success`, `text-primary`, ...)
/// and to a CSS custom property (`--color-success`) that a theme stylesheet
/// binds to a concrete color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum StyleToken {
    Primary,
    PrimaryDark,
    Success,
    Warning,
    Error,
}

impl StyleToken {
    #[must_use]
    pub const fn bg(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary",
            Self::PrimaryDark => "bg-primary-dark",
            Self::Success => "bg-success",
            Self::Warning => "bg-warning",
            Self::Error => "bg-error",
        }
    }

    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Primary => "text-primary",
            Self::PrimaryDark => "text-primary-dark",
            Self::Success => "text-success",
            Self::Warning => "text-warning",
            Self::Error => "text-error",
        }
    }

    #[must_use]
    pub const fn border(self) -> &'static str {
        match self {
            Self::Primary => "border-primary",
            Self::PrimaryDark => "border-primary-dark",
            Self::Success => "border-success",
            Self::Warning => "border-warning",
            Self::Error => "border-error",
        }
    }

    /// CSS custom property holding the token's color.
    #[must_use]
    pub const fn css_var(self) -> &'static str {
        match self {
            Self::Primary => "--color-primary",
            Self::PrimaryDark => "--color-primary-dark",
            Self::Success => "--color-success",
            Self::Warning => "--color-warning",
            Self::Error => "--color-error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn classes_follow_token_name() {
        for token in StyleToken::iter() {
            assert_eq!(token.bg(), format!("bg-{token}"));
            assert_eq!(token.text(), format!("text-{token}"));
            assert_eq!(token.border(), format!("border-{token}"));
            assert_eq!(token.css_var(), format!("--color-{token}"));
        }
    }

    #[test]
    fn parses_kebab_case_names() {
        assert_eq!("primary-dark".parse::<StyleToken>().ok(), Some(StyleToken::PrimaryDark));
        assert!("neutral-600".parse::<StyleToken>().is_err());
    }
}
