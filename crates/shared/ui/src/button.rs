use crate::class::cn;
use dioxus::prelude::*;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md \
                    text-sm font-medium transition-all outline-none focus-visible:ring-2 \
                    disabled:pointer-events-none disabled:opacity-50";

/// Padding and font-size preset of a [`Button`].
///
/// Parsing is strict through [`std::str::FromStr`] and lenient through
/// [`ButtonSize::from_name`], which resolves unknown names to [`ButtonSize::Default`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ButtonSize {
    #[default]
    Default,
    #[strum(to_string = "sm", serialize = "small")]
    Sm,
    #[strum(to_string = "lg", serialize = "large")]
    Lg,
    Icon,
}

impl ButtonSize {
    /// Lenient parse: unknown names resolve to [`ButtonSize::Default`].
    #[must_use]
    pub fn from_name(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            debug!(value, "Unknown button size, falling back to default");
            Self::default()
        })
    }

    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2",
            Self::Sm => "h-8 gap-1.5 px-3",
            Self::Lg => "h-10 px-6 text-base",
            Self::Icon => "size-9",
        }
    }
}

/// Visual treatment of a [`Button`]; `solid` is accepted for [`ButtonVariant::Default`].
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ButtonVariant {
    #[default]
    #[strum(to_string = "default", serialize = "solid")]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    /// Lenient parse: unknown names resolve to [`ButtonVariant::Default`].
    #[must_use]
    pub fn from_name(value: &str) -> Self {
        value.trim().parse().unwrap_or_else(|_| {
            debug!(value, "Unknown button variant, falling back to default");
            Self::default()
        })
    }

    #[must_use]
    pub const fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-white shadow-xs hover:bg-primary-dark",
            Self::Destructive => "bg-error text-white shadow-xs hover:opacity-90",
            Self::Outline => {
                "border border-neutral-200 bg-white shadow-xs hover:bg-neutral-100 \
                 hover:text-neutral-900"
            }
            Self::Secondary => "bg-neutral-100 text-neutral-900 shadow-xs hover:bg-neutral-200",
            Self::Ghost => "hover:bg-neutral-100 hover:text-neutral-900",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// A single `<button type="button">` styled by `size` and `variant`.
///
/// `class` is appended after the computed classes so callers can override
/// colors or spacing.
#[component]
pub fn Button(
    #[props(default)] size: ButtonSize,
    #[props(default)] variant: ButtonVariant,
    #[props(into, default)] class: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let classes = cn([BASE, variant.classes(), size.classes(), class.as_str()]);

    rsx! {
        button {
            r#type: "button",
            "data-slot": "button",
            "data-size": size.as_ref(),
            "data-variant": variant.as_ref(),
            class: "{classes}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn aliases_parse_strictly() {
        assert_eq!("large".parse::<ButtonSize>().ok(), Some(ButtonSize::Lg));
        assert_eq!("small".parse::<ButtonSize>().ok(), Some(ButtonSize::Sm));
        assert_eq!("LG".parse::<ButtonSize>().ok(), Some(ButtonSize::Lg));
        assert_eq!("solid".parse::<ButtonVariant>().ok(), Some(ButtonVariant::Default));
    }

    #[test]
    fn strict_parsing_rejects_unknown_names() {
        assert!("huge".parse::<ButtonSize>().is_err());
        assert!("neon".parse::<ButtonVariant>().is_err());
    }

    #[test]
    fn lenient_parsing_falls_back_to_default() {
        assert_eq!(ButtonSize::from_name("huge"), ButtonSize::Default);
        assert_eq!(ButtonVariant::from_name(""), ButtonVariant::Default);
        assert_eq!(ButtonVariant::from_name(" outline "), ButtonVariant::Outline);
    }

    #[test]
    fn display_round_trips_through_lenient_parse() {
        for size in ButtonSize::iter() {
            assert_eq!(ButtonSize::from_name(size.as_ref()), size);
        }
        for variant in ButtonVariant::iter() {
            assert_eq!(ButtonVariant::from_name(variant.as_ref()), variant);
        }
    }

    #[test]
    fn every_option_has_classes() {
        assert!(ButtonSize::iter().all(|size| !size.classes().is_empty()));
        assert!(ButtonVariant::iter().all(|variant| !variant.classes().is_empty()));
    }
}
