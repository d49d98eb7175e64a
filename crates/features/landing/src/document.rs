use crate::error::LandingError;
use crate::page::LandingPage;
use dioxus::prelude::*;
use sme_kernel::domain::config::{Palette, UiConfig};
use sme_ui::StyleToken;
use strum::IntoEnumIterator;

const DOCTYPE: &str = "<!DOCTYPE html>";
const HTML_OPEN: &str = r#"<html lang="en">"#;
const HTML_CLOSE: &str = "</html>";

/// Characters that could break out of a declaration value or the `<style>` element.
const FORBIDDEN_IN_COLOR: &[char] = &['<', '>', '{', '}', ';', '"', '\'', '\\'];

/// Renders the complete HTML document around [`LandingPage`].
///
/// # Errors
/// Returns [`LandingError::InvalidColor`] if a palette entry is empty or could
/// escape its CSS declaration.
pub fn render_document(config: &UiConfig) -> Result<String, LandingError> {
    let theme = theme_css(&config.palette)?;

    let mut dom = VirtualDom::new_with_props(
        Document,
        DocumentProps {
            page_title: config.title.clone(),
            stylesheets: config.stylesheets.clone(),
            theme,
        },
    );
    dom.rebuild_in_place();

    // The root element is written here; `dioxus-html` has no `html` element.
    Ok(format!("{DOCTYPE}{HTML_OPEN}{}{HTML_CLOSE}", dioxus_ssr::render(&dom)))
}

/// Theme stylesheet binding every [`StyleToken`] to its palette color.
///
/// # Errors
/// See [`render_document`].
pub fn theme_css(palette: &Palette) -> Result<String, LandingError> {
    let colors = StyleToken::iter()
        .map(|token| checked_color(token, palette_color(palette, token)).map(|c| (token, c)))
        .collect::<Result<Vec<_>, _>>()?;

    let variables: String =
        colors.iter().map(|(token, color)| format!("{}:{color};", token.css_var())).collect();

    let helpers: String = colors
        .iter()
        .map(|(token, _)| {
            let var = token.css_var();
            format!(
                ".{}{{background-color:var({var})}}.{}{{color:var({var})}}.{}{{border-color:var({var})}}",
                token.bg(),
                token.text(),
                token.border(),
            )
        })
        .collect();

    let hover = format!(
        ".hover\\:{}:hover{{background-color:var({})}}",
        StyleToken::PrimaryDark.bg(),
        StyleToken::PrimaryDark.css_var(),
    );

    Ok(format!(":root{{{variables}}}{helpers}{hover}"))
}

fn palette_color(palette: &Palette, token: StyleToken) -> &str {
    match token {
        StyleToken::Primary => &palette.primary,
        StyleToken::PrimaryDark => &palette.primary_dark,
        StyleToken::Success => &palette.success,
        StyleToken::Warning => &palette.warning,
        StyleToken::Error => &palette.error,
    }
}

fn checked_color(token: StyleToken, value: &str) -> Result<&str, LandingError> {
    let color = value.trim();
    if color.is_empty() || color.contains(FORBIDDEN_IN_COLOR) {
        return Err(LandingError::InvalidColor {
            message: format!("{token} = '{value}'").into(),
            context: None,
        });
    }
    Ok(color)
}

#[component]
fn Document(page_title: String, stylesheets: Vec<String>, theme: String) -> Element {
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title}" }
            for href in stylesheets {
                link { rel: "stylesheet", href }
            }
            style { dangerous_inner_html: theme }
        }
        body { LandingPage {} }
    }
}
