use sme_derive::sme_error;
use std::borrow::Cow;

#[sme_error]
pub enum RenderError {
    #[error("Template error{}: {source}", format_context(.context))]
    Template {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing slot{}: {message}", format_context(.context))]
    MissingSlot { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn render() -> Result<(), RenderError> {
    Err(std::fmt::Error).context("rendering hero")
}

fn main() {
    let err = render().unwrap_err();
    assert_eq!(err.code(), "TEMPLATE");
    assert!(err.to_string().starts_with("Template error (rendering hero): "));

    let missing = RenderError::MissingSlot { message: "card-title".into(), context: None };
    assert_eq!(missing.code(), "MISSING_SLOT");

    let internal: RenderError = "boom".into();
    assert_eq!(internal.code(), "INTERNAL");
}
