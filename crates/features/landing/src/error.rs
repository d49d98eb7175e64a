use std::borrow::Cow;

/// Landing slice error type.
#[sme_derive::sme_error]
pub enum LandingError {
    #[error("Invalid theme color{}: {message}", format_context(.context))]
    InvalidColor { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
