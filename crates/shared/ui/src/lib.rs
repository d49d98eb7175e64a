//! Stateless presentational primitives shared by every page.
//!
//! Components render plain HTML with utility classes; colors come from the
//! [`StyleToken`] palette and resolve against whatever stylesheet the host
//! document provides.
//!
//! ```rust,no_run
//! use dioxus::prelude::*;
//! use sme_ui::prelude::*;
//!
//! #[component]
//! fn Actions() -> Element {
//!     rsx! {
//!         Card {
//!             CardHeader { CardTitle { "Suppliers" } }
//!             CardContent {
//!                 Button { size: ButtonSize::Lg, variant: ButtonVariant::Outline, "Open" }
//!             }
//!         }
//!     }
//! }
//! ```

mod button;
mod card;
mod class;
mod tokens;

pub use button::{Button, ButtonProps, ButtonSize, ButtonVariant};
pub use card::{
    Card, CardContent, CardContentProps, CardDescription, CardDescriptionProps, CardHeader,
    CardHeaderProps, CardProps, CardTitle, CardTitleProps,
};
pub use class::cn;
pub use tokens::StyleToken;

pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
        CardTitle, StyleToken, cn,
    };
}
