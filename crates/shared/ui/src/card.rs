use crate::class::cn;
use dioxus::prelude::*;

#[component]
pub fn Card(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = cn([
        "flex flex-col gap-6 rounded-xl border border-neutral-200 bg-white py-6 text-neutral-900 shadow-sm",
        class.as_str(),
    ]);

    rsx! {
        div { "data-slot": "card", class: "{classes}", {children} }
    }
}

#[component]
pub fn CardHeader(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = cn(["grid auto-rows-min items-start gap-1.5 px-6", class.as_str()]);

    rsx! {
        div { "data-slot": "card-header", class: "{classes}", {children} }
    }
}

#[component]
pub fn CardTitle(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = cn(["text-lg font-semibold leading-none", class.as_str()]);

    rsx! {
        h3 { "data-slot": "card-title", class: "{classes}", {children} }
    }
}

#[component]
pub fn CardDescription(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = cn(["text-sm text-neutral-500", class.as_str()]);

    rsx! {
        p { "data-slot": "card-description", class: "{classes}", {children} }
    }
}

#[component]
pub fn CardContent(#[props(into, default)] class: String, children: Element) -> Element {
    let classes = cn(["px-6", class.as_str()]);

    rsx! {
        div { "data-slot": "card-content", class: "{classes}", {children} }
    }
}
