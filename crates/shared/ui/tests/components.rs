use dioxus::prelude::*;
use sme_ui::prelude::*;
use strum::IntoEnumIterator;

fn render(dom: &mut VirtualDom) -> String {
    dom.rebuild_in_place();
    dioxus_ssr::render(dom)
}

#[component]
fn SingleButton(size: ButtonSize, variant: ButtonVariant) -> Element {
    rsx! {
        Button { size, variant, "Go" }
    }
}

fn render_button(size: ButtonSize, variant: ButtonVariant) -> String {
    render(&mut VirtualDom::new_with_props(SingleButton, SingleButtonProps { size, variant }))
}

#[test]
fn every_size_and_variant_renders_one_styled_button() {
    for size in ButtonSize::iter() {
        for variant in ButtonVariant::iter() {
            let html = render_button(size, variant);

            assert_eq!(html.matches("<button").count(), 1, "{size}/{variant}: {html}");
            assert!(html.contains(r#"type="button""#), "{html}");
            assert!(html.contains(&format!(r#"data-size="{size}""#)), "{html}");
            assert!(html.contains(&format!(r#"data-variant="{variant}""#)), "{html}");
            assert!(html.contains(size.classes()), "{size}: {html}");
            assert!(html.contains(variant.classes()), "{variant}: {html}");
        }
    }
}

#[test]
fn unknown_options_render_default_style() {
    let html = render_button(ButtonSize::from_name("enormous"), ButtonVariant::from_name("glow"));

    assert!(html.contains(ButtonSize::Default.classes()), "{html}");
    assert!(html.contains(ButtonVariant::Default.classes()), "{html}");
    assert!(html.contains(r#"data-size="default""#));
    assert!(html.contains(r#"data-variant="default""#));
}

#[test]
fn class_override_is_appended_last() {
    fn app() -> Element {
        rsx! {
            Button { size: ButtonSize::Lg, class: "bg-primary hover:bg-primary-dark", "Get Started" }
        }
    }

    let html = render(&mut VirtualDom::new(app));
    let sizing = html.find(ButtonSize::Lg.classes()).expect("size classes");
    let override_at = html.rfind("bg-primary hover:bg-primary-dark").expect("override classes");

    assert!(sizing < override_at, "{html}");
    assert!(html.contains(">Get Started</button>"), "{html}");
}

#[test]
fn card_regions_keep_declaration_order() {
    fn app() -> Element {
        rsx! {
            Card { class: "border-neutral-200",
                CardHeader {
                    CardTitle { class: "text-primary", "Risk Assessment" }
                    CardDescription { "Supplier risk factors" }
                }
                CardContent {
                    p { "Compliance status across the chain." }
                }
            }
        }
    }

    let html = render(&mut VirtualDom::new(app));
    let positions: Vec<usize> = [
        r#"data-slot="card""#,
        r#"data-slot="card-header""#,
        r#"data-slot="card-title""#,
        "Risk Assessment",
        r#"data-slot="card-description""#,
        "Supplier risk factors",
        r#"data-slot="card-content""#,
        "Compliance status across the chain.",
    ]
    .iter()
    .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle} in {html}")))
    .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
    assert!(html.starts_with("<div"), "{html}");
    assert!(html.contains("<h3"), "{html}");
    assert!(html.contains("border-neutral-200"), "{html}");
}

#[test]
fn empty_card_renders_bare_container() {
    fn app() -> Element {
        rsx! {
            Card {}
        }
    }

    let html = render(&mut VirtualDom::new(app));
    assert_eq!(html.matches("<div").count(), 1, "{html}");
    assert!(html.contains(r#"data-slot="card""#));
}

#[test]
fn unknown_size_keeps_each_variant_styled() {
    for variant in ButtonVariant::iter() {
        let html =
            render_button(ButtonSize::from_name("xxl"), ButtonVariant::from_name(variant.as_ref()));

        assert_eq!(html.matches("<button").count(), 1, "{html}");
        assert!(html.contains(ButtonSize::Default.classes()), "{variant}: {html}");
        assert!(html.contains(variant.classes()), "{variant}: {html}");
    }
}
