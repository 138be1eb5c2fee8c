/// Props builder tests: attributes, style layering, spacing and block fallbacks
use crate::error::RenderIssue;
use crate::props::{build_component_props, BlockTag, BuiltProps, PreparedChild, PropsConfig};
use crate::registry::ComponentKind;
use pagekit_schema::{
    Component, HoverInteraction, Interactions, LanguageConfig, Languages, Theme,
};
use serde_json::json;
use std::collections::BTreeMap;

fn theme() -> Theme {
    Theme::from_value(json!({
        "colors": { "primary": "#0055ff" },
        "spacing": { "sm": "0.5rem", "lg": "2rem", "section": "5rem", "container": "1200px" },
        "shadows": { "md": "0 2px 4px rgba(0,0,0,0.1)", "lg": "0 8px 16px rgba(0,0,0,0.2)" }
    }))
}

fn languages() -> Languages {
    Languages::new(
        "en-US",
        vec![
            LanguageConfig::new("en-US", "English"),
            LanguageConfig::new("de-DE", "Deutsch"),
        ],
    )
    .with_translation("en-US", "nav.home", "Home")
    .with_translation("de-DE", "nav.home", "Startseite")
}

fn build<'a>(
    component: &'a Component,
    kind: &'a ComponentKind,
    theme: Option<&'a Theme>,
    block: Option<BlockTag<'a>>,
) -> BuiltProps<'a> {
    build_component_props(PropsConfig {
        component,
        kind,
        block,
        theme,
        languages: None,
        current_lang: "en-US",
    })
}

#[test]
fn test_props_to_attributes() {
    let component = Component::new("input")
        .with_prop("ariaLabel", "Email")
        .with_prop("required", true)
        .with_prop("readOnly", false)
        .with_prop("maxLength", 40)
        .with_prop("placeholder", "you@example.com");
    let kind = ComponentKind::Input;

    let built = build(&component, &kind, None, None);
    let attrs = &built.element_props.attributes;
    assert_eq!(attrs.get("aria-label").map(String::as_str), Some("Email"));
    assert_eq!(attrs.get("required").map(String::as_str), Some(""));
    assert_eq!(attrs.get("readonly"), None);
    assert_eq!(attrs.get("maxlength").map(String::as_str), Some("40"));
    assert_eq!(
        attrs.get("placeholder").map(String::as_str),
        Some("you@example.com")
    );
}

#[test]
fn test_style_object_to_inline_styles() {
    let component = Component::new("div").with_prop(
        "style",
        json!({ "backgroundColor": "$theme.colors.primary", "fontSize": 18, "opacity": 0.5, "zIndex": 10 }),
    );
    let kind = ComponentKind::Div;
    let theme = theme();

    let built = build(&component, &kind, Some(&theme), None);
    let styles = &built.element_props.styles;
    assert_eq!(styles["background-color"], "#0055ff");
    assert_eq!(styles["font-size"], "18px");
    assert_eq!(styles["opacity"], "0.5");
    assert_eq!(styles["z-index"], "10");
    assert!(!built.element_props.attributes.contains_key("style"));
}

#[test]
fn test_class_combines_default_and_class_name() {
    let component = Component::new("card").with_prop("className", "pricing featured");
    let kind = ComponentKind::Card;

    let built = build(&component, &kind, None, None);
    assert_eq!(
        built.element_props.attributes["class"],
        "card pricing featured"
    );
}

#[test]
fn test_type_style_table() {
    let theme = theme();

    let card = Component::new("card");
    let built = build(&card, &ComponentKind::Card, Some(&theme), None);
    assert_eq!(
        built.element_props.styles["transition"],
        "transform 0.3s ease-out, box-shadow 0.3s ease-out"
    );
    assert_eq!(
        built.element_props.styles["box-shadow"],
        "0 2px 4px rgba(0,0,0,0.1)"
    );

    let fab = Component::new("fab");
    let built = build(&fab, &ComponentKind::Fab, Some(&theme), None);
    assert_eq!(
        built.element_props.styles["animation"],
        "float 3s ease-in-out infinite"
    );
    assert_eq!(
        built.element_props.styles["box-shadow"],
        "0 8px 16px rgba(0,0,0,0.2)"
    );

    let toast = Component::new("toast");
    let built = build(&toast, &ComponentKind::Toast, None, None);
    assert_eq!(
        built.element_props.styles["transition"],
        "opacity 0.3s ease-out, transform 0.3s ease-out"
    );

    let modal = Component::new("modal");
    let built = build(&modal, &ComponentKind::Modal, None, None);
    assert_eq!(built.element_props.styles["animation"], "fadeIn 0.2s ease-out");

    let dropdown = Component::new("dropdown");
    let built = build(&dropdown, &ComponentKind::Dropdown, None, None);
    assert_eq!(
        built.element_props.styles["animation"],
        "slideDown 0.2s ease-out"
    );
}

#[test]
fn test_author_style_overrides_type_table() {
    let component = Component::new("modal").with_prop("style", json!({ "animation": "none" }));
    let built = build(&component, &ComponentKind::Modal, None, None);
    assert_eq!(built.element_props.styles["animation"], "none");
}

#[test]
fn test_hover_transition_and_author_style() {
    let component = Component::new("button")
        .with_interactions(Interactions {
            hover: Some(HoverInteraction {
                scale: Some(1.1),
                ..Default::default()
            }),
            ..Default::default()
        })
        .with_text("Hover me");
    let built = build(&component, &ComponentKind::Button, None, None);
    assert_eq!(built.element_props.styles["transition"], "all 300ms ease");
    assert_eq!(
        built.element_props.attributes["data-hover-interaction"],
        r#"{"scale":1.1}"#
    );
}

#[test]
fn test_spacing_resolves_theme_keys() {
    let component = Component::new("div")
        .with_prop("padding", "lg")
        .with_prop("margin", 8)
        .with_prop("gap", "3px");
    let theme = theme();

    let built = build(&component, &ComponentKind::Div, Some(&theme), None);
    assert!(built.element_props.styles.get("padding").is_none());
    let styles = &built.element_props_with_spacing.styles;
    assert_eq!(styles["padding"], "2rem");
    assert_eq!(styles["margin"], "8px");
    assert_eq!(styles["gap"], "3px");
    assert_eq!(built.spacing_styles().len(), 3);
    assert!(!built.element_props.attributes.contains_key("padding"));
}

#[test]
fn test_section_and_container_defaults() {
    let theme = theme();

    let section = Component::new("section").with_text("x");
    let built = build(&section, &ComponentKind::Section, Some(&theme), None);
    assert_eq!(built.element_props_with_spacing.styles["padding"], "5rem");

    let explicit = Component::new("section").with_prop("padding", "sm");
    let built = build(&explicit, &ComponentKind::Section, Some(&theme), None);
    assert_eq!(built.element_props_with_spacing.styles["padding"], "0.5rem");

    let container = Component::new("container");
    let built = build(&container, &ComponentKind::Container, Some(&theme), None);
    let styles = &built.element_props_with_spacing.styles;
    assert_eq!(styles["max-width"], "1200px");
    assert_eq!(styles["margin"], "0 auto");

    let built = build(&section, &ComponentKind::Section, None, None);
    assert!(built.element_props_with_spacing.styles.get("padding").is_none());
}

#[test]
fn test_block_tag_and_hollow_fallback() {
    let hollow = Component::new("div");
    let tag = BlockTag {
        name: "placeholder",
        instance: 2,
    };
    let built = build(&hollow, &ComponentKind::Div, None, Some(tag));
    let element = &built.element_props;
    assert_eq!(element.attributes["data-block"], "placeholder");
    assert_eq!(element.attributes["data-block-instance"], "2");
    assert_eq!(element.styles["min-height"], "2rem");
    assert_eq!(element.styles["min-width"], "2rem");

    let filled = Component::new("div").with_text("content");
    let built = build(&filled, &ComponentKind::Div, None, Some(tag));
    assert!(!built.element_props.styles.contains_key("min-height"));

    let image = Component::new("image").with_prop("src", "/a.png");
    let built = build(&image, &ComponentKind::Image, None, Some(tag));
    assert!(!built.element_props.styles.contains_key("min-height"));

    let unblocked = build(&hollow, &ComponentKind::Div, None, None);
    assert!(unblocked.element_props.styles.is_empty());
}

#[test]
fn test_unresolved_theme_token_is_reported() {
    let component = Component::new("div").with_prop("title", "$theme.colors.missing");
    let theme = theme();

    let built = build(&component, &ComponentKind::Div, Some(&theme), None);
    assert_eq!(
        built.element_props.attributes["title"],
        "$theme.colors.missing"
    );
    assert_eq!(
        built.issues,
        vec![RenderIssue::ThemeTokenUnresolved {
            token: "$theme.colors.missing".to_string()
        }]
    );
}

#[test]
fn test_translated_children() {
    let component = Component::new("link")
        .with_prop("href", "/")
        .with_text("$t:nav.home")
        .with_text(" ›");
    let kind = ComponentKind::Link;
    let languages = languages();

    let built = build_component_props(PropsConfig {
        component: &component,
        kind: &kind,
        block: None,
        theme: None,
        languages: Some(&languages),
        current_lang: "de-DE",
    });
    let translation = BTreeMap::from([
        ("data-translation-key".to_string(), "nav.home".to_string()),
        (
            "data-translations".to_string(),
            r#"{"de-DE":"Startseite","en-US":"Home"}"#.to_string(),
        ),
    ]);
    assert_eq!(
        built.children,
        vec![
            PreparedChild::Translated {
                text: "Startseite".to_string(),
                attributes: translation,
            },
            PreparedChild::Text(" ›".to_string()),
        ]
    );
    let attrs = &built.element_props.attributes;
    assert!(!attrs.contains_key("data-translation-key"));
    assert!(!attrs.contains_key("data-translations"));
    assert!(built.issues.is_empty());
}

#[test]
fn test_sole_translated_child_marks_the_element() {
    let component = Component::new("link").with_prop("href", "/").with_text("$t:nav.home");
    let kind = ComponentKind::Link;
    let languages = languages();

    let built = build_component_props(PropsConfig {
        component: &component,
        kind: &kind,
        block: None,
        theme: None,
        languages: Some(&languages),
        current_lang: "en-US",
    });
    assert_eq!(built.children, vec![PreparedChild::Text("Home".to_string())]);
    let attrs = &built.element_props.attributes;
    assert_eq!(attrs["data-translation-key"], "nav.home");
    assert_eq!(
        attrs["data-translations"],
        r#"{"de-DE":"Startseite","en-US":"Home"}"#
    );
    assert!(built.content_attributes.is_empty());
}

#[test]
fn test_translated_content_with_children_gets_own_attributes() {
    let component = Component::new("text")
        .with_content("$t:nav.home")
        .with_child(Component::new("icon").with_prop("name", "arrow"));
    let kind = ComponentKind::Text;
    let languages = languages();

    let built = build_component_props(PropsConfig {
        component: &component,
        kind: &kind,
        block: None,
        theme: None,
        languages: Some(&languages),
        current_lang: "de-DE",
    });
    assert_eq!(built.content.as_deref(), Some("Startseite"));
    assert_eq!(built.content_attributes["data-translation-key"], "nav.home");
    assert!(!built
        .element_props
        .attributes
        .contains_key("data-translation-key"));
}

#[test]
fn test_missing_translation_renders_key() {
    let component = Component::new("text").with_content("$t:footer.legal");
    let kind = ComponentKind::Text;
    let languages = languages();

    let built = build_component_props(PropsConfig {
        component: &component,
        kind: &kind,
        block: None,
        theme: None,
        languages: Some(&languages),
        current_lang: "de-DE",
    });
    assert_eq!(built.content.as_deref(), Some("footer.legal"));
    assert_eq!(
        built.issues,
        vec![RenderIssue::TranslationMissing {
            key: "footer.legal".to_string(),
            lang: "de-DE".to_string(),
        }]
    );
}

#[test]
fn test_consumed_props_are_not_attributes() {
    let component = Component::new("grid").with_prop("columns", 3);
    let built = build(&component, &ComponentKind::Grid, None, None);
    assert!(!built.element_props.attributes.contains_key("columns"));
    assert_eq!(built.props["columns"], json!(3));
}
