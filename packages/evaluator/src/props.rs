//! Final attributes and inline styles for one component.
//!
//! [`build_component_props`] is a pure transform. It never fails: unresolved
//! theme tokens and missing translations degrade to their literal text and
//! are reported through [`BuiltProps::issues`].
//!
//! Style layers, later wins:
//! 1. type-keyed animation/shadow table
//! 2. interaction wiring (hover transition, entrance timing)
//! 3. author `style` prop
//! 4. minimum-size fallback for hollow blocks (only when unset)
//! 5. spacing (`element_props_with_spacing` only)

use crate::error::RenderIssue;
use crate::i18n::{resolve_translation, translations_for_key};
use crate::interactions::wire_interactions;
use crate::placeholder::{classify, Placeholder};
use crate::registry::{css_length, ComponentKind};
use crate::theme::{substitute_props_theme_tokens, unresolved_theme_tokens, value_to_css};
use pagekit_schema::{Child, Component, Languages, Node, Props, Theme};
use serde_json::Value;
use std::collections::BTreeMap;

/// Props resolved by the spacing pass instead of becoming attributes
const SPACING_PROPS: [&str; 3] = ["padding", "margin", "gap"];

/// CSS properties whose numeric values take no unit
const UNITLESS_PROPERTIES: [&str; 9] = [
    "opacity",
    "z-index",
    "font-weight",
    "line-height",
    "flex",
    "flex-grow",
    "flex-shrink",
    "order",
    "zoom",
];

const HOLLOW_BLOCK_MIN_SIZE: &str = "2rem";

/// Block provenance of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockTag<'a> {
    pub name: &'a str,
    /// Position among instances of the same block in the current render
    pub instance: usize,
}

pub struct PropsConfig<'a> {
    pub component: &'a Component,
    pub kind: &'a ComponentKind,
    pub block: Option<BlockTag<'a>>,
    pub theme: Option<&'a Theme>,
    pub languages: Option<&'a Languages>,
    pub current_lang: &'a str,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementProps {
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
}

/// A child ready for rendering: translated text, or a node still to recurse into
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedChild<'a> {
    Text(String),
    /// Translated text that shares its parent with other children. Rendered as
    /// its own `<span>` so a language switch replaces only this text.
    Translated {
        text: String,
        attributes: BTreeMap<String, String>,
    },
    Node(&'a Node),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuiltProps<'a> {
    /// Props after theme-token substitution
    pub props: Props,
    pub element_props: ElementProps,
    pub element_props_with_spacing: ElementProps,
    pub content: Option<String>,
    /// Translation attributes for `content` when it needs its own wrapper
    pub content_attributes: BTreeMap<String, String>,
    pub children: Vec<PreparedChild<'a>>,
    pub issues: Vec<RenderIssue>,
    spacing: BTreeMap<String, String>,
}

impl BuiltProps<'_> {
    /// Styles contributed by the spacing pass alone
    pub fn spacing_styles(&self) -> BTreeMap<String, String> {
        self.spacing.clone()
    }
}

pub fn build_component_props(config: PropsConfig<'_>) -> BuiltProps<'_> {
    let PropsConfig {
        component,
        kind,
        block,
        theme,
        languages,
        current_lang,
    } = config;

    let mut issues: Vec<RenderIssue> = unresolved_theme_tokens(&component.props, theme)
        .into_iter()
        .map(|token| RenderIssue::ThemeTokenUnresolved { token })
        .collect();
    let props = substitute_props_theme_tokens(&component.props, theme);

    let mut translator = Translator {
        languages,
        current_lang,
        issues: &mut issues,
    };
    // a translated text that is the element's only child keeps its
    // attributes on the element itself; otherwise each text is wrapped
    let sole_child = usize::from(component.content.is_some()) + component.children.len() == 1;
    let mut element_translation = BTreeMap::new();
    let mut content_attributes = BTreeMap::new();

    let content = component.content.as_deref().map(|content| {
        let (text, attributes) = translator.translate(content);
        if sole_child {
            element_translation = attributes;
        } else {
            content_attributes = attributes;
        }
        text
    });
    let children: Vec<PreparedChild<'_>> = component
        .children
        .iter()
        .map(|child| match child {
            Child::Text(text) => {
                let (text, attributes) = translator.translate(text);
                if attributes.is_empty() {
                    PreparedChild::Text(text)
                } else if sole_child {
                    element_translation = attributes;
                    PreparedChild::Text(text)
                } else {
                    PreparedChild::Translated { text, attributes }
                }
            }
            Child::Node(node) => PreparedChild::Node(node),
        })
        .collect();

    let mut element = ElementProps::default();

    for (property, value) in kind_styles(kind, theme) {
        element.styles.insert(property.to_string(), value);
    }

    let wiring = wire_interactions(&component.interactions, theme);
    element.attributes.extend(wiring.attributes);
    element.styles.extend(wiring.styles);

    apply_attributes(&props, kind, &mut element.attributes);
    element.styles.extend(author_styles(&props));

    let class_name = [
        kind.default_class().map(str::to_string),
        props.get("className").and_then(value_to_css),
    ]
    .into_iter()
    .flatten()
    .filter(|class| !class.is_empty())
    .collect::<Vec<_>>()
    .join(" ");
    if !class_name.is_empty() {
        element.attributes.insert("class".to_string(), class_name);
    }

    if let Some(block) = block {
        element
            .attributes
            .insert("data-block".to_string(), block.name.to_string());
        element
            .attributes
            .insert("data-block-instance".to_string(), block.instance.to_string());
        if component.is_hollow() && !renders_own_content(kind) {
            element
                .styles
                .entry("min-height".to_string())
                .or_insert_with(|| HOLLOW_BLOCK_MIN_SIZE.to_string());
            element
                .styles
                .entry("min-width".to_string())
                .or_insert_with(|| HOLLOW_BLOCK_MIN_SIZE.to_string());
        }
    }

    element.attributes.extend(element_translation);

    let spacing = spacing_styles(&props, kind, theme, &element.styles);
    let mut element_props_with_spacing = element.clone();
    element_props_with_spacing
        .styles
        .extend(spacing.iter().map(|(k, v)| (k.clone(), v.clone())));

    BuiltProps {
        props,
        element_props: element,
        element_props_with_spacing,
        content,
        content_attributes,
        children,
        issues,
        spacing,
    }
}

struct Translator<'a, 'i> {
    languages: Option<&'a Languages>,
    current_lang: &'a str,
    issues: &'i mut Vec<RenderIssue>,
}

impl Translator<'_, '_> {
    /// `$t:key` becomes the translated text plus its `data-translation-key` and
    /// `data-translations` attributes; anything else is returned as is
    fn translate(&mut self, text: &str) -> (String, BTreeMap<String, String>) {
        let Placeholder::Translation(key) = classify(text) else {
            return (text.to_string(), BTreeMap::new());
        };
        let translation = resolve_translation(key, self.current_lang, self.languages);
        if translation.is_missing() {
            self.issues.push(RenderIssue::TranslationMissing {
                key: key.to_string(),
                lang: self.current_lang.to_string(),
            });
        }

        let mut attributes = BTreeMap::new();
        attributes.insert("data-translation-key".to_string(), key.to_string());
        let translations = translations_for_key(key, self.languages);
        if !translations.is_empty() {
            if let Ok(json) = serde_json::to_string(&translations) {
                attributes.insert("data-translations".to_string(), json);
            }
        }
        (translation.text, attributes)
    }
}

/// Kinds whose markup does not depend on children or content
fn renders_own_content(kind: &ComponentKind) -> bool {
    matches!(
        kind,
        ComponentKind::Image
            | ComponentKind::Input
            | ComponentKind::Divider
            | ComponentKind::Spacer
            | ComponentKind::Icon
            | ComponentKind::Video
            | ComponentKind::LanguageSwitcher
    )
}

/// Fixed per-type motion and shadow styles
fn kind_styles(kind: &ComponentKind, theme: Option<&Theme>) -> Vec<(&'static str, String)> {
    let shadow = |names: &[&str]| {
        names.iter().find_map(|&name| {
            theme
                .and_then(|theme| theme.get_path(&["shadows", name]))
                .and_then(value_to_css)
        })
    };

    let mut styles = Vec::new();
    match kind {
        ComponentKind::Toast => {
            styles.push((
                "transition",
                "opacity 0.3s ease-out, transform 0.3s ease-out".to_string(),
            ));
        }
        ComponentKind::Card => {
            styles.push((
                "transition",
                "transform 0.3s ease-out, box-shadow 0.3s ease-out".to_string(),
            ));
            if let Some(shadow) = shadow(&["card", "md"]) {
                styles.push(("box-shadow", shadow));
            }
        }
        ComponentKind::Fab => {
            styles.push(("animation", "float 3s ease-in-out infinite".to_string()));
            if let Some(shadow) = shadow(&["fab", "lg"]) {
                styles.push(("box-shadow", shadow));
            }
        }
        ComponentKind::Modal => {
            styles.push(("animation", "fadeIn 0.2s ease-out".to_string()));
        }
        ComponentKind::Dropdown => {
            styles.push(("animation", "slideDown 0.2s ease-out".to_string()));
        }
        _ => {}
    }
    styles
}

fn apply_attributes(props: &Props, kind: &ComponentKind, attributes: &mut BTreeMap<String, String>) {
    for (key, value) in props {
        let key = key.as_str();
        if key == "className"
            || key == "style"
            || SPACING_PROPS.contains(&key)
            || kind.consumed_props().contains(&key)
        {
            continue;
        }

        let name = attribute_name(key);
        match value {
            Value::Bool(true) => {
                attributes.insert(name, String::new());
            }
            Value::Bool(false) | Value::Null => {}
            Value::String(s) => {
                attributes.insert(name, s.clone());
            }
            Value::Number(n) => {
                attributes.insert(name, n.to_string());
            }
            Value::Array(_) | Value::Object(_) => {
                if let Ok(json) = serde_json::to_string(value) {
                    attributes.insert(name, json);
                }
            }
        }
    }
}

fn author_styles(props: &Props) -> BTreeMap<String, String> {
    let Some(Value::Object(style)) = props.get("style") else {
        return BTreeMap::new();
    };
    style
        .iter()
        .filter_map(|(key, value)| {
            let property = kebab_case(key);
            let css = match value {
                Value::Number(n) if UNITLESS_PROPERTIES.contains(&property.as_str()) => n.to_string(),
                Value::Number(n) => format!("{}px", n),
                Value::String(s) => s.clone(),
                _ => return None,
            };
            Some((property, css))
        })
        .collect()
}

/// `padding`/`margin`/`gap` props, then per-type defaults from `theme.spacing`
fn spacing_styles(
    props: &Props,
    kind: &ComponentKind,
    theme: Option<&Theme>,
    existing: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let spacing_token = |name: &str| {
        theme
            .and_then(|theme| theme.get_path(&["spacing", name]))
            .and_then(value_to_css)
    };

    let mut spacing = BTreeMap::new();
    for property in SPACING_PROPS {
        let resolved = match props.get(property) {
            Some(Value::String(name)) => spacing_token(name).or_else(|| Some(name.clone())),
            Some(value) => css_length(value),
            None => None,
        };
        if let Some(resolved) = resolved {
            spacing.insert(property.to_string(), resolved);
        }
    }

    let unset = |property: &str| !spacing.contains_key(property) && !existing.contains_key(property);
    let mut defaults = Vec::new();
    match kind {
        ComponentKind::Section if unset("padding") => {
            if let Some(padding) = spacing_token("section") {
                defaults.push(("padding", padding));
            }
        }
        ComponentKind::Container if !existing.contains_key("max-width") => {
            if let Some(width) = spacing_token("container") {
                defaults.push(("max-width", width));
                if unset("margin") {
                    defaults.push(("margin", "0 auto".to_string()));
                }
            }
        }
        _ => {}
    }
    for (property, value) in defaults {
        spacing.insert(property.to_string(), value);
    }

    spacing
}

/// HTML attribute for a camelCase prop key
fn attribute_name(key: &str) -> String {
    if key == "htmlFor" {
        return "for".to_string();
    }
    let prefixed = ["aria", "data"].iter().any(|prefix| {
        key.strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .map_or(false, |c| c.is_ascii_uppercase())
    });
    if prefixed {
        kebab_case(key)
    } else {
        key.to_ascii_lowercase()
    }
}

fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
