//! Component kinds and their markup.
//!
//! `type` strings are parsed once into a closed enum. Each known kind has an
//! arm in [`render_kind`]; anything else is `Unknown` and renders as a plain
//! container so its children survive.

use crate::context::RenderContext;
use crate::props::{BuiltProps, ElementProps};
use crate::theme::value_to_css;
use crate::vdom::VNode;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    // Layout
    Section,
    Container,
    Flex,
    Grid,
    Div,
    Header,
    Footer,
    Main,
    Nav,
    Article,
    Aside,
    // Text
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Heading,
    Text,
    Paragraph,
    Span,
    Code,
    Blockquote,
    // Interactive
    Button,
    Link,
    Fab,
    Form,
    Input,
    Textarea,
    // Media
    Image,
    Video,
    Icon,
    // Widgets
    Card,
    Badge,
    Alert,
    Toast,
    Modal,
    Dropdown,
    List,
    ListItem,
    Divider,
    Spacer,
    LanguageSwitcher,
    CustomHtml,
    Unknown(String),
}

impl ComponentKind {
    pub fn parse(component_type: &str) -> Self {
        match component_type {
            "section" => ComponentKind::Section,
            "container" => ComponentKind::Container,
            "flex" => ComponentKind::Flex,
            "grid" => ComponentKind::Grid,
            "div" => ComponentKind::Div,
            "header" => ComponentKind::Header,
            "footer" => ComponentKind::Footer,
            "main" => ComponentKind::Main,
            "nav" => ComponentKind::Nav,
            "article" => ComponentKind::Article,
            "aside" => ComponentKind::Aside,
            "h1" => ComponentKind::H1,
            "h2" => ComponentKind::H2,
            "h3" => ComponentKind::H3,
            "h4" => ComponentKind::H4,
            "h5" => ComponentKind::H5,
            "h6" => ComponentKind::H6,
            "heading" => ComponentKind::Heading,
            "text" => ComponentKind::Text,
            "paragraph" | "p" => ComponentKind::Paragraph,
            "span" => ComponentKind::Span,
            "code" => ComponentKind::Code,
            "blockquote" => ComponentKind::Blockquote,
            "button" => ComponentKind::Button,
            "link" => ComponentKind::Link,
            "fab" => ComponentKind::Fab,
            "form" => ComponentKind::Form,
            "input" => ComponentKind::Input,
            "textarea" => ComponentKind::Textarea,
            "image" => ComponentKind::Image,
            "video" => ComponentKind::Video,
            "icon" => ComponentKind::Icon,
            "card" => ComponentKind::Card,
            "badge" => ComponentKind::Badge,
            "alert" => ComponentKind::Alert,
            "toast" => ComponentKind::Toast,
            "modal" => ComponentKind::Modal,
            "dropdown" => ComponentKind::Dropdown,
            "list" => ComponentKind::List,
            "list-item" => ComponentKind::ListItem,
            "divider" => ComponentKind::Divider,
            "spacer" => ComponentKind::Spacer,
            "language-switcher" => ComponentKind::LanguageSwitcher,
            "customHTML" => ComponentKind::CustomHtml,
            other => ComponentKind::Unknown(other.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ComponentKind::Unknown(_))
    }

    /// Class every instance of the kind carries, ahead of the author's className
    pub fn default_class(&self) -> Option<&'static str> {
        match self {
            ComponentKind::Container => Some("container"),
            ComponentKind::Flex => Some("flex"),
            ComponentKind::Grid => Some("grid"),
            ComponentKind::Button => Some("btn"),
            ComponentKind::Fab => Some("fab"),
            ComponentKind::Card => Some("card"),
            ComponentKind::Badge => Some("badge"),
            ComponentKind::Alert => Some("alert"),
            ComponentKind::Toast => Some("toast"),
            ComponentKind::Modal => Some("modal"),
            ComponentKind::Dropdown => Some("dropdown"),
            ComponentKind::LanguageSwitcher => Some("language-switcher"),
            _ => None,
        }
    }

    /// Props read by the kind itself rather than emitted as attributes
    pub fn consumed_props(&self) -> &'static [&'static str] {
        match self {
            ComponentKind::Heading => &["level"],
            ComponentKind::Flex => &["direction", "align", "justify", "wrap"],
            ComponentKind::Grid => &["columns"],
            ComponentKind::Link => &["external"],
            ComponentKind::Icon => &["name", "size"],
            ComponentKind::Spacer => &["size"],
            ComponentKind::List => &["ordered"],
            ComponentKind::Alert | ComponentKind::Badge | ComponentKind::Toast => &["variant"],
            _ => &[],
        }
    }
}

/// Builds the element for one component from its prepared props and
/// already rendered children.
pub fn render_kind(
    kind: &ComponentKind,
    built: BuiltProps<'_>,
    children: Vec<VNode>,
    context: &RenderContext<'_>,
) -> VNode {
    let props = &built.props;
    let element = &built.element_props_with_spacing;

    match kind {
        ComponentKind::Section => container("section", element, children),
        ComponentKind::Container | ComponentKind::Div | ComponentKind::Card => {
            container("div", element, children)
        }
        ComponentKind::Header => container("header", element, children),
        ComponentKind::Footer => container("footer", element, children),
        ComponentKind::Main => container("main", element, children),
        ComponentKind::Nav => container("nav", element, children),
        ComponentKind::Article => container("article", element, children),
        ComponentKind::Aside => container("aside", element, children),
        ComponentKind::Flex => {
            let direction = prop_text(props, "direction").unwrap_or_else(|| "row".to_string());
            let mut node = container("div", element, children)
                .with_style("display", "flex")
                .with_style("flex-direction", direction);
            if let Some(align) = prop_text(props, "align") {
                node = node.with_style("align-items", align);
            }
            if let Some(justify) = prop_text(props, "justify") {
                node = node.with_style("justify-content", justify);
            }
            if props.get("wrap") == Some(&Value::Bool(true)) {
                node = node.with_style("flex-wrap", "wrap");
            }
            node
        }
        ComponentKind::Grid => {
            let mut node = container("div", element, children).with_style("display", "grid");
            match props.get("columns") {
                Some(Value::Number(n)) => {
                    node = node.with_style(
                        "grid-template-columns",
                        format!("repeat({}, minmax(0, 1fr))", n),
                    );
                }
                Some(Value::String(template)) => {
                    node = node.with_style("grid-template-columns", template.clone());
                }
                _ => {}
            }
            node
        }
        ComponentKind::H1 => container("h1", element, children),
        ComponentKind::H2 => container("h2", element, children),
        ComponentKind::H3 => container("h3", element, children),
        ComponentKind::H4 => container("h4", element, children),
        ComponentKind::H5 => container("h5", element, children),
        ComponentKind::H6 => container("h6", element, children),
        ComponentKind::Heading => {
            let level = props
                .get("level")
                .and_then(Value::as_u64)
                .filter(|level| (1..=6).contains(level))
                .unwrap_or(2);
            container(&format!("h{}", level), element, children)
        }
        ComponentKind::Text | ComponentKind::Paragraph => container("p", element, children),
        ComponentKind::Span => container("span", element, children),
        ComponentKind::Code => container("code", element, children),
        ComponentKind::Blockquote => container("blockquote", element, children),
        ComponentKind::Button | ComponentKind::Fab => {
            let mut node = container("button", element, children);
            if node.attr("type").is_none() {
                node = node.with_attr("type", "button");
            }
            node
        }
        ComponentKind::Link => {
            let mut node = container("a", element, children);
            if props.get("external") == Some(&Value::Bool(true)) {
                node = node
                    .with_attr("target", "_blank")
                    .with_attr("rel", "noopener noreferrer");
            }
            node
        }
        ComponentKind::Form => container("form", element, children),
        ComponentKind::Input => void("input", element),
        ComponentKind::Textarea => container("textarea", element, children),
        ComponentKind::Image => {
            // spacing goes on a wrapper so it does not distort the image box
            let mut image = void("img", &built.element_props);
            if image.attr("alt").is_none() {
                image = image.with_attr("alt", built.content.clone().unwrap_or_default());
            }
            let spacing = built.spacing_styles();
            if spacing.is_empty() {
                image
            } else {
                VNode::element("div").with_styles(spacing).with_child(image)
            }
        }
        ComponentKind::Video => container("video", element, children),
        ComponentKind::Icon => {
            let mut node = container("span", element, children).with_attr("aria-hidden", "true");
            if let Some(name) = prop_text(props, "name") {
                node = node.with_attr("data-icon", name);
            }
            if let Some(size) = props.get("size").and_then(css_length) {
                node = node.with_style("width", size.clone()).with_style("height", size);
            }
            node
        }
        ComponentKind::Badge => variant(container("span", element, children), "badge", props),
        ComponentKind::Alert => {
            variant(container("div", element, children), "alert", props).with_attr("role", "alert")
        }
        ComponentKind::Toast => variant(container("div", element, children), "toast", props)
            .with_attr("role", "status")
            .with_attr("aria-live", "polite"),
        ComponentKind::Modal => container("div", element, children)
            .with_attr("role", "dialog")
            .with_attr("aria-modal", "true"),
        ComponentKind::Dropdown => container("div", element, children),
        ComponentKind::List => {
            let tag = if props.get("ordered") == Some(&Value::Bool(true)) {
                "ol"
            } else {
                "ul"
            };
            container(tag, element, children)
        }
        ComponentKind::ListItem => container("li", element, children),
        ComponentKind::Divider => void("hr", element),
        ComponentKind::Spacer => {
            let size = props
                .get("size")
                .and_then(css_length)
                .unwrap_or_else(|| "1rem".to_string());
            container("div", element, Vec::new())
                .with_attr("aria-hidden", "true")
                .with_style("height", size)
        }
        ComponentKind::LanguageSwitcher => language_switcher(element, context),
        ComponentKind::CustomHtml => {
            let html = built.content.clone().unwrap_or_default();
            container("div", element, Vec::new()).with_child(VNode::raw(html))
        }
        ComponentKind::Unknown(component_type) => container("div", element, children)
            .with_attr("data-component-type", component_type.clone()),
    }
}

fn container(tag: &str, element: &ElementProps, children: Vec<VNode>) -> VNode {
    VNode::element(tag)
        .with_attrs(element.attributes.clone())
        .with_styles(element.styles.clone())
        .with_children(children)
}

fn void(tag: &str, element: &ElementProps) -> VNode {
    container(tag, element, Vec::new())
}

fn variant(node: VNode, base: &str, props: &pagekit_schema::Props) -> VNode {
    match prop_text(props, "variant") {
        Some(variant) => {
            let class = match node.attr("class") {
                Some(existing) => format!("{} {}-{}", existing, base, variant),
                None => format!("{}-{}", base, variant),
            };
            node.with_attr("class", class)
        }
        None => node,
    }
}

fn language_switcher(element: &ElementProps, context: &RenderContext<'_>) -> VNode {
    let mut node = container("div", element, Vec::new())
        .with_attr("data-language-switcher", "")
        .with_attr("data-current-language", context.current_lang.clone());

    if let Some(languages) = context.languages {
        for language in &languages.supported {
            let current = language.code == context.current_lang;
            node = node.with_child(
                VNode::element("button")
                    .with_attr("type", "button")
                    .with_attr("data-language", language.code.clone())
                    .with_attr("lang", language.code.clone())
                    .with_attr("dir", language.direction.as_str())
                    .with_attr("aria-pressed", current.to_string())
                    .with_child(VNode::text(language.label.clone())),
            );
        }
    }
    node
}

fn prop_text(props: &pagekit_schema::Props, key: &str) -> Option<String> {
    props.get(key).and_then(value_to_css)
}

/// Numbers are pixels, strings are taken as written
pub(crate) fn css_length(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{}px", n)),
        Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
