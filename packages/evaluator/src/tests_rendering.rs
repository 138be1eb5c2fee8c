/// Rendering tests: block expansion, dispatch by type and page output
use crate::context::RenderContext;
use crate::renderer::{render_node, render_page, Renderer};
use crate::vdom::VNode;
use pagekit_schema::{
    App, Block, BlockReference, Component, Direction, LanguageConfig, Languages, Node, Page,
};

fn hero_catalog() -> Vec<Block> {
    vec![
        Block::new(
            "hero",
            Component::new("section")
                .with_prop("className", "hero")
                .with_child(Component::new("h1").with_text("$title"))
                .with_child(Component::new("text").with_content("$subtitle")),
        ),
        Block::new(
            "cta",
            Component::new("button")
                .with_prop("disabled", "$disabled")
                .with_text("$label"),
        ),
    ]
}

#[test]
fn test_render_plain_component() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);
    let node: Node = Component::new("h2")
        .with_prop("id", "intro")
        .with_text("Welcome")
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.tag(), Some("h2"));
    assert_eq!(vnode.attr("id"), Some("intro"));
    assert_eq!(vnode.text_content(), "Welcome");
}

#[test]
fn test_block_reference_expands_with_vars() {
    let blocks = hero_catalog();
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("hero")
        .with_var("title", "Build faster")
        .with_var("subtitle", "No code required")
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.tag(), Some("section"));
    assert_eq!(vnode.attr("class"), Some("hero"));
    assert_eq!(vnode.attr("data-block"), Some("hero"));
    assert_eq!(vnode.attr("data-block-instance"), Some("0"));

    let heading = vnode.find(&|n| n.tag() == Some("h1")).unwrap();
    assert_eq!(heading.text_content(), "Build faster");
    let text = vnode.find(&|n| n.tag() == Some("p")).unwrap();
    assert_eq!(text.text_content(), "No code required");
}

#[test]
fn test_unbound_variable_stays_literal() {
    let blocks = hero_catalog();
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("hero").with_var("title", "Hi").into();

    let vnode = render_node(&node, &ctx);
    let text = vnode.find(&|n| n.tag() == Some("p")).unwrap();
    assert_eq!(text.text_content(), "$subtitle");
}

#[test]
fn test_boolean_var_becomes_boolean_attribute() {
    let blocks = hero_catalog();
    let ctx = RenderContext::new(&blocks);

    let on: Node = BlockReference::new("cta")
        .with_var("label", "Go")
        .with_var("disabled", true)
        .into();
    let vnode = render_node(&on, &ctx);
    assert_eq!(vnode.tag(), Some("button"));
    assert_eq!(vnode.attr("disabled"), Some(""));
    assert_eq!(vnode.attr("type"), Some("button"));

    let off: Node = BlockReference::new("cta")
        .with_var("label", "Go")
        .with_var("disabled", false)
        .into();
    assert_eq!(render_node(&off, &ctx).attr("disabled"), None);
}

#[test]
fn test_block_instances_are_counted_per_block() {
    let blocks = hero_catalog();
    let ctx = RenderContext::new(&blocks);
    let page = Page::new("home", "/")
        .with_section(BlockReference::new("hero").with_var("title", "One"))
        .with_section(BlockReference::new("cta").with_var("label", "A"))
        .with_section(BlockReference::new("hero").with_var("title", "Two"))
        .with_section(BlockReference::new("cta").with_var("label", "B"));

    let rendered = render_page(&page, &ctx);
    let instances: Vec<(Option<&str>, Option<&str>)> = rendered
        .nodes
        .iter()
        .map(|n| (n.attr("data-block"), n.attr("data-block-instance")))
        .collect();
    assert_eq!(
        instances,
        vec![
            (Some("hero"), Some("0")),
            (Some("cta"), Some("0")),
            (Some("hero"), Some("1")),
            (Some("cta"), Some("1")),
        ]
    );

    // counters restart with the next render
    let again = render_page(&page, &ctx);
    assert_eq!(again.nodes[0].attr("data-block-instance"), Some("0"));
}

#[test]
fn test_nested_block_references() {
    let blocks = vec![
        Block::new(
            "page-header",
            Component::new("header").with_child(BlockReference::new("logo").with_var("alt", "$brand")),
        ),
        Block::new(
            "logo",
            Component::new("image")
                .with_prop("src", "/logo.svg")
                .with_prop("alt", "$alt"),
        ),
    ];
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("page-header")
        .with_var("brand", "Acme")
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.tag(), Some("header"));
    let image = vnode.find(&|n| n.tag() == Some("img")).unwrap();
    assert_eq!(image.attr("alt"), Some("Acme"));
    assert_eq!(image.attr("data-block"), Some("logo"));
}

#[test]
fn test_heading_level_and_flex_layout() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);

    let heading: Node = Component::new("heading")
        .with_prop("level", 3)
        .with_text("Title")
        .into();
    let vnode = render_node(&heading, &ctx);
    assert_eq!(vnode.tag(), Some("h3"));
    assert_eq!(vnode.attr("level"), None);

    let flex: Node = Component::new("flex")
        .with_prop("direction", "column")
        .with_prop("justify", "center")
        .into();
    let vnode = render_node(&flex, &ctx);
    assert_eq!(vnode.attr("class"), Some("flex"));
    assert_eq!(vnode.style("display"), Some("flex"));
    assert_eq!(vnode.style("flex-direction"), Some("column"));
    assert_eq!(vnode.style("justify-content"), Some("center"));
}

#[test]
fn test_custom_html_is_raw() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);
    let node: Node = Component::new("customHTML")
        .with_content("<iframe src=\"https://maps.example\"></iframe>")
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.tag(), Some("div"));
    assert_eq!(
        vnode.children(),
        &[VNode::raw("<iframe src=\"https://maps.example\"></iframe>")]
    );
}

#[test]
fn test_render_page_from_app_json() {
    let app = App::from_json(
        r##"{
            "name": "Acme",
            "theme": { "colors": { "primary": "#0055ff" }, "spacing": { "section": "4rem" } },
            "languages": {
                "default": "en-US",
                "supported": [
                    { "code": "en-US", "label": "English" },
                    { "code": "ar", "label": "العربية", "direction": "rtl" }
                ],
                "translations": {
                    "en-US": { "hero.title": "Welcome" },
                    "ar": { "hero.title": "أهلا" }
                }
            },
            "blocks": [
                { "name": "hero", "type": "section", "children": [
                    { "type": "h1", "props": { "style": { "color": "$theme.colors.primary" } }, "children": ["$t:hero.title"] }
                ] }
            ],
            "pages": [
                { "name": "home", "path": "/", "meta": { "title": "Home" }, "sections": [ { "block": "hero" } ] }
            ]
        }"##,
    )
    .unwrap();

    let ctx = RenderContext::for_app(&app, Some("ar"));
    let rendered = render_page(&app.pages[0], &ctx);

    assert_eq!(rendered.lang, "ar");
    assert_eq!(rendered.direction, Direction::Rtl);
    assert_eq!(rendered.title.as_deref(), Some("Home"));
    assert!(rendered.issues.is_empty(), "{:?}", rendered.issues);

    let languages = rendered.languages.as_ref().unwrap();
    assert_eq!(languages.supported.len(), 2);
    assert!(languages.translations.is_empty());

    let section = &rendered.nodes[0];
    assert_eq!(section.style("padding"), Some("4rem"));
    let heading = section.find(&|n| n.tag() == Some("h1")).unwrap();
    assert_eq!(heading.text_content(), "أهلا");
    assert_eq!(heading.attr("data-translation-key"), Some("hero.title"));
    assert_eq!(
        heading.attr("data-translations"),
        Some(r#"{"ar":"أهلا","en-US":"Welcome"}"#)
    );
}

#[test]
fn test_renderer_keeps_state_across_calls() {
    let blocks = hero_catalog();
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("cta").with_var("label", "x").into();

    let mut renderer = Renderer::new(&ctx);
    let first = renderer.render(&node);
    let second = renderer.render(&node);
    assert_eq!(first.attr("data-block-instance"), Some("0"));
    assert_eq!(second.attr("data-block-instance"), Some("1"));
    assert!(renderer.issues().is_empty());
}

#[test]
fn test_language_switcher_lists_supported_languages() {
    let app = App::from_json(
        r#"{
            "name": "Acme",
            "languages": {
                "default": "en-US",
                "supported": [
                    { "code": "en-US", "label": "English" },
                    { "code": "fr-FR", "label": "Français" }
                ]
            }
        }"#,
    )
    .unwrap();
    let ctx = RenderContext::for_app(&app, Some("fr-FR"));
    let node: Node = Component::new("language-switcher").into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.attr("class"), Some("language-switcher"));
    assert_eq!(vnode.attr("data-current-language"), Some("fr-FR"));
    let buttons = vnode.children();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].attr("data-language"), Some("en-US"));
    assert_eq!(buttons[0].attr("aria-pressed"), Some("false"));
    assert_eq!(buttons[1].attr("aria-pressed"), Some("true"));
    assert_eq!(buttons[1].text_content(), "Français");
}

#[test]
fn test_translated_texts_among_siblings_are_wrapped() {
    let languages = Languages::new(
        "en-US",
        vec![
            LanguageConfig::new("en-US", "English"),
            LanguageConfig::new("fr-FR", "Français"),
        ],
    )
    .with_translation("en-US", "a", "Hello")
    .with_translation("fr-FR", "a", "Bonjour")
    .with_translation("en-US", "b", "World")
    .with_translation("fr-FR", "b", "Monde");
    let ctx = RenderContext::new(&[])
        .with_languages(&languages)
        .with_lang("fr-FR");
    let node: Node = Component::new("button")
        .with_child(Component::new("icon").with_prop("name", "star"))
        .with_text("$t:a")
        .with_text(" ")
        .with_text("$t:b")
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.attr("data-translation-key"), None);
    assert_eq!(vnode.attr("data-translations"), None);
    assert_eq!(vnode.text_content(), "Bonjour Monde");

    let children = vnode.children();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0].attr("data-icon"), Some("star"));
    assert_eq!(children[1].tag(), Some("span"));
    assert_eq!(children[1].attr("data-translation-key"), Some("a"));
    assert_eq!(
        children[1].attr("data-translations"),
        Some(r#"{"en-US":"Hello","fr-FR":"Bonjour"}"#)
    );
    assert_eq!(children[2], VNode::text(" "));
    assert_eq!(children[3].attr("data-translation-key"), Some("b"));
    assert_eq!(
        children[3].attr("data-translations"),
        Some(r#"{"en-US":"World","fr-FR":"Monde"}"#)
    );
}
