/// Error recovery tests
///
/// Broken input never aborts a render. Each problem turns into a local
/// fallback and an entry in the page's issue list while the rest of the
/// page renders normally.
use crate::context::{RenderContext, RenderOptions};
use crate::error::RenderIssue;
use crate::renderer::{render_node, render_page};
use crate::vdom::VNode;
use pagekit_schema::{Block, BlockReference, Component, Node, Page};

#[test]
fn test_missing_block_renders_placeholder() {
    let blocks = vec![
        Block::new("hero", Component::new("section").with_text("Hero")),
        Block::new("footer", Component::new("footer").with_text("Footer")),
    ];
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("pricing").into();

    match render_node(&node, &ctx) {
        VNode::Error {
            code,
            message,
            hint,
        } => {
            assert_eq!(code, "block-not-found");
            assert_eq!(message, "Block not found: \"pricing\"");
            assert_eq!(hint.as_deref(), Some("Available blocks: hero, footer"));
        }
        other => panic!("Expected Error node, got {:?}", other),
    }
}

#[test]
fn test_missing_block_with_empty_catalog() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("anything").into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(
        vnode.text_content(),
        "Block not found: \"anything\" Available blocks: (none)"
    );
}

#[test]
fn test_siblings_survive_missing_block() {
    let blocks = vec![Block::new("cta", Component::new("button").with_text("Go"))];
    let ctx = RenderContext::new(&blocks);
    let page = Page::new("home", "/")
        .with_section(Component::new("h1").with_text("Before"))
        .with_section(BlockReference::new("gone"))
        .with_section(BlockReference::new("cta"));

    let rendered = render_page(&page, &ctx);
    assert_eq!(rendered.nodes.len(), 3);
    assert_eq!(rendered.nodes[0].text_content(), "Before");
    assert!(matches!(rendered.nodes[1], VNode::Error { .. }));
    assert_eq!(rendered.nodes[2].tag(), Some("button"));
    assert_eq!(
        rendered.issues,
        vec![RenderIssue::BlockNotFound {
            name: "gone".to_string(),
            available: vec!["cta".to_string()],
        }]
    );
}

#[test]
fn test_missing_block_inside_component_is_local() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);
    let node: Node = Component::new("div")
        .with_child(Component::new("span").with_text("kept"))
        .with_child(BlockReference::new("missing"))
        .into();

    let vnode = render_node(&node, &ctx);
    assert_eq!(vnode.tag(), Some("div"));
    assert_eq!(vnode.children().len(), 2);
    assert_eq!(vnode.children()[0].text_content(), "kept");
    assert!(matches!(vnode.children()[1], VNode::Error { .. }));
}

#[test]
fn test_unknown_type_renders_container() {
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks);
    let page = Page::new("home", "/").with_section(
        Component::new("carousel")
            .with_prop("id", "slides")
            .with_child(Component::new("image").with_prop("src", "/1.png")),
    );

    let rendered = render_page(&page, &ctx);
    let node = &rendered.nodes[0];
    assert_eq!(node.tag(), Some("div"));
    assert_eq!(node.attr("data-component-type"), Some("carousel"));
    assert_eq!(node.attr("id"), Some("slides"));
    assert_eq!(node.children()[0].tag(), Some("img"));
    assert_eq!(
        rendered.issues,
        vec![RenderIssue::UnknownComponentType {
            component_type: "carousel".to_string()
        }]
    );
}

#[test]
fn test_self_referencing_block() {
    let blocks = vec![Block::new(
        "loop",
        Component::new("div").with_child(BlockReference::new("loop")),
    )];
    let ctx = RenderContext::new(&blocks);
    let node: Node = BlockReference::new("loop").into();

    let rendered = render_page(&Page::new("p", "/").with_section(node), &ctx);
    let outer = &rendered.nodes[0];
    assert_eq!(outer.tag(), Some("div"));
    match &outer.children()[0] {
        VNode::Error { code, hint, .. } => {
            assert_eq!(code, "circular-block-reference");
            assert!(hint.as_deref().unwrap().contains("references itself"));
        }
        other => panic!("Expected Error node, got {:?}", other),
    }
    assert_eq!(
        rendered.issues,
        vec![RenderIssue::CircularBlockReference {
            chain: vec!["loop".to_string(), "loop".to_string()],
        }]
    );
}

#[test]
fn test_recursion_limit() {
    let mut node = Component::new("div").with_text("leaf");
    for _ in 0..10 {
        node = Component::new("div").with_child(node);
    }
    let blocks = Vec::new();
    let ctx = RenderContext::new(&blocks).with_options(RenderOptions { max_depth: 4 });

    let rendered = render_page(&Page::new("deep", "/").with_section(node), &ctx);
    let cut = rendered.nodes[0]
        .find(&|n| matches!(n, VNode::Error { .. }))
        .unwrap();
    match cut {
        VNode::Error { code, .. } => assert_eq!(code, "recursion-limit-exceeded"),
        _ => unreachable!(),
    }
    match &rendered.issues[..] {
        [RenderIssue::RecursionLimitExceeded { limit, path }] => {
            assert_eq!(*limit, 4);
            assert_eq!(path.len(), 5);
        }
        other => panic!("Expected one recursion issue, got {:?}", other),
    }
    assert!(!rendered.nodes[0].text_content().contains("leaf"));
}
