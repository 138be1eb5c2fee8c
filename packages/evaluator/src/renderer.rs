//! Recursive component renderer.
//!
//! Walks a page's node tree and produces one [`VNode`] per node. Every
//! problem is contained where it happens: a missing block becomes a visible
//! placeholder, an unknown type a plain container, and the siblings keep
//! rendering.

use crate::blocks::resolve_block;
use crate::context::RenderContext;
use crate::error::RenderIssue;
use crate::i18n::direction_for;
use crate::props::{build_component_props, BlockTag, PreparedChild, PropsConfig};
use crate::registry::{render_kind, ComponentKind};
use crate::vdom::{RenderedPage, VNode};
use pagekit_schema::{BlockReference, Component, Node, Page};
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};

/// Per-render walk state.
///
/// The context is shared and read-only; the block resolution stack, depth
/// and instance counters live here and belong to a single render.
pub struct Renderer<'a> {
    context: &'a RenderContext<'a>,
    /// Blocks currently being expanded, outermost first
    resolving: Vec<String>,
    /// Node labels from the root to the current node
    path: Vec<String>,
    instance_counters: BTreeMap<String, usize>,
    issues: Vec<RenderIssue>,
}

impl<'a> Renderer<'a> {
    pub fn new(context: &'a RenderContext<'a>) -> Self {
        Self {
            context,
            resolving: Vec::new(),
            path: Vec::new(),
            instance_counters: BTreeMap::new(),
            issues: Vec::new(),
        }
    }

    /// Renders one node with a fresh walk state
    pub fn render_node(node: &Node, context: &RenderContext<'_>) -> VNode {
        let mut renderer = Renderer::new(context);
        let vnode = renderer.render(node);
        renderer.report();
        vnode
    }

    #[instrument(skip(page, context), fields(page = %page.name, path = %page.path, lang = %context.current_lang))]
    pub fn render_page(page: &Page, context: &RenderContext<'_>) -> RenderedPage {
        info!(sections = page.sections.len(), "Rendering page");

        let mut renderer = Renderer::new(context);
        let nodes: Vec<VNode> = page
            .sections
            .iter()
            .map(|section| renderer.render(section))
            .collect();
        renderer.report();

        let languages = context.languages.map(|languages| {
            let mut languages = languages.clone();
            languages.translations.clear();
            languages
        });

        info!(
            nodes = nodes.len(),
            issues = renderer.issues.len(),
            "Page rendered"
        );

        RenderedPage {
            lang: context.current_lang.clone(),
            direction: direction_for(&context.current_lang, context.languages),
            title: page.meta.title.clone(),
            description: page.meta.description.clone(),
            languages,
            nodes,
            issues: renderer.issues,
        }
    }

    /// Renders `node`, continuing this renderer's walk state
    pub fn render(&mut self, node: &Node) -> VNode {
        let limit = self.context.options.max_depth;
        if self.path.len() >= limit {
            let mut path = self.path.clone();
            path.push(node_label(node));
            error!(limit, path = ?path, "Recursion limit exceeded");
            let message = format!("Recursion limit of {} exceeded", limit);
            let hint = path.join(" → ");
            self.issues
                .push(RenderIssue::RecursionLimitExceeded { limit, path });
            return VNode::error("recursion-limit-exceeded", message, Some(hint));
        }

        self.path.push(node_label(node));
        let vnode = match node {
            Node::Reference(reference) => self.render_reference(reference),
            Node::Component(component) => self.render_component(component, None),
        };
        self.path.pop();
        vnode
    }

    pub fn issues(&self) -> &[RenderIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<RenderIssue> {
        self.issues
    }

    fn render_reference(&mut self, reference: &BlockReference) -> VNode {
        let name = reference.block.as_str();
        debug!(block = name, stack = ?self.resolving, "Resolving block");

        if self.resolving.iter().any(|open| open == name) {
            let mut chain = self.resolving.clone();
            chain.push(name.to_string());

            let hint = if chain.len() == 2 && chain[0] == name {
                format!("Block '{}' references itself.", name)
            } else {
                "Blocks must not form a reference cycle.".to_string()
            };
            error!(block = name, chain = ?chain, "Circular block reference detected");

            let message = format!("Circular block reference: {}", chain.join(" → "));
            self.issues.push(RenderIssue::CircularBlockReference { chain });
            return VNode::error("circular-block-reference", message, Some(hint));
        }

        let resolved = match resolve_block(name, self.context.blocks, &reference.vars) {
            Ok(resolved) => resolved,
            Err(missing) => {
                warn!(block = name, available = ?missing.available, "Block not found");
                let hint = if missing.available.is_empty() {
                    "Available blocks: (none)".to_string()
                } else {
                    format!("Available blocks: {}", missing.available.join(", "))
                };
                let message = missing.to_string();
                self.issues.push(RenderIssue::BlockNotFound {
                    name: missing.name,
                    available: missing.available,
                });
                return VNode::error("block-not-found", message, Some(hint));
            }
        };

        let counter = self
            .instance_counters
            .entry(resolved.name.clone())
            .or_insert(0);
        let instance = *counter;
        *counter += 1;

        self.resolving.push(resolved.name.clone());
        let vnode = self.render_component(
            &resolved.component,
            Some(BlockTag {
                name: &resolved.name,
                instance,
            }),
        );
        self.resolving.pop();
        vnode
    }

    fn render_component(&mut self, component: &Component, block: Option<BlockTag<'_>>) -> VNode {
        let context = self.context;
        let kind = ComponentKind::parse(&component.component_type);
        if let ComponentKind::Unknown(component_type) = &kind {
            debug!(component_type = %component_type, "Unknown component type");
            self.issues.push(RenderIssue::UnknownComponentType {
                component_type: component_type.clone(),
            });
        }

        let built = build_component_props(PropsConfig {
            component,
            kind: &kind,
            block,
            theme: context.theme,
            languages: context.languages,
            current_lang: &context.current_lang,
        });
        self.issues.extend(built.issues.iter().cloned());

        let mut children = Vec::with_capacity(built.children.len() + 1);
        if let Some(content) = &built.content {
            children.push(text_node(content, &built.content_attributes));
        }
        for child in &built.children {
            match child {
                PreparedChild::Text(text) => children.push(VNode::text(text.clone())),
                PreparedChild::Translated { text, attributes } => {
                    children.push(text_node(text, attributes))
                }
                PreparedChild::Node(node) => children.push(self.render(node)),
            }
        }

        render_kind(&kind, built, children, context)
    }

    fn report(&self) {
        for issue in &self.issues {
            warn!(code = issue.code(), "{}", issue);
        }
    }
}

/// Plain text, or a `<span>` carrying its own translation attributes
fn text_node(text: &str, attributes: &BTreeMap<String, String>) -> VNode {
    if attributes.is_empty() {
        VNode::text(text)
    } else {
        VNode::element("span")
            .with_attrs(attributes.clone())
            .with_child(VNode::text(text))
    }
}

fn node_label(node: &Node) -> String {
    match node {
        Node::Reference(reference) => format!("@{}", reference.block),
        Node::Component(component) => component.component_type.clone(),
    }
}

/// Renders every section of `page` in the context's current language
pub fn render_page(page: &Page, context: &RenderContext<'_>) -> RenderedPage {
    Renderer::render_page(page, context)
}

/// Renders a single node
pub fn render_node(node: &Node, context: &RenderContext<'_>) -> VNode {
    Renderer::render_node(node, context)
}
