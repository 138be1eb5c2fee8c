use pagekit_schema::{Direction, Languages};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::RenderIssue;

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node, escaped on output
    Text { content: String },

    /// Trusted markup from `customHTML` components, emitted verbatim
    Raw { html: String },

    /// Visible error placeholder. Rendering continues around it.
    Error {
        code: String,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn raw(html: impl Into<String>) -> Self {
        VNode::Raw { html: html.into() }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>, hint: Option<String>) -> Self {
        VNode::Error {
            code: code.into(),
            message: message.into(),
            hint,
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_attrs(mut self, new_attributes: BTreeMap<String, String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.extend(new_attributes);
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_styles(mut self, new_styles: BTreeMap<String, String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.extend(new_styles);
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    /// Concatenated visible text of this subtree, error placeholders included
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            VNode::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            VNode::Text { content } => out.push_str(content),
            VNode::Raw { html } => out.push_str(html),
            VNode::Error { message, hint, .. } => {
                out.push_str(message);
                if let Some(hint) = hint {
                    out.push(' ');
                    out.push_str(hint);
                }
            }
        }
    }

    /// First node of this subtree (pre-order) matching `predicate`
    pub fn find(&self, predicate: &dyn Fn(&VNode) -> bool) -> Option<&VNode> {
        if predicate(self) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(predicate))
    }
}

/// Result of rendering one page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub lang: String,
    pub direction: Direction,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Language settings for the client switcher, without the translation tables
    pub languages: Option<Languages>,
    pub nodes: Vec<VNode>,
    pub issues: Vec<RenderIssue>,
}
