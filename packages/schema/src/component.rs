use crate::interactions::Interactions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Component props. Ordered so that rendering never depends on hash order.
pub type Props = BTreeMap<String, Value>;

/// Values a block reference passes into its block's `$name` placeholders.
pub type Vars = BTreeMap<String, VarValue>;

/// Scalar value carried by a block reference variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VarValue {
    String(String),
    Number(serde_json::Number),
    Boolean(bool),
}

impl VarValue {
    pub fn to_value(&self) -> Value {
        match self {
            VarValue::String(s) => Value::String(s.clone()),
            VarValue::Number(n) => Value::Number(n.clone()),
            VarValue::Boolean(b) => Value::Bool(*b),
        }
    }

    /// Text form used when the variable lands in a text position
    pub fn as_text(&self) -> String {
        match self {
            VarValue::String(s) => s.clone(),
            VarValue::Number(n) => n.to_string(),
            VarValue::Boolean(b) => b.to_string(),
        }
    }
}

impl fmt::Display for VarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::String(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::String(value)
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Boolean(value)
    }
}

impl From<i32> for VarValue {
    fn from(value: i32) -> Self {
        VarValue::Number(value.into())
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Number(value.into())
    }
}

/// A node in the render tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: String,

    #[serde(default, skip_serializing_if = "Props::is_empty")]
    pub props: Props,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Interactions::is_empty")]
    pub interactions: Interactions,
}

impl Component {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..Default::default()
        }
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(Child::Node(child.into()));
        self
    }

    pub fn with_interactions(mut self, interactions: Interactions) -> Self {
        self.interactions = interactions;
        self
    }

    /// True when the component would render nothing inside itself
    pub fn is_hollow(&self) -> bool {
        self.children.is_empty() && self.content.as_deref().map_or(true, str::is_empty)
    }
}

/// Pointer to a named block. Accepts both `{ "block": .. }` and `{ "$ref": .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReference {
    #[serde(alias = "$ref")]
    pub block: String,

    #[serde(default, skip_serializing_if = "Vars::is_empty")]
    pub vars: Vars,

    /// Keys that are neither `block` nor `vars`, kept so validation can name them
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, Value>,
}

impl BlockReference {
    pub fn new(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            vars: Vars::new(),
            unknown_fields: BTreeMap::new(),
        }
    }

    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

/// Either a concrete component or a reference to a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Reference(BlockReference),
    Component(Component),
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Node::Component(component)
    }
}

impl From<BlockReference> for Node {
    fn from(reference: BlockReference) -> Self {
        Node::Reference(reference)
    }
}

/// Entry of a component's `children`: literal text or a nested node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    Text(String),
    Node(Node),
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<Component> for Child {
    fn from(component: Component) -> Self {
        Child::Node(Node::Component(component))
    }
}

impl From<BlockReference> for Child {
    fn from(reference: BlockReference) -> Self {
        Child::Node(Node::Reference(reference))
    }
}

/// A named, reusable component template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,

    #[serde(flatten)]
    pub template: Component,
}

impl Block {
    pub fn new(name: impl Into<String>, template: Component) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}
