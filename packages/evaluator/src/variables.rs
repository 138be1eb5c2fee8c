//! `$name` substitution for block references.
//!
//! Substitution is single pass: a value that came out of `vars` is never
//! looked up again, so `$a -> "$b"` stays `"$b"`. Unknown names keep the
//! literal placeholder so broken references show up in the rendered page.

use crate::placeholder::variable_name;
use pagekit_schema::{
    BlockReference, Child, ClickInteraction, Component, EntranceAnimation, HoverInteraction,
    Interactions, Node, Props, ScrollInteraction, VarValue, Vars,
};
use serde_json::Value;

/// The variable a whole-string placeholder refers to, if it is defined
pub fn lookup_variable<'v>(text: &str, vars: &'v Vars) -> Option<&'v VarValue> {
    variable_name(text).and_then(|name| vars.get(name))
}

pub fn substitute_value(value: &Value, vars: &Vars) -> Value {
    match value {
        Value::String(text) => lookup_variable(text, vars)
            .map(VarValue::to_value)
            .unwrap_or_else(|| value.clone()),
        other => other.clone(),
    }
}

/// Substitution for text positions (`content`, string children)
pub fn substitute_text(text: &str, vars: &Vars) -> String {
    lookup_variable(text, vars)
        .map(VarValue::as_text)
        .unwrap_or_else(|| text.to_string())
}

/// Substitutes every string in `props`, recursing into objects and arrays
pub fn substitute_props(props: &Props, vars: &Vars) -> Props {
    props
        .iter()
        .map(|(key, value)| (key.clone(), substitute_nested(value, vars)))
        .collect()
}

fn substitute_nested(value: &Value, vars: &Vars) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), substitute_nested(value, vars)))
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| substitute_nested(item, vars)).collect())
        }
        other => substitute_value(other, vars),
    }
}

pub fn substitute_children(children: &[Child], vars: &Vars) -> Vec<Child> {
    children
        .iter()
        .map(|child| match child {
            Child::Text(text) => Child::Text(substitute_text(text, vars)),
            Child::Node(node) => Child::Node(substitute_node(node, vars)),
        })
        .collect()
}

pub fn substitute_component(component: &Component, vars: &Vars) -> Component {
    Component {
        component_type: component.component_type.clone(),
        props: substitute_props(&component.props, vars),
        children: substitute_children(&component.children, vars),
        content: component
            .content
            .as_deref()
            .map(|content| substitute_text(content, vars)),
        interactions: substitute_interactions(&component.interactions, vars),
    }
}

/// Nested references forward outer variables: `{ block: "x", vars: { a: "$title" } }`
fn substitute_node(node: &Node, vars: &Vars) -> Node {
    match node {
        Node::Component(component) => Node::Component(substitute_component(component, vars)),
        Node::Reference(reference) => Node::Reference(BlockReference {
            block: reference.block.clone(),
            vars: reference
                .vars
                .iter()
                .map(|(name, value)| {
                    let value = match value {
                        VarValue::String(text) => {
                            lookup_variable(text, vars).cloned().unwrap_or_else(|| value.clone())
                        }
                        other => other.clone(),
                    };
                    (name.clone(), value)
                })
                .collect(),
            unknown_fields: reference.unknown_fields.clone(),
        }),
    }
}

fn substitute_interactions(interactions: &Interactions, vars: &Vars) -> Interactions {
    let text = |value: &Option<String>| value.as_deref().map(|v| substitute_text(v, vars));

    Interactions {
        hover: interactions.hover.as_ref().map(|hover| HoverInteraction {
            transform: text(&hover.transform),
            opacity: hover.opacity,
            scale: hover.scale,
            shadow: text(&hover.shadow),
            background_color: text(&hover.background_color),
            color: text(&hover.color),
            border_color: text(&hover.border_color),
            duration: text(&hover.duration),
            easing: text(&hover.easing),
        }),
        click: interactions.click.as_ref().map(|click| ClickInteraction {
            animation: text(&click.animation),
            navigate: text(&click.navigate),
            open_url: text(&click.open_url),
            open_in_new_tab: click.open_in_new_tab,
            scroll_to: text(&click.scroll_to),
            toggle_element: text(&click.toggle_element),
            submit_form: text(&click.submit_form),
        }),
        scroll: interactions.scroll.as_ref().map(|scroll| ScrollInteraction {
            animation: substitute_text(&scroll.animation, vars),
            threshold: scroll.threshold,
            delay: text(&scroll.delay),
            duration: text(&scroll.duration),
            once: scroll.once,
        }),
        entrance: interactions.entrance.as_ref().map(|entrance| EntranceAnimation {
            animation: substitute_text(&entrance.animation, vars),
            delay: text(&entrance.delay),
            duration: text(&entrance.duration),
            stagger: text(&entrance.stagger),
        }),
    }
}
