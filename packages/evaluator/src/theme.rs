//! `$theme.a.b` token resolution.
//!
//! Resolution never fails: a path that does not exist in the theme leaves
//! the token string in place. With no theme at all every token is literal.

use crate::placeholder::{classify, Placeholder};
use pagekit_schema::{Props, Theme};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenLookup<'t> {
    NotAToken,
    Resolved(&'t Value),
    Unresolved,
}

pub fn lookup_theme_token<'t>(text: &str, theme: Option<&'t Theme>) -> TokenLookup<'t> {
    let Placeholder::ThemePath(segments) = classify(text) else {
        return TokenLookup::NotAToken;
    };
    match theme.and_then(|theme| theme.get_path(segments.as_slice())) {
        Some(value) => TokenLookup::Resolved(value),
        None => TokenLookup::Unresolved,
    }
}

pub fn substitute_theme_token(value: &Value, theme: Option<&Theme>) -> Value {
    match value {
        Value::String(text) => match lookup_theme_token(text, theme) {
            TokenLookup::Resolved(resolved) => resolved.clone(),
            TokenLookup::NotAToken | TokenLookup::Unresolved => value.clone(),
        },
        other => other.clone(),
    }
}

/// Returns a new mapping with tokens resolved in strings and nested objects.
/// Arrays are left as they are.
pub fn substitute_props_theme_tokens(props: &Props, theme: Option<&Theme>) -> Props {
    if theme.is_none() {
        return props.clone();
    }
    props
        .iter()
        .map(|(key, value)| (key.clone(), substitute_nested(value, theme)))
        .collect()
}

fn substitute_nested(value: &Value, theme: Option<&Theme>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), substitute_nested(value, theme)))
                .collect(),
        ),
        other => substitute_theme_token(other, theme),
    }
}

/// Tokens in `props` that do not resolve against `theme`, in prop order.
/// Without a theme nothing is reported.
pub fn unresolved_theme_tokens(props: &Props, theme: Option<&Theme>) -> Vec<String> {
    let mut unresolved = Vec::new();
    if theme.is_some() {
        for value in props.values() {
            collect_unresolved(value, theme, &mut unresolved);
        }
    }
    unresolved
}

fn collect_unresolved(value: &Value, theme: Option<&Theme>, out: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            if lookup_theme_token(text, theme) == TokenLookup::Unresolved {
                out.push(text.clone());
            }
        }
        Value::Object(map) => {
            for value in map.values() {
                collect_unresolved(value, theme, out);
            }
        }
        _ => {}
    }
}

/// Text form of a resolved value for CSS and attribute positions
pub fn value_to_css(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
