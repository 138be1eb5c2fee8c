//! Structural checks for the model invariants.
//!
//! Validation is advisory: the renderer degrades gracefully on every issue
//! reported here. The CLI `check` command surfaces the list to authors.

use crate::component::{Child, Component, Node};
use crate::interactions::{is_css_duration, Interactions};
use crate::languages::Languages;
use crate::page::App;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    #[error("{path}: component type must not be empty")]
    EmptyType { path: String },

    #[error("{path}: invalid prop key '{key}'")]
    InvalidPropKey { path: String, key: String },

    #[error("{path}: invalid block name '{name}' (expected kebab-case)")]
    InvalidBlockName { path: String, name: String },

    #[error("{path}: duplicate block name '{name}'")]
    DuplicateBlockName { path: String, name: String },

    #[error("{path}: block reference has an empty name")]
    EmptyBlockReference { path: String },

    #[error("{path}: unknown block reference field '{key}' (expected block, $ref or vars)")]
    UnknownReferenceField { path: String, key: String },

    #[error("{path}: invalid duration '{value}' for {field}")]
    InvalidDuration {
        path: String,
        field: String,
        value: String,
    },

    #[error("{path}: scroll threshold {value} is outside 0..=1")]
    InvalidThreshold { path: String, value: f64 },

    #[error("{path}: language '{code}' is not in the supported list")]
    UnsupportedLanguage { path: String, code: String },
}

/// `^[a-zA-Z][a-zA-Z0-9]*$`
pub fn is_valid_prop_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

/// `^[a-z][a-z0-9-]*$`
pub fn is_valid_block_name(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

pub fn validate_app(app: &App) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for (index, block) in app.blocks.iter().enumerate() {
        let path = format!("blocks[{}]", index);
        if !is_valid_block_name(&block.name) {
            issues.push(SchemaIssue::InvalidBlockName {
                path: path.clone(),
                name: block.name.clone(),
            });
        }
        if !seen.insert(block.name.as_str()) {
            issues.push(SchemaIssue::DuplicateBlockName {
                path: path.clone(),
                name: block.name.clone(),
            });
        }
        validate_component(&block.template, &path, &mut issues);
    }

    for (page_index, page) in app.pages.iter().enumerate() {
        for (index, section) in page.sections.iter().enumerate() {
            let path = format!("pages[{}].sections[{}]", page_index, index);
            validate_node(section, &path, &mut issues);
        }
        if let (Some(lang), Some(languages)) = (&page.meta.lang, &app.languages) {
            if !languages.is_supported(lang) {
                issues.push(SchemaIssue::UnsupportedLanguage {
                    path: format!("pages[{}].meta.lang", page_index),
                    code: lang.clone(),
                });
            }
        }
    }

    if let Some(languages) = &app.languages {
        validate_languages(languages, &mut issues);
    }

    issues
}

pub fn validate_node(node: &Node, path: &str, issues: &mut Vec<SchemaIssue>) {
    match node {
        Node::Reference(reference) => {
            if reference.block.is_empty() {
                issues.push(SchemaIssue::EmptyBlockReference {
                    path: path.to_string(),
                });
            }
            for key in reference.unknown_fields.keys() {
                issues.push(SchemaIssue::UnknownReferenceField {
                    path: path.to_string(),
                    key: key.clone(),
                });
            }
        }
        Node::Component(component) => validate_component(component, path, issues),
    }
}

fn validate_component(component: &Component, path: &str, issues: &mut Vec<SchemaIssue>) {
    if component.component_type.trim().is_empty() {
        issues.push(SchemaIssue::EmptyType {
            path: path.to_string(),
        });
    }

    for key in component.props.keys() {
        if !is_valid_prop_key(key) {
            issues.push(SchemaIssue::InvalidPropKey {
                path: path.to_string(),
                key: key.clone(),
            });
        }
    }

    validate_interactions(&component.interactions, path, issues);

    for (index, child) in component.children.iter().enumerate() {
        if let Child::Node(node) = child {
            validate_node(node, &format!("{}.children[{}]", path, index), issues);
        }
    }
}

fn validate_interactions(interactions: &Interactions, path: &str, issues: &mut Vec<SchemaIssue>) {
    let mut durations: Vec<(&str, Option<&String>)> = Vec::new();

    if let Some(hover) = &interactions.hover {
        durations.push(("hover.duration", hover.duration.as_ref()));
    }
    if let Some(scroll) = &interactions.scroll {
        durations.push(("scroll.delay", scroll.delay.as_ref()));
        durations.push(("scroll.duration", scroll.duration.as_ref()));
        if let Some(threshold) = scroll.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                issues.push(SchemaIssue::InvalidThreshold {
                    path: path.to_string(),
                    value: threshold,
                });
            }
        }
    }
    if let Some(entrance) = &interactions.entrance {
        durations.push(("entrance.delay", entrance.delay.as_ref()));
        durations.push(("entrance.duration", entrance.duration.as_ref()));
        durations.push(("entrance.stagger", entrance.stagger.as_ref()));
    }

    for (field, value) in durations {
        if let Some(value) = value {
            if !is_css_duration(value) {
                issues.push(SchemaIssue::InvalidDuration {
                    path: path.to_string(),
                    field: field.to_string(),
                    value: value.clone(),
                });
            }
        }
    }
}

fn validate_languages(languages: &Languages, issues: &mut Vec<SchemaIssue>) {
    if !languages.is_supported(&languages.default) {
        issues.push(SchemaIssue::UnsupportedLanguage {
            path: "languages.default".to_string(),
            code: languages.default.clone(),
        });
    }
    if let Some(fallback) = &languages.fallback {
        if !languages.is_supported(fallback) {
            issues.push(SchemaIssue::UnsupportedLanguage {
                path: "languages.fallback".to_string(),
                code: fallback.clone(),
            });
        }
    }
}
