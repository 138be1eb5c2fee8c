//! # Pagekit Schema
//!
//! Typed model for pagekit applications: pages, components, blocks, block
//! references, theme, languages and interaction configs. Everything here is
//! plain data that deserializes from the JSON app configuration.

pub mod component;
pub mod error;
pub mod interactions;
pub mod languages;
pub mod page;
pub mod theme;
pub mod validate;

pub use component::{Block, BlockReference, Child, Component, Node, Props, VarValue, Vars};
pub use error::SchemaError;
pub use interactions::{
    is_css_duration, ClickInteraction, EntranceAnimation, HoverInteraction, Interactions,
    ScrollInteraction,
};
pub use languages::{Direction, LanguageConfig, Languages};
pub use page::{App, Page, PageMeta};
pub use theme::Theme;
pub use validate::{validate_app, SchemaIssue};
