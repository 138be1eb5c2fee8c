//! # Pagekit Evaluator
//!
//! Renders pagekit pages to a virtual DOM.
//!
//! ## Pipeline
//!
//! For every node of a page:
//!
//! 1. A block reference is looked up in the block catalog and its `$variable`
//!    placeholders are substituted with the reference's `vars`.
//! 2. `$theme.*` tokens in props are replaced with theme values.
//! 3. `$t:key` text is translated through the language fallback chain.
//! 4. Props become attributes and inline styles; interaction configs become
//!    `data-*` attributes for the client scripts.
//! 5. The component `type` is dispatched to its markup and children recurse.
//!
//! ## Determinism
//!
//! Rendering is a pure function of the page and the [`RenderContext`]. All
//! maps are `BTreeMap`, block instance counters restart with every render and
//! nothing reads the clock, randomness or the environment. Two renders of the
//! same input produce the same tree. See `tests/test_determinism.rs`.
//!
//! ## Recursion protection
//!
//! Blocks may reference other blocks. A reference to a block that is already
//! being expanded on the current path renders as a `circular-block-reference`
//! placeholder, and nesting deeper than [`RenderOptions::max_depth`] renders
//! as `recursion-limit-exceeded`. Both stay local to the offending subtree.
//!
//! ## Error recovery
//!
//! Rendering does not fail. Missing blocks, unknown types, unresolved theme
//! tokens and missing translations each degrade locally and are collected in
//! [`RenderedPage::issues`].

pub mod blocks;
pub mod context;
pub mod error;
pub mod i18n;
pub mod interactions;
pub mod placeholder;
pub mod props;
pub mod registry;
pub mod renderer;
pub mod theme;
pub mod variables;
pub mod vdom;

pub use blocks::{resolve_block, BlockNotFound, ResolvedBlock};
pub use context::{RenderContext, RenderOptions};
pub use error::RenderIssue;
pub use i18n::{resolve_translation, Translation, TranslationSource};
pub use props::{build_component_props, BuiltProps, ElementProps, PropsConfig};
pub use registry::ComponentKind;
pub use renderer::{render_node, render_page, Renderer};
pub use vdom::{RenderedPage, VNode};

#[cfg(test)]
mod tests_rendering;

#[cfg(test)]
mod tests_props;

#[cfg(test)]
mod tests_error_recovery;
