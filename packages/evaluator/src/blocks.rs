use crate::variables::substitute_component;
use pagekit_schema::{Block, Component, Vars};
use thiserror::Error;

/// A block reference turned into a concrete component
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBlock {
    pub component: Component,
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Block not found: \"{name}\"")]
pub struct BlockNotFound {
    pub name: String,
    pub available: Vec<String>,
}

/// Looks `name` up in the catalog (first exact match) and substitutes `vars`
/// into the template. The block's `type` is copied verbatim.
pub fn resolve_block(name: &str, blocks: &[Block], vars: &Vars) -> Result<ResolvedBlock, BlockNotFound> {
    let block = blocks
        .iter()
        .find(|block| block.name == name)
        .ok_or_else(|| BlockNotFound {
            name: name.to_string(),
            available: available_block_names(blocks),
        })?;

    Ok(ResolvedBlock {
        component: substitute_component(&block.template, vars),
        name: block.name.clone(),
    })
}

pub fn available_block_names(blocks: &[Block]) -> Vec<String> {
    blocks.iter().map(|block| block.name.clone()).collect()
}
