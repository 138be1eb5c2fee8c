use crate::component::{Block, Node};
use crate::error::SchemaError;
use crate::languages::Languages;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub sections: Vec<Node>,
}

impl Page {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            meta: PageMeta::default(),
            sections: Vec::new(),
        }
    }

    pub fn with_section(mut self, section: impl Into<Node>) -> Self {
        self.sections.push(section.into());
        self
    }
}

/// A whole application: the unit the renderer and the CLI load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Languages>,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl App {
    pub fn from_json(source: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SchemaError> {
        let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    pub fn find_page(&self, path: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.path == path)
    }
}
