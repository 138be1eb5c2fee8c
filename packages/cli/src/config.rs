use anyhow::Context;
use pagekit_compiler_html::CompileOptions;
use pagekit_evaluator::RenderOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagekit.config.json";

/// Pagekit configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// App file, or a directory searched for app files
    #[serde(default = "default_app")]
    pub app: String,

    /// Output directory for rendered pages
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Language to render; the app default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Render every supported language into its own subdirectory
    #[serde(default)]
    pub all_languages: bool,

    /// Pretty print HTML
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Embed the interaction runtime
    #[serde(default = "default_true")]
    pub include_runtime: bool,

    /// Deepest node nesting before a subtree is cut off
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_app() -> String {
    "app.json".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_depth() -> usize {
    RenderOptions::DEFAULT_MAX_DEPTH
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn get_app_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.app)
    }

    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: self.max_depth,
        }
    }

    pub fn compile_options(&self) -> CompileOptions {
        CompileOptions {
            pretty: self.pretty,
            include_runtime: self.include_runtime,
            ..Default::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: default_app(),
            out_dir: default_out_dir(),
            lang: None,
            all_languages: false,
            pretty: true,
            include_runtime: true,
            max_depth: default_max_depth(),
        }
    }
}
