pub mod check;
pub mod init;
pub mod render;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use render::{render, RenderArgs};

use crate::config::DEFAULT_CONFIG_NAME;
use anyhow::{anyhow, Context, Result};
use pagekit_schema::App;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// App files at `path`: the file itself, or every `.json` file below a
/// directory except the config file, sorted
pub(crate) fn find_app_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(anyhow!("App path does not exist: {}", path.display()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension().and_then(|s| s.to_str()) == Some("json")
                && path.file_name().and_then(|s| s.to_str()) != Some(DEFAULT_CONFIG_NAME)
        })
        .collect();
    files.sort();
    Ok(files)
}

pub(crate) fn load_app(path: &Path) -> Result<App> {
    App::from_path(path).with_context(|| format!("Failed to load app {}", path.display()))
}

/// Languages to render `app` in, `None` meaning the app default
pub(crate) fn render_languages(app: &App, lang: Option<&str>, all: bool) -> Vec<Option<String>> {
    match (&app.languages, all) {
        (Some(languages), true) => languages
            .supported
            .iter()
            .map(|lang| Some(lang.code.clone()))
            .collect(),
        _ => vec![lang.map(str::to_string)],
    }
}
