use super::{find_app_files, load_app, render_languages};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_compiler_html::{compile_page, CompileOptions};
use pagekit_evaluator::{render_page, RenderContext, RenderOptions};
use pagekit_schema::{App, Page};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// App file or directory (overrides config)
    pub path: Option<PathBuf>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Language to render (overrides config)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Render every supported language into its own subdirectory
    #[arg(long)]
    pub all_languages: bool,

    /// Only render the page with this path
    #[arg(short, long)]
    pub page: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Disable pretty printing
    #[arg(long)]
    pub compact: bool,

    /// Leave out the interaction runtime
    #[arg(long)]
    pub no_runtime: bool,
}

/// Settings shared by every page of one render run
struct RenderJob {
    out_dir: PathBuf,
    lang: Option<String>,
    all_languages: bool,
    page: Option<String>,
    stdout: bool,
    render_options: RenderOptions,
    compile_options: CompileOptions,
}

impl RenderJob {
    fn new(args: RenderArgs, config: &Config, cwd: &Path) -> Self {
        let mut compile_options = config.compile_options();
        if args.compact {
            compile_options.pretty = false;
        }
        if args.no_runtime {
            compile_options.include_runtime = false;
        }

        Self {
            out_dir: args
                .out_dir
                .map(|dir| cwd.join(dir))
                .unwrap_or_else(|| config.get_out_dir(cwd)),
            lang: args.lang.or_else(|| config.lang.clone()),
            all_languages: args.all_languages || config.all_languages,
            page: args.page,
            stdout: args.stdout,
            render_options: config.render_options(),
            compile_options,
        }
    }
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let app_path = args
        .path
        .clone()
        .map(|path| cwd.join(path))
        .unwrap_or_else(|| config.get_app_path(cwd));
    let job = RenderJob::new(args, &config, cwd);

    let app_files = find_app_files(&app_path)?;
    if app_files.is_empty() {
        println!("{}", "⚠️  No app files found".yellow());
        return Ok(());
    }

    if !job.stdout {
        println!("{}", "🔨 Rendering pages...".bright_blue().bold());
    }

    let multiple_apps = app_files.len() > 1;
    let mut success_count = 0;
    let mut error_count = 0;
    let mut issue_count = 0;

    for app_file in &app_files {
        let app = load_app(app_file)?;
        let app_dir = multiple_apps
            .then(|| app_file.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
            .flatten();

        let pages: Vec<&Page> = match &job.page {
            Some(path) => {
                let page = app
                    .find_page(path)
                    .ok_or_else(|| anyhow!("No page with path {} in {}", path, app_file.display()))?;
                vec![page]
            }
            None => app.pages.iter().collect(),
        };

        for lang in render_languages(&app, job.lang.as_deref(), job.all_languages) {
            for page in &pages {
                let lang_dir = job.all_languages.then(|| lang.clone()).flatten();
                match render_one(&app, page, lang.as_deref(), &job) {
                    Ok((html, issues)) => {
                        issue_count += issues;
                        if job.stdout {
                            println!("{}", html);
                            continue;
                        }
                        let output_file = output_path(
                            &job.out_dir,
                            app_dir.as_deref(),
                            lang_dir.as_deref(),
                            &page.path,
                        );
                        match write_output(&output_file, &html) {
                            Ok(()) => {
                                success_count += 1;
                                println!(
                                    "  {} {} → {}",
                                    "✓".green(),
                                    page.path,
                                    output_file.display()
                                );
                            }
                            Err(e) => {
                                error_count += 1;
                                eprintln!("  {} {} - {}", "✗".red(), page.path, e.to_string().red());
                            }
                        }
                    }
                    Err(e) => {
                        error_count += 1;
                        eprintln!("  {} {} - {}", "✗".red(), page.path, e.to_string().red());
                    }
                }
            }
        }
    }

    if job.stdout {
        if error_count > 0 {
            return Err(anyhow!("{} pages failed to render", error_count));
        }
        return Ok(());
    }

    println!();
    if error_count == 0 {
        println!("{} Rendered {} pages successfully", "✅".green(), success_count);
    } else {
        println!(
            "{} Rendered {} pages, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
    }
    if issue_count > 0 {
        println!(
            "   {} {} render issues (run `pagekit check` for details)",
            "!".yellow(),
            issue_count
        );
    }

    if error_count > 0 {
        return Err(anyhow!("{} pages failed to render", error_count));
    }
    Ok(())
}

/// Renders and compiles one page, returning the HTML and the number of render issues
fn render_one(app: &App, page: &Page, lang: Option<&str>, job: &RenderJob) -> Result<(String, usize)> {
    let lang = lang.or(page.meta.lang.as_deref());
    let ctx = RenderContext::for_app(app, lang).with_options(job.render_options.clone());
    debug!(page = %page.path, lang = %ctx.current_lang, "Rendering page");

    let rendered = render_page(page, &ctx);
    if !rendered.issues.is_empty() {
        warn!(page = %page.path, issues = rendered.issues.len(), "Page rendered with issues");
    }
    let html = compile_page(&rendered, &job.compile_options)?;
    Ok((html, rendered.issues.len()))
}

fn write_output(output_file: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_file, html)?;
    Ok(())
}

/// `/` → `index.html`, `/about` → `about/index.html`
pub(crate) fn output_path(out_dir: &Path, app_dir: Option<&str>, lang_dir: Option<&str>, page_path: &str) -> PathBuf {
    let mut path = out_dir.to_path_buf();
    if let Some(app_dir) = app_dir {
        path.push(app_dir);
    }
    if let Some(lang_dir) = lang_dir {
        path.push(lang_dir);
    }
    for segment in page_path.split('/').filter(|s| !s.is_empty() && *s != "." && *s != "..") {
        path.push(segment);
    }
    path.join("index.html")
}
