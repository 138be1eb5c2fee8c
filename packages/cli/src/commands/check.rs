use super::{find_app_files, load_app, render_languages};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagekit_evaluator::{render_page, RenderContext, RenderIssue};
use pagekit_schema::{validate_app, App, SchemaIssue};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// App file or directory (overrides config)
    pub path: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Treat render issues as errors
    #[arg(long)]
    pub strict: bool,
}

/// Render issue found on one page in one language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageIssue {
    pub page: String,
    pub lang: String,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub file: String,
    pub schema: Vec<String>,
    pub render: Vec<PageIssue>,
}

impl CheckReport {
    fn is_clean(&self) -> bool {
        self.schema.is_empty() && self.render.is_empty()
    }
}

pub fn check(args: CheckArgs, cwd: &Path) -> Result<()> {
    if args.format != "text" && args.format != "json" {
        return Err(anyhow!("Unknown format: {} (expected text or json)", args.format));
    }

    let config = Config::load(cwd)?;
    let app_path = args
        .path
        .as_ref()
        .map(|path| cwd.join(path))
        .unwrap_or_else(|| config.get_app_path(cwd));

    let mut reports = Vec::new();
    for file in find_app_files(&app_path)? {
        let app = load_app(&file)?;
        reports.push(check_app(&app, &file.display().to_string(), &config));
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_text(&reports);
    }

    let schema_errors: usize = reports.iter().map(|r| r.schema.len()).sum();
    let render_issues: usize = reports.iter().map(|r| r.render.len()).sum();
    if schema_errors > 0 {
        return Err(anyhow!("{} schema errors", schema_errors));
    }
    if args.strict && render_issues > 0 {
        return Err(anyhow!("{} render issues", render_issues));
    }
    Ok(())
}

/// Validates `app` and renders every page in every supported language
pub fn check_app(app: &App, file: &str, config: &Config) -> CheckReport {
    let schema = validate_app(app)
        .iter()
        .map(SchemaIssue::to_string)
        .collect();

    let mut render = Vec::new();
    for lang in render_languages(app, None, true) {
        for page in &app.pages {
            let ctx = RenderContext::for_app(app, lang.as_deref().or(page.meta.lang.as_deref()))
                .with_options(config.render_options());
            let rendered = render_page(page, &ctx);
            for issue in &rendered.issues {
                let entry = page_issue(&page.path, &ctx.current_lang, issue);
                // issues independent of language are reported once
                let duplicate = render.iter().any(|seen: &PageIssue| {
                    seen.page == entry.page && seen.code == entry.code && seen.message == entry.message
                });
                if !duplicate {
                    render.push(entry);
                }
            }
        }
    }

    CheckReport {
        file: file.to_string(),
        schema,
        render,
    }
}

fn page_issue(page: &str, lang: &str, issue: &RenderIssue) -> PageIssue {
    PageIssue {
        page: page.to_string(),
        lang: lang.to_string(),
        code: issue.code(),
        message: issue.to_string(),
    }
}

fn print_text(reports: &[CheckReport]) {
    println!("🔍 {} pagekit check", "Starting".green().bold());
    println!();

    for report in reports {
        if report.is_clean() {
            println!("{} {}", "✓".green(), report.file);
            continue;
        }
        println!("{}", report.file.bold());
        for issue in &report.schema {
            println!("  {} {}", "error".red().bold(), issue);
        }
        for issue in &report.render {
            println!(
                "  {} [{}] {} ({}): {}",
                "warning".yellow().bold(),
                issue.code,
                issue.page,
                issue.lang,
                issue.message
            );
        }
    }

    let schema_errors: usize = reports.iter().map(|r| r.schema.len()).sum();
    let render_issues: usize = reports.iter().map(|r| r.render.len()).sum();
    println!();
    println!(
        "✨ {} Check complete!",
        if schema_errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Files checked: {}", reports.len());
    if schema_errors > 0 {
        println!("   {} {}", "Errors:".red(), schema_errors);
    }
    if render_issues > 0 {
        println!("   {} {}", "Warnings:".yellow(), render_issues);
    }
    if schema_errors == 0 && render_issues == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}
