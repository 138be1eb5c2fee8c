use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

const EXAMPLE_APP: &str = r##"{
  "name": "My Site",
  "theme": {
    "colors": { "primary": "#3366ff", "text": "#1a1a2e", "surface": "#ffffff" },
    "spacing": { "sm": "0.5rem", "md": "1rem", "lg": "2rem", "section": "4rem", "container": "1120px" },
    "shadows": { "md": "0 2px 8px rgba(0, 0, 0, 0.08)", "lg": "0 8px 24px rgba(0, 0, 0, 0.16)" }
  },
  "languages": {
    "default": "en-US",
    "supported": [
      { "code": "en-US", "label": "English" },
      { "code": "es-ES", "label": "Español" }
    ],
    "translations": {
      "en-US": { "hero.title": "Build pages from JSON", "hero.cta": "Get started" },
      "es-ES": { "hero.title": "Crea páginas desde JSON", "hero.cta": "Empezar" }
    }
  },
  "blocks": [
    {
      "name": "hero",
      "type": "section",
      "children": [
        {
          "type": "container",
          "children": [
            { "type": "h1", "props": { "style": { "color": "$theme.colors.text" } }, "children": ["$title"] },
            {
              "type": "button",
              "props": { "style": { "backgroundColor": "$theme.colors.primary", "color": "$theme.colors.surface" } },
              "interactions": {
                "hover": { "scale": 1.05, "shadow": "$theme.shadows.lg" },
                "click": { "navigate": "$ctaHref" }
              },
              "children": ["$cta"]
            }
          ]
        }
      ],
      "interactions": { "scroll": { "animation": "fadeInUp", "threshold": 0.2 } }
    }
  ],
  "pages": [
    {
      "name": "home",
      "path": "/",
      "meta": { "title": "My Site", "description": "Built with pagekit" },
      "sections": [
        { "type": "nav", "children": [ { "type": "language-switcher" } ] },
        { "block": "hero", "vars": { "title": "$t:hero.title", "cta": "$t:hero.cta", "ctaHref": "/signup" } }
      ]
    }
  ]
}
"##;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// App file to create
    #[arg(short, long, default_value = "app.json")]
    pub app: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing pagekit project...".bright_blue().bold());

    let app_file = cwd.join(&args.app);
    if !app_file.exists() {
        if let Some(parent) = app_file.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&app_file, EXAMPLE_APP)?;
        println!("  {} Created {}", "✓".green(), args.app);
    }

    let config = Config {
        app: args.app.clone(),
        ..Config::default()
    };
    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}", args.app);
    println!("  2. Run: pagekit check");
    println!("  3. Run: pagekit render, then open {}/index.html", config.out_dir);

    Ok(())
}
