use pagekit_evaluator::{RenderedPage, VNode};
use std::collections::BTreeMap;
use thiserror::Error;

const RUNTIME_SCRIPT: &str = include_str!("../assets/runtime.js");
const ANIMATIONS_CSS: &str = include_str!("../assets/animations.css");

/// Inline style of error placeholders
const ERROR_STYLE: &str = "border: 2px dashed red; padding: 1rem; margin: 0.5rem 0; color: #b00020; background: #fff5f5; font-family: monospace";

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Invalid tag name: {0:?}")]
    InvalidTagName(String),

    #[error("Invalid attribute name {name:?} on <{tag}>")]
    InvalidAttributeName { tag: String, name: String },

    #[error("Failed to serialize page data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Embed the interaction runtime and animation keyframes in page documents
    pub include_runtime: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            include_runtime: true,
        }
    }
}

struct Context<'o> {
    options: &'o CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'o> Context<'o> {
    fn new(options: &'o CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        self.newline();
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn newline(&mut self) {
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile one node to an HTML fragment
pub fn compile_node(node: &VNode, options: &CompileOptions) -> Result<String, CompileError> {
    compile_nodes(std::slice::from_ref(node), options)
}

/// Compile sibling nodes to an HTML fragment
pub fn compile_nodes(nodes: &[VNode], options: &CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);
    for node in nodes {
        compile_block(node, &mut ctx)?;
    }
    Ok(ctx.get_output())
}

/// Compile a rendered page to a complete HTML document
pub fn compile_page(page: &RenderedPage, options: &CompileOptions) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!(
        "<html lang=\"{}\" dir=\"{}\">",
        escape_attr(&page.lang),
        page.direction.as_str()
    ));
    ctx.indent();

    compile_head(page, &mut ctx);

    match &page.languages {
        Some(languages) => {
            let json = serde_json::to_string(languages)?;
            ctx.add_line(&format!("<body data-languages=\"{}\">", escape_attr(&json)));
        }
        None => ctx.add_line("<body>"),
    }
    ctx.indent();

    for node in &page.nodes {
        compile_block(node, &mut ctx)?;
    }

    if ctx.options.include_runtime {
        ctx.add_line("<script>");
        add_asset(RUNTIME_SCRIPT, &mut ctx);
        ctx.add_line("</script>");
    }

    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}

fn compile_head(page: &RenderedPage, ctx: &mut Context<'_>) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    if let Some(title) = &page.title {
        ctx.add_line(&format!("<title>{}</title>", escape_text(title)));
    }
    if let Some(description) = &page.description {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\">",
            escape_attr(description)
        ));
    }

    if ctx.options.include_runtime {
        ctx.add_line("<style>");
        add_asset(ANIMATIONS_CSS, ctx);
        ctx.add_line("</style>");
    }

    ctx.dedent();
    ctx.add_line("</head>");
}

fn add_asset(source: &str, ctx: &mut Context<'_>) {
    ctx.indent();
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        ctx.add_line(line);
    }
    ctx.dedent();
}

/// A node starting on its own line
fn compile_block(node: &VNode, ctx: &mut Context<'_>) -> Result<(), CompileError> {
    if ctx.options.pretty {
        ctx.add_indent();
    }
    compile_inline(node, ctx)?;
    ctx.newline();
    Ok(())
}

/// A node written at the current position
fn compile_inline(node: &VNode, ctx: &mut Context<'_>) -> Result<(), CompileError> {
    match node {
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => compile_element(tag, attributes, styles, children, ctx),
        VNode::Text { content } => {
            ctx.add(&escape_text(content));
            Ok(())
        }
        VNode::Raw { html } => {
            ctx.add(html);
            Ok(())
        }
        VNode::Error {
            code,
            message,
            hint,
        } => {
            ctx.add(&format!(
                "<div data-render-error=\"{}\" style=\"{}\">",
                escape_attr(code),
                ERROR_STYLE
            ));
            ctx.add(&format!("<strong>{}</strong>", escape_text(message)));
            if let Some(hint) = hint {
                ctx.add(&format!("<br><small>{}</small>", escape_text(hint)));
            }
            ctx.add("</div>");
            Ok(())
        }
    }
}

fn compile_element(
    tag: &str,
    attributes: &BTreeMap<String, String>,
    styles: &BTreeMap<String, String>,
    children: &[VNode],
    ctx: &mut Context<'_>,
) -> Result<(), CompileError> {
    if !is_valid_name(tag) {
        return Err(CompileError::InvalidTagName(tag.to_string()));
    }

    ctx.add(&format!("<{}", tag));

    for (name, value) in attributes {
        if !is_valid_name(name) {
            return Err(CompileError::InvalidAttributeName {
                tag: tag.to_string(),
                name: name.clone(),
            });
        }
        ctx.add(" ");
        ctx.add(name);
        // empty value is an HTML boolean attribute
        if !value.is_empty() {
            ctx.add(&format!("=\"{}\"", escape_attr(value)));
        }
    }

    if !styles.is_empty() {
        let inline = styles
            .iter()
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("; ");
        ctx.add(&format!(" style=\"{}\"", escape_attr(&inline)));
    }

    if is_void(tag) {
        ctx.add(">");
        return Ok(());
    }

    ctx.add(">");

    if has_block_children(children) && ctx.options.pretty {
        ctx.newline();
        ctx.indent();
        for child in children {
            compile_block(child, ctx)?;
        }
        ctx.dedent();
        ctx.add_indent();
    } else {
        for child in children {
            compile_inline(child, ctx)?;
        }
    }

    ctx.add(&format!("</{}>", tag));
    Ok(())
}

/// Escape text content
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value
pub fn escape_attr(text: &str) -> String {
    escape_text(text)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
        })
}

fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Children that get their own lines in pretty output
fn has_block_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| matches!(child, VNode::Element { .. } | VNode::Error { .. }))
}
