//! Browser bindings.
//!
//! Client code resolves translations through the same fallback chain the
//! server render uses, and can re-render pages or single nodes in place
//! (editor previews, language switches without a reload).

use pagekit_compiler_html::{compile_node, compile_page, CompileOptions};
use pagekit_evaluator::{render_node, render_page, resolve_translation, RenderContext};
use pagekit_schema::{validate_app, App, Languages, Node};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[wasm_bindgen]
pub struct TranslationResult {
    text: String,
    source: String,
}

#[wasm_bindgen]
impl TranslationResult {
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    /// `current`, `fallback`, `default` or `key`
    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.source.clone()
    }
}

#[wasm_bindgen]
pub struct RenderResult {
    html: String,
    issues: String,
}

#[wasm_bindgen]
impl RenderResult {
    #[wasm_bindgen(getter)]
    pub fn html(&self) -> String {
        self.html.clone()
    }

    /// JSON array of `{ code, message }`
    #[wasm_bindgen(getter)]
    pub fn issues(&self) -> String {
        self.issues.clone()
    }
}

#[derive(Serialize)]
struct IssueEntry {
    code: &'static str,
    message: String,
}

/// Resolve a translation key: current language, fallback, default, then the key itself
#[wasm_bindgen(js_name = resolveTranslation)]
pub fn resolve_translation_js(
    key: &str,
    lang: &str,
    languages_json: &str,
) -> Result<TranslationResult, JsValue> {
    translate(key, lang, languages_json).map_err(|e| JsValue::from_str(&e))
}

/// Render one page of an app to a full HTML document
#[wasm_bindgen(js_name = renderPage)]
pub fn render_page_js(
    app_json: &str,
    page_path: &str,
    lang: Option<String>,
) -> Result<RenderResult, JsValue> {
    render_app_page(app_json, page_path, lang.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Render a single node against an app's blocks, theme and languages to an HTML fragment
#[wasm_bindgen(js_name = renderNode)]
pub fn render_node_js(node_json: &str, app_json: &str, lang: Option<String>) -> Result<String, JsValue> {
    render_fragment(node_json, app_json, lang.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Validate an app, returning a JSON array of issue messages
#[wasm_bindgen(js_name = validateApp)]
pub fn validate_app_js(app_json: &str) -> Result<String, JsValue> {
    validate(app_json).map_err(|e| JsValue::from_str(&e))
}

fn parse_app(app_json: &str) -> Result<App, String> {
    App::from_json(app_json).map_err(|e| format!("Parse error: {}", e))
}

fn translate(key: &str, lang: &str, languages_json: &str) -> Result<TranslationResult, String> {
    let languages: Languages =
        serde_json::from_str(languages_json).map_err(|e| format!("Parse error: {}", e))?;
    let translation = resolve_translation(key, lang, Some(&languages));
    let source = serde_json::to_value(translation.source)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_default();
    Ok(TranslationResult {
        text: translation.text,
        source,
    })
}

fn render_app_page(app_json: &str, page_path: &str, lang: Option<&str>) -> Result<RenderResult, String> {
    let app = parse_app(app_json)?;
    let page = app
        .find_page(page_path)
        .ok_or_else(|| format!("No page with path {}", page_path))?;

    let ctx = RenderContext::for_app(&app, lang.or(page.meta.lang.as_deref()));
    let rendered = render_page(page, &ctx);
    let html = compile_page(&rendered, &CompileOptions::default())
        .map_err(|e| format!("Compile error: {}", e))?;

    let issues: Vec<IssueEntry> = rendered
        .issues
        .iter()
        .map(|issue| IssueEntry {
            code: issue.code(),
            message: issue.to_string(),
        })
        .collect();
    let issues = serde_json::to_string(&issues).map_err(|e| format!("Serialization error: {}", e))?;

    Ok(RenderResult { html, issues })
}

fn render_fragment(node_json: &str, app_json: &str, lang: Option<&str>) -> Result<String, String> {
    let app = parse_app(app_json)?;
    let node: Node = serde_json::from_str(node_json).map_err(|e| format!("Parse error: {}", e))?;

    let ctx = RenderContext::for_app(&app, lang);
    let vnode = render_node(&node, &ctx);
    let options = CompileOptions {
        pretty: false,
        include_runtime: false,
        ..Default::default()
    };
    compile_node(&vnode, &options).map_err(|e| format!("Compile error: {}", e))
}

fn validate(app_json: &str) -> Result<String, String> {
    let app = parse_app(app_json)?;
    let messages: Vec<String> = validate_app(&app).iter().map(|issue| issue.to_string()).collect();
    serde_json::to_string(&messages).map_err(|e| format!("Serialization error: {}", e))
}
