use crate::i18n::active_language;
use pagekit_schema::{App, Block, Languages, Theme};

/// Tunables for a render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Deepest node nesting (block expansions included) before a subtree is cut off
    pub max_depth: usize,
}

impl RenderOptions {
    pub const DEFAULT_MAX_DEPTH: usize = 64;
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Read-only inputs shared by every node of a render.
///
/// Borrowed, never mutated: the same context can back renders on several
/// threads at once.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub blocks: &'a [Block],
    pub theme: Option<&'a Theme>,
    pub languages: Option<&'a Languages>,
    pub current_lang: String,
    pub options: RenderOptions,
}

impl<'a> RenderContext<'a> {
    pub fn new(blocks: &'a [Block]) -> Self {
        Self {
            blocks,
            theme: None,
            languages: None,
            current_lang: active_language(None, None),
            options: RenderOptions::default(),
        }
    }

    /// Context for rendering `app` in `lang` (the app default when unsupported or absent)
    pub fn for_app(app: &'a App, lang: Option<&str>) -> Self {
        let languages = app.languages.as_ref();
        Self {
            blocks: &app.blocks,
            theme: app.theme.as_ref(),
            languages,
            current_lang: active_language(lang, languages),
            options: RenderOptions::default(),
        }
    }

    pub fn with_theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Also resets the current language to the configured default
    pub fn with_languages(mut self, languages: &'a Languages) -> Self {
        self.languages = Some(languages);
        self.current_lang = active_language(None, Some(languages));
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.current_lang = active_language(Some(lang), self.languages);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}
