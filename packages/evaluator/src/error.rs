use thiserror::Error;

/// Recoverable problems found while rendering.
///
/// None of these abort a render. Each is turned into a local fallback
/// (literal value, placeholder node, generic container) at the point where
/// it is detected and collected for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderIssue {
    #[error("Block not found: \"{name}\" (available: {})", available.join(", "))]
    BlockNotFound { name: String, available: Vec<String> },

    #[error("Theme token '{token}' could not be resolved")]
    ThemeTokenUnresolved { token: String },

    #[error("No translation for '{key}' in '{lang}', rendering the key")]
    TranslationMissing { key: String, lang: String },

    #[error("Unknown component type '{component_type}', rendered as a container")]
    UnknownComponentType { component_type: String },

    #[error("Circular block reference: {}", chain.join(" → "))]
    CircularBlockReference { chain: Vec<String> },

    #[error("Recursion limit of {limit} exceeded at {}", path.join(" → "))]
    RecursionLimitExceeded { limit: usize, path: Vec<String> },
}

impl RenderIssue {
    /// Stable identifier, also used for `data-render-error`
    pub fn code(&self) -> &'static str {
        match self {
            RenderIssue::BlockNotFound { .. } => "block-not-found",
            RenderIssue::ThemeTokenUnresolved { .. } => "theme-token-unresolved",
            RenderIssue::TranslationMissing { .. } => "translation-missing",
            RenderIssue::UnknownComponentType { .. } => "unknown-component-type",
            RenderIssue::CircularBlockReference { .. } => "circular-block-reference",
            RenderIssue::RecursionLimitExceeded { .. } => "recursion-limit-exceeded",
        }
    }
}
