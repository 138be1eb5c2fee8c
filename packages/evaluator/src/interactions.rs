//! Interaction configs serialized into the attribute contract read by the
//! client scripts.
//!
//! | config   | attributes                                                         |
//! |----------|--------------------------------------------------------------------|
//! | click    | `data-click-interaction` (JSON, unset keys omitted)                |
//! | scroll   | `data-scroll-animation`, `data-scroll-threshold`, `data-scroll-once`, `data-scroll-delay`, `data-scroll-duration` |
//! | hover    | `data-hover-interaction` (JSON), inline `transition`               |
//! | entrance | `data-entrance-animation`, `data-entrance-stagger`, inline `animation-duration` / `animation-delay` |
//!
//! Nothing here runs an interaction; the scripts do that in the browser.

use crate::theme::substitute_theme_token;
use pagekit_schema::{HoverInteraction, Interactions, Theme};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

const DEFAULT_HOVER_DURATION: &str = "300ms";
const DEFAULT_HOVER_EASING: &str = "ease";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionWiring {
    pub attributes: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
}

pub fn wire_interactions(interactions: &Interactions, theme: Option<&Theme>) -> InteractionWiring {
    let mut wiring = InteractionWiring::default();

    if let Some(click) = &interactions.click {
        match serde_json::to_string(click) {
            Ok(json) => {
                wiring
                    .attributes
                    .insert("data-click-interaction".to_string(), json);
            }
            Err(err) => warn!(error = %err, "Failed to serialize click interaction"),
        }
    }

    if let Some(scroll) = &interactions.scroll {
        let attrs = &mut wiring.attributes;
        attrs.insert("data-scroll-animation".to_string(), scroll.animation.clone());
        attrs.insert(
            "data-scroll-threshold".to_string(),
            scroll.threshold().to_string(),
        );
        attrs.insert("data-scroll-once".to_string(), scroll.once().to_string());
        if let Some(delay) = &scroll.delay {
            attrs.insert("data-scroll-delay".to_string(), delay.clone());
        }
        if let Some(duration) = &scroll.duration {
            attrs.insert("data-scroll-duration".to_string(), duration.clone());
        }
    }

    if let Some(hover) = &interactions.hover {
        if let Some(json) = hover_payload(hover, theme) {
            wiring
                .attributes
                .insert("data-hover-interaction".to_string(), json);
        }
        wiring.styles.insert(
            "transition".to_string(),
            format!(
                "all {} {}",
                hover.duration.as_deref().unwrap_or(DEFAULT_HOVER_DURATION),
                hover.easing.as_deref().unwrap_or(DEFAULT_HOVER_EASING)
            ),
        );
    }

    if let Some(entrance) = &interactions.entrance {
        wiring.attributes.insert(
            "data-entrance-animation".to_string(),
            entrance.animation.clone(),
        );
        if let Some(stagger) = &entrance.stagger {
            wiring
                .attributes
                .insert("data-entrance-stagger".to_string(), stagger.clone());
        }
        if let Some(duration) = &entrance.duration {
            wiring
                .styles
                .insert("animation-duration".to_string(), duration.clone());
        }
        if let Some(delay) = &entrance.delay {
            wiring
                .styles
                .insert("animation-delay".to_string(), delay.clone());
        }
    }

    wiring
}

/// Hover config as JSON with theme tokens (`backgroundColor: "$theme.colors.primary"`) resolved
fn hover_payload(hover: &HoverInteraction, theme: Option<&Theme>) -> Option<String> {
    let value = match serde_json::to_value(hover) {
        Ok(Value::Object(map)) => Value::Object(
            map.into_iter()
                .map(|(key, value)| {
                    let value = substitute_theme_token(&value, theme);
                    (key, value)
                })
                .collect(),
        ),
        Ok(other) => other,
        Err(err) => {
            warn!(error = %err, "Failed to serialize hover interaction");
            return None;
        }
    };
    serde_json::to_string(&value).ok()
}
