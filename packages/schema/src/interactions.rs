//! Interaction configs attached to components.
//!
//! These are plain data. The renderer serializes them into `data-*`
//! attributes and the client scripts act on them at interaction time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interactions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverInteraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click: Option<ClickInteraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollInteraction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntranceAnimation>,
}

impl Interactions {
    pub fn is_empty(&self) -> bool {
        self.hover.is_none() && self.click.is_none() && self.scroll.is_none() && self.entrance.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverInteraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
}

/// Field order is the serialization order of `data-click-interaction`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickInteraction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_in_new_tab: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scroll_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toggle_element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_form: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollInteraction {
    pub animation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub once: Option<bool>,
}

impl ScrollInteraction {
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    pub fn new(animation: impl Into<String>) -> Self {
        Self {
            animation: animation.into(),
            threshold: None,
            delay: None,
            duration: None,
            once: None,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(Self::DEFAULT_THRESHOLD)
    }

    pub fn once(&self) -> bool {
        self.once.unwrap_or(true)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntranceAnimation {
    pub animation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<String>,
}

/// Checks the `^[0-9]+(ms|s)$` duration format
pub fn is_css_duration(value: &str) -> bool {
    let digits = value
        .strip_suffix("ms")
        .or_else(|| value.strip_suffix('s'))
        .unwrap_or("");
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
