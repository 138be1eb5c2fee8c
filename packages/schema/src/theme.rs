use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Nested design-token mapping (`colors.primary`, `spacing.section`, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme(Map<String, Value>);

impl Theme {
    pub fn new(values: Map<String, Value>) -> Self {
        Self(values)
    }

    /// Builds a theme from a JSON value. Anything but an object yields an empty theme.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Walks `segments` through nested objects. `None` as soon as one is missing.
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.0.get(first.as_ref())?;
        for segment in rest {
            current = current.as_object()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
