//! String attributes from the host document and their dimension rules.

use std::collections::BTreeMap;

use crate::foundation::error::{FacadeError, FacadeResult};

/// Largest accepted surface edge in pixels; larger declarations are clamped.
pub const MAX_DIMENSION: u32 = 16_384;

/// String-typed element attributes as supplied by the host document.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Attributes(BTreeMap<String, String>);

impl Attributes {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert or replace one attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Attribute value as a source URL; blank values count as absent.
    pub fn url(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolve a dimension attribute, replacing unusable values with `default`.
    ///
    /// Blank or missing values silently yield the default. Zero or non-numeric values yield the
    /// default with a warning; values above [`MAX_DIMENSION`] are clamped.
    pub fn dimension_or(&self, name: &str, default: u32) -> u32 {
        match self.classify_dimension(name) {
            DimensionValue::Absent => default,
            DimensionValue::Valid(v) => v,
            DimensionValue::TooLarge(v) => {
                tracing::warn!(
                    attr = name,
                    value = v,
                    max = MAX_DIMENSION,
                    "dimension clamped"
                );
                MAX_DIMENSION
            }
            DimensionValue::Invalid(raw) => {
                tracing::warn!(
                    attr = name,
                    value = %raw,
                    fallback = default,
                    "invalid dimension replaced by default"
                );
                default
            }
        }
    }

    /// Check every dimension attribute without coercion.
    pub fn validate_dimensions(&self) -> FacadeResult<()> {
        for name in ["width", "height"] {
            match self.classify_dimension(name) {
                DimensionValue::Absent | DimensionValue::Valid(_) => {}
                DimensionValue::TooLarge(v) => {
                    return Err(FacadeError::validation(format!(
                        "attribute '{name}'={v} exceeds {MAX_DIMENSION}"
                    )));
                }
                DimensionValue::Invalid(raw) => {
                    return Err(FacadeError::validation(format!(
                        "attribute '{name}'='{raw}' is not a positive integer"
                    )));
                }
            }
        }
        Ok(())
    }

    fn classify_dimension(&self, name: &str) -> DimensionValue {
        let Some(raw) = self.get(name) else {
            return DimensionValue::Absent;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return DimensionValue::Absent;
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return DimensionValue::Invalid(raw.to_owned());
        }
        match trimmed.parse::<u64>() {
            Ok(0) => DimensionValue::Invalid(raw.to_owned()),
            Ok(v) if v > u64::from(MAX_DIMENSION) => DimensionValue::TooLarge(v),
            Ok(v) => DimensionValue::Valid(v as u32),
            // Only overflow remains once the digit check passed.
            Err(_) => DimensionValue::TooLarge(u64::MAX),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

enum DimensionValue {
    Absent,
    Valid(u32),
    TooLarge(u64),
    Invalid(String),
}

#[cfg(test)]
#[path = "../../tests/unit/config/attrs.rs"]
mod tests;
