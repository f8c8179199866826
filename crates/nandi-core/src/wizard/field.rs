//! Field declarations and tagged field values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

/// Declared shape of a field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FieldKind {
    /// Free text or a single selection.
    Text,
    /// Any number of selected items.
    MultiSelect,
    /// Checkbox.
    Flag,
}

/// A field value, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl FieldValue {
    /// Empty string, empty list or `false`.
    pub fn default_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text(String::new()),
            FieldKind::MultiSelect => Self::List(Vec::new()),
            FieldKind::Flag => Self::Flag(false),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::List(_) => FieldKind::MultiSelect,
            Self::Flag(_) => FieldKind::Flag,
        }
    }

    /// Whether the value satisfies a required field: non-blank text, at
    /// least one selected item, or a checked flag.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(s) => !s.trim().is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Flag(checked) => *checked,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(checked) => Some(*checked),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Declaration of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Initial value; the kind's empty value when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldValue>,
}

impl FieldSpec {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            required: false,
            default: None,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn multi_select(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::MultiSelect)
    }

    pub fn flag(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Flag)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn initial_value(&self) -> FieldValue {
        self.default
            .clone()
            .unwrap_or_else(|| FieldValue::default_for(self.kind))
    }
}

/// Field values keyed by field key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues(BTreeMap<String, FieldValue>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Text value of `key`, or `""` when absent or not text.
    pub fn text(&self, key: &str) -> &str {
        self.get(key).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Selected items of `key`, or an empty slice.
    pub fn list(&self, key: &str) -> &[String] {
        self.get(key).and_then(FieldValue::as_list).unwrap_or(&[])
    }

    /// Flag value of `key`, or `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn is_filled(&self, key: &str) -> bool {
        self.get(key).is_some_and(FieldValue::is_filled)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.0.insert(key.into(), value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.0.get_mut(key)
    }
}

impl FromIterator<(String, FieldValue)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_kind() {
        assert_eq!(FieldValue::default_for(FieldKind::Text), FieldValue::text(""));
        assert_eq!(
            FieldValue::default_for(FieldKind::MultiSelect),
            FieldValue::List(vec![])
        );
        assert_eq!(FieldValue::default_for(FieldKind::Flag), FieldValue::Flag(false));
    }

    #[test]
    fn test_is_filled() {
        assert!(!FieldValue::text("   ").is_filled());
        assert!(FieldValue::text(" Ram ").is_filled());
        assert!(!FieldValue::list(Vec::<String>::new()).is_filled());
        assert!(FieldValue::list(["Rice"]).is_filled());
        assert!(!FieldValue::Flag(false).is_filled());
        assert!(FieldValue::Flag(true).is_filled());
    }

    #[test]
    fn test_initial_value_prefers_declared_default() {
        let unit = FieldSpec::text("farmSizeUnit", "Unit").with_default("acres");
        assert_eq!(unit.initial_value(), FieldValue::text("acres"));

        let crops = FieldSpec::multi_select("primaryCrops", "Primary Crops").required();
        assert!(crops.required);
        assert_eq!(crops.initial_value(), FieldValue::List(vec![]));
    }

    #[test]
    fn test_values_serialize_untagged() {
        let values: FieldValues = [
            ("fullName".to_string(), FieldValue::text("Ram")),
            ("primaryCrops".to_string(), FieldValue::list(["Rice", "Wheat"])),
            ("agreeTerms".to_string(), FieldValue::Flag(true)),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "agreeTerms": true,
                "fullName": "Ram",
                "primaryCrops": ["Rice", "Wheat"],
            })
        );
        let back: FieldValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn test_typed_accessors() {
        let mut values = FieldValues::new();
        values.insert("fullName", FieldValue::text("Ram"));
        assert_eq!(values.text("fullName"), "Ram");
        assert_eq!(values.text("missing"), "");
        assert!(values.list("fullName").is_empty());
        assert!(!values.flag("fullName"));
    }
}
