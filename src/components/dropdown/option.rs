use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of the placeholder row shown when nothing matches.
pub const NO_DATA_FOUND: &str = "no_data_found";
pub const NO_DATA_LABEL: &str = "No data found";

/// Caller-defined identity of an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: OptionValue,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<OptionValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Two options are the same choice when their values match, whatever
    /// their labels say.
    pub fn same_choice(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}

/// One row of the rendered list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Option(SelectOption),
    /// Placeholder shown when the filter leaves nothing. Never selectable.
    NoData,
}

impl ListEntry {
    pub fn label(&self) -> &str {
        match self {
            ListEntry::Option(option) => &option.label,
            ListEntry::NoData => NO_DATA_LABEL,
        }
    }

    pub fn key(&self) -> String {
        match self {
            ListEntry::Option(option) => option.value.to_string(),
            ListEntry::NoData => NO_DATA_FOUND.to_string(),
        }
    }

    pub fn as_option(&self) -> Option<&SelectOption> {
        match self {
            ListEntry::Option(option) => Some(option),
            ListEntry::NoData => None,
        }
    }
}
