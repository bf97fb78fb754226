use super::option::{ListEntry, SelectOption};
use dioxus::logger::tracing::warn;
use regex::{Regex, RegexBuilder};

/// Search text typed into the dropdown, with its compiled matcher.
///
/// The text is escaped before compilation, so every character matches
/// itself: typing `.` looks for a literal period.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    raw: String,
    pattern: Option<Regex>,
}

impl PartialEq for SearchQuery {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// A run of label text, flagged when it matches the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSegment {
    pub text: String,
    pub matched: bool,
}

impl LabelSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            matched: true,
        }
    }
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            return Self::default();
        }

        let pattern = match RegexBuilder::new(&regex::escape(&raw))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!(%err, "search text could not be compiled, using plain containment");
                None
            }
        };

        Self { raw, pattern }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches(&self, label: &str) -> bool {
        if self.raw.is_empty() {
            return true;
        }
        match &self.pattern {
            Some(pattern) => pattern.is_match(label),
            None => label.to_lowercase().contains(&self.raw.to_lowercase()),
        }
    }

    /// Splits `label` around case-insensitive occurrences of the query.
    pub fn segments(&self, label: &str) -> Vec<LabelSegment> {
        let Some(pattern) = &self.pattern else {
            return vec![LabelSegment::plain(label)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(label) {
            if found.start() > last {
                segments.push(LabelSegment::plain(&label[last..found.start()]));
            }
            segments.push(LabelSegment::matched(found.as_str()));
            last = found.end();
        }
        if last < label.len() || segments.is_empty() {
            segments.push(LabelSegment::plain(&label[last..]));
        }
        segments
    }

    /// Rows to render for `options` under this query.
    pub fn visible_entries(&self, options: &[SelectOption]) -> Vec<ListEntry> {
        let entries: Vec<ListEntry> = options
            .iter()
            .filter(|option| self.matches(&option.label))
            .cloned()
            .map(ListEntry::Option)
            .collect();

        if entries.is_empty() {
            vec![ListEntry::NoData]
        } else {
            entries
        }
    }
}
