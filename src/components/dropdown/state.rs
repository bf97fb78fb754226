use super::option::{ListEntry, SelectOption};
use super::search::SearchQuery;
use super::selection::Selection;

/// Interactive state owned by one mounted dropdown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownState {
    open: bool,
    query: SearchQuery,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn set_query(&mut self, raw: impl Into<String>) {
        self.query = SearchQuery::new(raw);
    }

    pub fn clear_query(&mut self) {
        self.query = SearchQuery::default();
    }

    pub fn entries(&self, options: &[SelectOption]) -> Vec<ListEntry> {
        self.query.visible_entries(options)
    }

    /// Applies a click on `entry` and returns the selection to report, if any.
    ///
    /// Single mode always closes and clears the query. Multiple mode stays
    /// open; re-clicking a member is a full no-op. The placeholder row is
    /// ignored.
    pub fn pick(&mut self, entry: &ListEntry, current: &Selection) -> Option<Selection> {
        let ListEntry::Option(option) = entry else {
            return None;
        };

        match current {
            Selection::Single(_) => {
                self.open = false;
                self.clear_query();
                current.with_picked(option)
            }
            Selection::Multiple(_) => {
                let next = current.with_picked(option)?;
                self.clear_query();
                Some(next)
            }
        }
    }
}
