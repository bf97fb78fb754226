use super::option::SelectOption;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

/// Current choice of a dropdown. The variant is the dropdown's mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

impl Selection {
    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    pub fn contains(&self, option: &SelectOption) -> bool {
        match self {
            Selection::Single(current) => current
                .as_ref()
                .is_some_and(|current| current.same_choice(option)),
            Selection::Multiple(current) => current.iter().any(|item| item.same_choice(option)),
        }
    }

    /// Selection after picking `option`, or `None` when the pick changes nothing.
    pub fn with_picked(&self, option: &SelectOption) -> Option<Selection> {
        if self.contains(option) {
            return None;
        }
        match self {
            Selection::Single(_) => Some(Selection::Single(Some(option.clone()))),
            Selection::Multiple(current) => {
                let mut next = current.clone();
                next.push(option.clone());
                Some(Selection::Multiple(next))
            }
        }
    }

    pub fn without(&self, option: &SelectOption) -> Selection {
        match self {
            Selection::Single(Some(current)) if current.same_choice(option) => {
                Selection::Single(None)
            }
            Selection::Single(current) => Selection::Single(current.clone()),
            Selection::Multiple(current) => Selection::Multiple(
                current
                    .iter()
                    .filter(|item| !item.same_choice(option))
                    .cloned()
                    .collect(),
            ),
        }
    }

    pub fn cleared(&self) -> Selection {
        match self {
            Selection::Single(_) => Selection::Single(None),
            Selection::Multiple(_) => Selection::Multiple(Vec::new()),
        }
    }
}

/// The host's value and change handler, paired by mode.
#[derive(Clone, PartialEq)]
pub enum SelectBinding {
    Single {
        value: Option<SelectOption>,
        onchange: EventHandler<Option<SelectOption>>,
    },
    Multiple {
        value: Vec<SelectOption>,
        onchange: EventHandler<Vec<SelectOption>>,
    },
}

impl SelectBinding {
    pub fn single(
        value: Option<SelectOption>,
        onchange: EventHandler<Option<SelectOption>>,
    ) -> Self {
        SelectBinding::Single { value, onchange }
    }

    pub fn multiple(value: Vec<SelectOption>, onchange: EventHandler<Vec<SelectOption>>) -> Self {
        SelectBinding::Multiple { value, onchange }
    }

    pub fn selection(&self) -> Selection {
        match self {
            SelectBinding::Single { value, .. } => Selection::Single(value.clone()),
            SelectBinding::Multiple { value, .. } => Selection::Multiple(value.clone()),
        }
    }

    /// Reports `next` to the host.
    pub fn commit(&self, next: Selection) {
        match (self, next) {
            (SelectBinding::Single { onchange, .. }, Selection::Single(value)) => {
                onchange.call(value)
            }
            (SelectBinding::Multiple { onchange, .. }, Selection::Multiple(value)) => {
                onchange.call(value)
            }
            (_, next) => {
                warn!(?next, "selection does not match the dropdown mode, change dropped");
            }
        }
    }
}
