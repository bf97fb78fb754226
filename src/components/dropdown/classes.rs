use serde::{Deserialize, Serialize};

pub const DEFAULT_HIGHLIGHT: &str = "bg-teal-300";

/// Class names the dropdown renders with. Defaults target Tailwind.
///
/// Missing keys in a deserialized override fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownClasses {
    pub root: String,
    pub control: String,
    pub control_outlined: String,
    pub control_filled: String,
    pub chips: String,
    pub chip: String,
    pub summary: String,
    pub clear_button: String,
    pub icon: String,
    pub list: String,
    pub list_open: String,
    pub list_closed: String,
    pub search: String,
    pub search_icon: String,
    pub search_input: String,
    pub search_clear: String,
    pub options: String,
    pub option: String,
    pub option_selected: String,
    pub option_selectable: String,
    pub option_custom: String,
    pub highlight: String,
}

impl Default for DropdownClasses {
    fn default() -> Self {
        Self {
            root: "flex items-center gap-2".to_string(),
            control: "container cursor-pointer shadow-sm w-full relative min-h-8 flex items-center gap-3 px-2 outline-none rounded".to_string(),
            control_outlined: "border border-gray-300".to_string(),
            control_filled: "bg-gray-200 border border-gray-300".to_string(),
            chips: "flex gap-1 flex-wrap grow py-2".to_string(),
            chip: "p-1 rounded-xl px-3 bg-gray-100 flex items-center gap-1".to_string(),
            summary: "grow".to_string(),
            clear_button: "cursor-pointer".to_string(),
            icon: "icon w-4 h-4".to_string(),
            list: "dropdownList absolute top-full z-[10000] max-h-[200px] m-0 p-0 list-none rounded border-gray-700 w-full left-0".to_string(),
            list_open: "inline".to_string(),
            list_closed: "hidden".to_string(),
            search: "searchList cursor-pointer h-full flex items-center relative w-full".to_string(),
            search_icon: "absolute left-0 mx-2 icon w-4 h-4".to_string(),
            search_input: "outline-0 h-full p-2 pl-8 border border-gray-200 w-full bg-white".to_string(),
            search_clear: "absolute right-0 mx-2 icon w-4 h-4".to_string(),
            options: "bg-gray-50 overflow-y-auto max-h-[200px] shadow-md border border-gray-200 border-t-0 py-1 px-1 flex flex-col gap-y-1".to_string(),
            option: "py-1 px-2 rounded".to_string(),
            option_selected: "bg-teal-200".to_string(),
            option_selectable: "hover:bg-teal-100 cursor-pointer".to_string(),
            option_custom: "cursor-pointer".to_string(),
            highlight: DEFAULT_HIGHLIGHT.to_string(),
        }
    }
}

impl DropdownClasses {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_override_keeps_defaults() {
        let classes =
            DropdownClasses::from_json(r#"{"highlight": "bg-yellow-200", "chip": "chip"}"#)
                .unwrap();

        assert_eq!(classes.highlight, "bg-yellow-200");
        assert_eq!(classes.chip, "chip");
        assert_eq!(classes.option, DropdownClasses::default().option);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(DropdownClasses::from_json(r#"{"highlight": 3}"#).is_err());
    }
}
