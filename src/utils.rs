//! Utility helpers for the dropdown crate

/// Join class names, skipping absent and blank entries.
pub fn class_list<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_missing_and_blank_parts() {
        assert_eq!(
            class_list([Some("flex"), None, Some("  "), Some(" extra ")]),
            "flex extra"
        );
        assert_eq!(class_list([None, None]), "");
    }
}
