use super::classes::{DropdownClasses, DEFAULT_HIGHLIGHT};
use super::option::{ListEntry, SelectOption};
use super::search::LabelSegment;
use super::state::DropdownState;
use crate::utils::class_list;
use dioxus::prelude::*;

/// Provided by every [`Dropdown`](super::Dropdown) to the rows it renders.
#[derive(Clone, Copy)]
pub struct DropdownContext {
    pub(crate) state: Signal<DropdownState>,
}

/// What a custom option renderer receives: the option and its label with
/// the current search matches already emphasized.
pub struct OptionRowContent {
    pub option: SelectOption,
    pub label: Element,
}

/// A label with the current search matches emphasized.
///
/// Outside a dropdown it renders the label verbatim.
#[component]
pub fn HighlightedLabel(label: String, #[props(into)] class: Option<String>) -> Element {
    let segments = match try_use_context::<DropdownContext>() {
        Some(context) => context.state.read().query().segments(&label),
        None => vec![LabelSegment {
            text: label.clone(),
            matched: false,
        }],
    };
    let highlight = class.unwrap_or_else(|| DEFAULT_HIGHLIGHT.to_string());

    rsx! {
        for segment in segments {
            if segment.matched {
                span { class: "{highlight}", "{segment.text}" }
            } else {
                "{segment.text}"
            }
        }
    }
}

#[component]
pub fn OptionRow(
    entry: ListEntry,
    selected: bool,
    classes: DropdownClasses,
    custom_option: Option<Callback<OptionRowContent, Element>>,
    onpick: EventHandler<ListEntry>,
) -> Element {
    let on_click = {
        let entry = entry.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            onpick.call(entry.clone());
        }
    };
    let label = rsx! {
        HighlightedLabel {
            label: entry.label().to_string(),
            class: classes.highlight.clone(),
        }
    };

    // Custom renderers supply the presentation; the row keeps the click behavior.
    if let (Some(render), ListEntry::Option(option)) = (custom_option, &entry) {
        let content = render.call(OptionRowContent {
            option: option.clone(),
            label,
        });
        return rsx! {
            div { class: "{classes.option_custom}", onclick: on_click, {content} }
        };
    }

    let row_class = class_list([
        Some(classes.option.as_str()),
        selected.then_some(classes.option_selected.as_str()),
        entry
            .as_option()
            .map(|_| classes.option_selectable.as_str()),
    ]);

    rsx! {
        div { class: "{row_class}", onclick: on_click, {label} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn searching_for_an() -> Signal<DropdownState> {
        use_signal(|| {
            let mut state = DropdownState::default();
            state.set_query("an");
            state
        })
    }

    #[test]
    fn custom_row_receives_highlighted_label() {
        fn app() -> Element {
            let state = searching_for_an();
            use_context_provider(|| DropdownContext { state });
            let custom = use_callback(|content: OptionRowContent| {
                rsx! {
                    span { class: "custom", "data-value": "{content.option.value}", {content.label} }
                }
            });
            rsx! {
                OptionRow {
                    entry: ListEntry::Option(SelectOption::new(2, "Banana")),
                    selected: false,
                    classes: DropdownClasses::default(),
                    custom_option: custom,
                    onpick: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"class="custom""#), "{html}");
        assert!(html.contains(r#"data-value="2""#), "{html}");
        assert_eq!(html.matches(r#"<span class="bg-teal-300">an</span>"#).count(), 2, "{html}");
    }

    #[test]
    fn unmatched_text_carries_no_class() {
        fn app() -> Element {
            let state = searching_for_an();
            use_context_provider(|| DropdownContext { state });
            rsx! {
                HighlightedLabel { label: "Banana".to_string() }
            }
        }

        let html = render(app);
        assert!(!html.contains(r#"class="""#), "{html}");
        assert!(html.contains('B'), "{html}");
        assert_eq!(html.matches("bg-teal-300").count(), 2, "{html}");
    }

    #[test]
    fn placeholder_row_is_not_styled_selectable() {
        fn app() -> Element {
            let state = searching_for_an();
            use_context_provider(|| DropdownContext { state });
            rsx! {
                OptionRow {
                    entry: ListEntry::NoData,
                    selected: false,
                    classes: DropdownClasses::default(),
                    onpick: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains(r#"class="py-1 px-2 rounded""#), "{html}");
        assert!(!html.contains("hover:bg-teal-100"), "{html}");
        assert!(html.contains("No data found"), "{html}");
    }
}
