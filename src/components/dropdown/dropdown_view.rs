use super::classes::DropdownClasses;
use super::listeners::GlobalListeners;
use super::option::{ListEntry, SelectOption};
use super::positioning::{overlay_style, ControlRect, OVERLAY_LAYER_CSS, OVERLAY_Z_INDEX};
use super::rows::{DropdownContext, OptionRow, OptionRowContent};
use super::selection::{SelectBinding, Selection};
use super::state::DropdownState;
use crate::components::Icon;
use crate::utils::class_list;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use std::rc::Rc;
use uuid::Uuid;

#[component]
pub fn Dropdown(
    options: Vec<SelectOption>,
    binding: SelectBinding,
    #[props(default)] with_search: bool,
    #[props(default)] outlined: bool,
    #[props(into, default)] option_label: String,
    #[props(default)] with_portal: bool,
    custom_option: Option<Callback<OptionRowContent, Element>>,
    #[props(into)] class: Option<String>,
    #[props(default)] classes: DropdownClasses,
) -> Element {
    let mut state = use_signal(DropdownState::default);
    let mut control_handle = use_signal(|| None::<Rc<MountedData>>);
    let mut control_rect = use_signal(|| None::<ControlRect>);
    let mut resize_epoch = use_signal(|| 0u64);
    let root_id = use_hook(|| format!("dropdown-{}", Uuid::new_v4()));

    use_context_provider(|| DropdownContext { state });

    // Dropped with the scope, which detaches both window listeners.
    let _listeners = use_hook({
        let root_id = root_id.clone();
        move || {
            let on_outside = move || {
                if state.peek().is_open() {
                    state.with_mut(DropdownState::dismiss);
                }
            };
            let on_resize = move || resize_epoch += 1;
            match GlobalListeners::register(root_id, on_outside, on_resize) {
                Ok(listeners) => Some(Rc::new(listeners)),
                Err(err) => {
                    debug!(%err, "dropdown window listeners unavailable");
                    None
                }
            }
        }
    });

    // Measure the control once it exists and again after every window resize.
    use_effect(move || {
        let _ = resize_epoch();
        let Some(handle) = control_handle() else {
            return;
        };
        spawn(async move {
            match handle.get_client_rect().await {
                Ok(rect) => control_rect.set(Some(ControlRect::from(rect))),
                Err(err) => debug!(?err, "dropdown control measurement skipped"),
            }
        });
    });

    let selection = binding.selection();
    let current = state.read().clone();
    let is_open = current.is_open();
    let query_text = current.query().as_str().to_string();
    let entries = current.entries(&options);
    let measured = control_rect();

    let pick = {
        let binding = binding.clone();
        move |entry: ListEntry| {
            let current = binding.selection();
            let next = state.with_mut(|state| state.pick(&entry, &current));
            if let Some(next) = next {
                binding.commit(next);
            }
        }
    };

    let make_remove = {
        let binding = binding.clone();
        move |chip: SelectOption| {
            let binding = binding.clone();
            move |evt: MouseEvent| {
                evt.stop_propagation();
                binding.commit(binding.selection().without(&chip));
            }
        }
    };

    let clear_all = {
        let binding = binding.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            binding.commit(binding.selection().cleared());
        }
    };

    let root_class = class_list([Some(classes.root.as_str()), class.as_deref()]);
    let control_class = class_list([
        Some(classes.control.as_str()),
        Some(if outlined {
            classes.control_outlined.as_str()
        } else {
            classes.control_filled.as_str()
        }),
    ]);
    let list_class = class_list([
        Some(classes.list.as_str()),
        Some(if is_open {
            classes.list_open.as_str()
        } else {
            classes.list_closed.as_str()
        }),
    ]);
    let width_css = measured
        .map(|rect| format!("width: {}px;", rect.width))
        .unwrap_or_default();
    let inline_width_css = if with_portal {
        String::new()
    } else {
        width_css.clone()
    };
    let summary = match &selection {
        Selection::Single(Some(value)) => value.label.clone(),
        _ => String::new(),
    };
    let chevron = if is_open { "chevron-up" } else { "chevron-down" };

    let list = rsx! {
        div {
            class: "{list_class}",
            style: "{inline_width_css}",
            if with_search {
                div {
                    class: "{classes.search}",
                    onclick: move |evt: MouseEvent| evt.stop_propagation(),
                    Icon {
                        name: "search".to_string(),
                        class: classes.search_icon.clone(),
                    }
                    input {
                        class: "{classes.search_input}",
                        value: "{query_text}",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        oninput: move |evt: FormEvent| state.with_mut(|state| state.set_query(evt.value())),
                    }
                    if !query_text.is_empty() {
                        span {
                            class: "{classes.search_clear}",
                            onclick: move |evt: MouseEvent| {
                                evt.stop_propagation();
                                state.with_mut(DropdownState::clear_query);
                            },
                            Icon {
                                name: "close-circle".to_string(),
                                class: "w-full h-full".to_string(),
                            }
                        }
                    }
                }
            }
            div { class: "{classes.options}",
                for entry in entries {
                    OptionRow {
                        key: "{entry.key()}",
                        selected: entry.as_option().is_some_and(|option| selection.contains(option)),
                        entry: entry.clone(),
                        classes: classes.clone(),
                        custom_option,
                        onpick: pick.clone(),
                    }
                }
            }
        }
    };
    let (inline_list, detached_list) = if with_portal {
        (None, Some(list))
    } else {
        (Some(list), None)
    };
    let overlay_css = overlay_style(measured).to_css();

    rsx! {
        div { id: "{root_id}", class: "{root_class}",
            "{option_label}"
            div {
                class: "{control_class}",
                tabindex: "0",
                onmounted: move |evt: MountedEvent| control_handle.set(Some(evt.data())),
                onclick: move |_| state.with_mut(DropdownState::toggle),
                {match &selection {
                    Selection::Multiple(chips) => rsx! {
                        div { class: "{classes.chips}",
                            for chip in chips.iter().cloned() {
                                span {
                                    key: "{chip.value}",
                                    class: "{classes.chip}",
                                    onclick: make_remove(chip.clone()),
                                    "{chip.label}"
                                    Icon {
                                        name: "close-circle".to_string(),
                                        class: classes.icon.clone(),
                                    }
                                }
                            }
                        }
                    },
                    Selection::Single(_) => rsx! {
                        span { class: "{classes.summary}", "{summary}" }
                    },
                }}
                button {
                    class: "{classes.clear_button}",
                    r#type: "button",
                    aria_label: "Clear selection",
                    onclick: clear_all,
                    Icon {
                        name: "close-circle".to_string(),
                        class: classes.icon.clone(),
                    }
                }
                Icon { name: chevron.to_string(), class: classes.icon.clone() }
                {inline_list}
            }
            if let Some(list) = detached_list {
                div { style: "{OVERLAY_LAYER_CSS} z-index: {OVERLAY_Z_INDEX};",
                    div { style: "{overlay_css}{width_css}", {list} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![SelectOption::new(1, "Apple"), SelectOption::new(2, "Banana")]
    }

    fn render<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> String {
        let mut dom = VirtualDom::new_with_props(app, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn SingleHost(
        options: Vec<SelectOption>,
        value: Option<SelectOption>,
        #[props(default)] with_portal: bool,
    ) -> Element {
        let onchange = use_callback(|_: Option<SelectOption>| {});
        rsx! {
            Dropdown {
                options,
                binding: SelectBinding::single(value, onchange),
                with_portal,
                option_label: "Fruit",
            }
        }
    }

    #[component]
    fn MultipleHost(options: Vec<SelectOption>, value: Vec<SelectOption>) -> Element {
        let onchange = use_callback(|_: Vec<SelectOption>| {});
        rsx! {
            Dropdown { options, binding: SelectBinding::multiple(value, onchange) }
        }
    }

    #[test]
    fn selected_row_gets_selected_class() {
        let html = render(
            SingleHost,
            SingleHostProps {
                options: fruit(),
                value: Some(SelectOption::new(2, "Banana")),
                with_portal: false,
            },
        );

        assert!(
            html.contains(r#"class="py-1 px-2 rounded bg-teal-200 hover:bg-teal-100 cursor-pointer""#),
            "{html}"
        );
        assert_eq!(html.matches("bg-teal-200").count(), 1, "{html}");
        assert!(html.contains(r#"<span class="grow">Banana</span>"#), "{html}");
    }

    #[test]
    fn empty_options_render_placeholder_without_selectable_style() {
        let html = render(
            SingleHost,
            SingleHostProps {
                options: vec![],
                value: None,
                with_portal: false,
            },
        );

        assert!(html.contains("No data found"), "{html}");
        assert!(html.contains(r#"class="py-1 px-2 rounded""#), "{html}");
        assert!(!html.contains("hover:bg-teal-100"), "{html}");
    }

    #[test]
    fn closed_dropdown_hides_list_and_points_chevron_down() {
        let html = render(
            SingleHost,
            SingleHostProps {
                options: fruit(),
                value: None,
                with_portal: false,
            },
        );

        assert!(html.contains("left-0 hidden"), "{html}");
        assert!(html.contains(r#"points="6 9 12 15 18 9""#), "{html}");
        assert!(!html.contains(r#"points="18 15 12 9 6 15""#), "{html}");
    }

    #[test]
    fn multiple_mode_renders_a_chip_per_value_and_clear_button() {
        let html = render(
            MultipleHost,
            MultipleHostProps {
                options: fruit(),
                value: fruit(),
            },
        );

        assert_eq!(
            html.matches("p-1 rounded-xl px-3 bg-gray-100").count(),
            2,
            "{html}"
        );
        assert!(html.contains(r#"aria-label="Clear selection""#), "{html}");
        assert_eq!(html.matches("bg-teal-200").count(), 2, "{html}");
    }

    #[test]
    fn detached_list_sits_in_a_viewport_layer() {
        let detached = render(
            SingleHost,
            SingleHostProps {
                options: fruit(),
                value: None,
                with_portal: true,
            },
        );
        let inline = render(
            SingleHost,
            SingleHostProps {
                options: fruit(),
                value: None,
                with_portal: false,
            },
        );

        assert!(detached.contains(OVERLAY_LAYER_CSS), "{detached}");
        assert!(!inline.contains("position: fixed"), "{inline}");
    }
}
