use dioxus::logger::tracing::{info, warn, Level};
use dioxus::prelude::*;
use dioxus_dropdown::{Dropdown, OptionRowContent, SelectBinding, SelectOption};
use thiserror::Error;

const DROPDOWN_CSS: Asset = asset!("/assets/styling/dropdown.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const SAMPLE_OPTIONS: &str = include_str!("../assets/sample_options.json");

#[derive(Debug, Error)]
enum DemoError {
    #[error("sample options are not valid JSON: {0}")]
    SampleOptions(#[from] serde_json::Error),
}

fn load_sample_options() -> Result<Vec<SelectOption>, DemoError> {
    Ok(serde_json::from_str(SAMPLE_OPTIONS)?)
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let options = use_hook(|| match load_sample_options() {
        Ok(options) => {
            info!(count = options.len(), "loaded sample options");
            options
        }
        Err(err) => {
            warn!(%err, "falling back to an empty option list");
            Vec::new()
        }
    });
    let mut value = use_signal(|| options.first().cloned());
    let mut multi_value = use_signal(Vec::<SelectOption>::new);

    let on_single = use_callback(move |next: Option<SelectOption>| value.set(next));
    let on_multiple = use_callback(move |next: Vec<SelectOption>| multi_value.set(next));
    let pink_option = use_callback(|content: OptionRowContent| {
        rsx! {
            span { class: "bg-pink-100 p-2", aria_label: "{content.option.label}", {content.label} }
        }
    });

    let value_label = value().map(|option| option.label).unwrap_or_default();
    let multi_labels = multi_value()
        .iter()
        .map(|option| option.label.as_str())
        .collect::<Vec<_>>()
        .join(",");

    rsx! {
        document::Script { src: TAILWIND_CDN }
        document::Stylesheet { href: DROPDOWN_CSS }

        div { style: "padding: 20px;",
            h1 { "Testing Dropdown Component" }
            "{value_label}"
            "{multi_labels}"
            Dropdown {
                outlined: true,
                binding: SelectBinding::single(value(), on_single),
                options: options.clone(),
                option_label: "Test Long Label",
            }
            div { style: "padding: 20px;" }
            Dropdown {
                with_search: true,
                with_portal: true,
                binding: SelectBinding::single(value(), on_single),
                options: options.clone(),
                option_label: "Test Super long long long long long label",
                custom_option: pink_option,
            }
            div { style: "padding: 20px;" }
            Dropdown {
                binding: SelectBinding::multiple(multi_value(), on_multiple),
                options: options.clone(),
                option_label: "Test",
            }
        }
    }
}
