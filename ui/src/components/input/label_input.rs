use dioxus::prelude::*;

use crate::features::list_draft::{check_new_label, Language, ValidationError};

#[derive(Props, PartialEq, Clone)]
pub struct LabelInputProps {
    pub labels: Vec<String>,
    pub placeholder: String,
    pub language: Language,
    /// Error recorded for the labels field itself
    #[props(default)]
    pub error: Option<String>,
    pub on_change: EventHandler<Vec<String>>,
}

#[component]
pub fn LabelInput(props: LabelInputProps) -> Element {
    let mut draft_label = use_signal(String::new);
    let mut rejected = use_signal(|| None::<ValidationError>);

    let labels = props.labels;
    let language = props.language;
    let on_change = props.on_change;

    let shown_error = rejected()
        .map(|e| e.message(language))
        .or(props.error.clone());

    let commit = {
        let labels = labels.clone();
        move || {
            let checked = check_new_label(&labels, &draft_label.peek());
            match checked {
                Ok(label) => {
                    let mut next = labels.clone();
                    next.push(label);
                    draft_label.set(String::new());
                    rejected.set(None);
                    on_change.call(next);
                }
                Err(error) => rejected.set(Some(error)),
            }
        }
    };

    rsx! {
        div {
            class: "label-input",
            input {
                class: "simple-input",
                r#type: "text",
                value: "{draft_label}",
                placeholder: "{props.placeholder}",
                oninput: move |event| {
                    rejected.set(None);
                    draft_label.set(event.value());
                },
                onkeydown: {
                    let mut commit = commit.clone();
                    move |event: KeyboardEvent| {
                        if event.key() == Key::Enter {
                            event.prevent_default();
                            commit();
                        }
                    }
                }
            }
            if let Some(error) = shown_error {
                span { class: "field-error", "{error}" }
            }
            div {
                class: "label-chips",
                for label in labels.clone() {
                    span {
                        key: "{label}",
                        class: "label-chip",
                        "{label}"
                        button {
                            r#type: "button",
                            class: "chip-remove",
                            onclick: {
                                let labels = labels.clone();
                                let label = label.clone();
                                move |_| {
                                    let next: Vec<String> =
                                        labels.iter().filter(|l| **l != label).cloned().collect();
                                    rejected.set(None);
                                    on_change.call(next);
                                }
                            },
                            "×"
                        }
                    }
                }
            }
        }
    }
}
