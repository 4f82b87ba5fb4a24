use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputKind {
    /// Single-line `<input>`
    Short,
    /// Multi-line `<textarea>`
    Long,
}

#[derive(Props, PartialEq, Clone)]
pub struct SimpleInputProps {
    pub value: String,
    pub placeholder: String,
    pub kind: InputKind,
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub max_chars: Option<usize>,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn SimpleInput(props: SimpleInputProps) -> Element {
    let on_change = props.on_change;
    let input_class = if props.error.is_some() {
        "simple-input simple-input-error"
    } else {
        "simple-input"
    };
    let count = props.value.chars().count();

    rsx! {
        div {
            class: "simple-input-container",
            {match props.kind {
                InputKind::Short => rsx! {
                    input {
                        class: "{input_class}",
                        r#type: "text",
                        value: "{props.value}",
                        placeholder: "{props.placeholder}",
                        oninput: move |event| on_change.call(event.value())
                    }
                },
                InputKind::Long => rsx! {
                    textarea {
                        class: "{input_class} simple-input-long",
                        rows: "4",
                        value: "{props.value}",
                        placeholder: "{props.placeholder}",
                        oninput: move |event| on_change.call(event.value())
                    }
                },
            }}
            div {
                class: "simple-input-footer",
                if let Some(error) = &props.error {
                    span { class: "field-error", "{error}" }
                }
                if let Some(max) = props.max_chars {
                    span { class: "char-count", "{count}/{max}" }
                }
            }
        }
    }
}
