use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct RadioInputProps {
    pub name: String,
    pub value: bool,
    pub true_message: String,
    pub false_message: String,
    pub on_change: EventHandler<bool>,
}

#[component]
pub fn RadioInput(props: RadioInputProps) -> Element {
    let on_change = props.on_change;

    rsx! {
        div {
            class: "radio-input",
            for option in [true, false] {
                label {
                    key: "{option}",
                    class: if option == props.value { "radio-option radio-option-checked" } else { "radio-option" },
                    input {
                        r#type: "radio",
                        name: "{props.name}",
                        checked: option == props.value,
                        onchange: move |_| on_change.call(option)
                    }
                    if option {
                        "{props.true_message}"
                    } else {
                        "{props.false_message}"
                    }
                }
            }
        }
    }
}
