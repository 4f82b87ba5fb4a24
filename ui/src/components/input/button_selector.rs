use dioxus::prelude::*;

use crate::features::list_draft::Language;
use crate::services::client::Category;

#[derive(Props, PartialEq, Clone)]
pub struct ButtonSelectorProps {
    pub categories: Vec<Category>,
    /// Internal code of the selected category
    pub selected: Option<String>,
    pub language: Language,
    pub on_select: EventHandler<Category>,
}

#[component]
pub fn ButtonSelector(props: ButtonSelectorProps) -> Element {
    let categories = props.categories;
    let selected = props.selected;
    let on_select = props.on_select;
    let language = props.language;

    rsx! {
        div {
            class: "button-selector",
            for category in categories {
                button {
                    key: "{category.code}",
                    r#type: "button",
                    class: if selected.as_deref() == Some(category.eng_name.as_str()) {
                        "selector-button selector-button-active"
                    } else {
                        "selector-button"
                    },
                    onclick: {
                        let category = category.clone();
                        move |_| on_select.call(category.clone())
                    },
                    "{category.display_name(language)}"
                }
            }
        }
    }
}
