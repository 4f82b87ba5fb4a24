use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SectionProps {
    pub title: String,
    #[props(default)]
    pub is_required: bool,
    #[props(default)]
    pub required_label: String,
    pub children: Element,
}

#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section {
            class: "form-section",
            div {
                class: "section-title",
                "{props.title}"
                if props.is_required {
                    span {
                        class: "section-required",
                        title: "{props.required_label}",
                        "*"
                    }
                }
            }
            {props.children}
        }
    }
}
