use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct HeaderProps {
    pub title: String,
    pub left_label: String,
    pub on_left: EventHandler<()>,
    /// Right-hand action slot, e.g. the "next" button
    pub right: Element,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let on_left = props.on_left;

    rsx! {
        header {
            class: "page-header",
            button {
                r#type: "button",
                class: "header-left",
                title: "{props.left_label}",
                onclick: move |_| on_left.call(()),
                "✕"
            }
            h1 {
                class: "header-title",
                "{props.title}"
            }
            div {
                class: "header-right",
                {props.right}
            }
        }
    }
}
