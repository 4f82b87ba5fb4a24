use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        div {
            class: "loading-indicator",
            "⏳ {props.message}"
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FetchErrorNoticeProps {
    pub message: String,
}

#[component]
pub fn FetchErrorNotice(props: FetchErrorNoticeProps) -> Element {
    rsx! {
        div {
            class: "validation-result error",
            "✗ {props.message}"
        }
    }
}
