use dioxus::prelude::*;

use crate::features::list_draft::BackgroundPalette;

#[derive(Props, PartialEq, Clone)]
pub struct ColorSelectorProps {
    pub palette: BackgroundPalette,
    /// Highlighted color, if it belongs to `palette`
    pub selected_color: Option<String>,
    pub on_pick: EventHandler<String>,
}

#[component]
pub fn ColorSelector(props: ColorSelectorProps) -> Element {
    let on_pick = props.on_pick;
    let selected = props.selected_color;

    rsx! {
        div {
            class: "color-selector",
            for color in props.palette.colors().iter().copied() {
                button {
                    key: "{color}",
                    r#type: "button",
                    class: if selected.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(color)) {
                        "color-swatch color-swatch-selected"
                    } else {
                        "color-swatch"
                    },
                    style: "background-color: {color};",
                    title: "{color}",
                    onclick: move |_| on_pick.call(color.to_string()),
                }
            }
        }
    }
}
