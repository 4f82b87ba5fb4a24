use dioxus::prelude::*;

use crate::features::list_draft::{BackgroundPalette, Language};

#[derive(Props, PartialEq, Clone)]
pub struct PaletteSelectorProps {
    pub selected: BackgroundPalette,
    pub language: Language,
    pub on_change: EventHandler<BackgroundPalette>,
}

#[component]
pub fn PaletteSelector(props: PaletteSelectorProps) -> Element {
    let selected = props.selected;
    let on_change = props.on_change;

    rsx! {
        select {
            class: "palette-selector",
            value: "{selected.as_str()}",
            onchange: move |evt| {
                if let Some(palette) = BackgroundPalette::from_str_value(&evt.value()) {
                    on_change.call(palette);
                }
            },
            for palette in BackgroundPalette::ALL {
                option {
                    value: "{palette.as_str()}",
                    selected: palette == selected,
                    "{palette.label(props.language)}"
                }
            }
        }
    }
}
