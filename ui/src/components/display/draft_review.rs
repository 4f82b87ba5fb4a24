use dioxus::prelude::*;

use crate::app::ServiceContext;
use crate::features::list_draft::{list_locale, DraftList, Language};
use crate::services::client::category_display_name;

#[derive(Props, PartialEq, Clone)]
pub struct DraftReviewProps {
    pub draft: DraftList,
    pub language: Language,
    pub on_back: EventHandler<()>,
}

/// Read-only summary of the draft shown after the info step
#[component]
pub fn DraftReview(props: DraftReviewProps) -> Element {
    let services = use_context::<ServiceContext>();
    // Served from the query cache filled by the info step
    let categories = use_resource(move || {
        let services = services.clone();
        async move { services.categories().await }
    });

    let locale = list_locale(props.language);
    let draft = props.draft;
    let on_back = props.on_back;
    let visibility = if draft.is_public {
        locale.public_message
    } else {
        locale.private_message
    };
    let code = draft.category.clone().unwrap_or_default();
    let category = match &*categories.read() {
        Some(Ok(list)) => category_display_name(list, &code, props.language).unwrap_or(code),
        _ => code,
    };

    rsx! {
        div {
            class: "draft-review",
            style: "background-color: {draft.background_color};",
            h2 { class: "form-title", "{locale.review_title}" }
            dl {
                dt { "{locale.title}" }
                dd { "{draft.title}" }
                dt { "{locale.description}" }
                dd { "{draft.description}" }
                dt { "{locale.category}" }
                dd { "{category}" }
                dt { "{locale.label}" }
                dd { "{draft.labels.join(\", \")}" }
                dt { "{locale.add_collaborator}" }
                dd { "{draft.collaborator_ids.len()}" }
                dt { "{locale.public_setting}" }
                dd { "{visibility}" }
            }
            button {
                r#type: "button",
                class: "validate-button",
                onclick: move |_| on_back.call(()),
                "{locale.back}"
            }
        }
    }
}
