use dioxus::prelude::*;

use crate::services::client::UserSummary;

#[derive(Props, PartialEq, Clone)]
pub struct MemberSelectorProps {
    pub placeholder: String,
    pub following: Vec<UserSummary>,
    pub selected_ids: Vec<u64>,
    /// Shown under the search box, e.g. when the collaborator limit is hit
    #[props(default)]
    pub error: Option<String>,
    #[props(default)]
    pub empty_message: Option<String>,
    pub on_add: EventHandler<u64>,
    pub on_delete: EventHandler<u64>,
}

fn matches_search(user: &UserSummary, search: &str) -> bool {
    let search = search.trim();
    search.is_empty() || user.nickname.to_lowercase().contains(&search.to_lowercase())
}

#[component]
pub fn MemberSelector(props: MemberSelectorProps) -> Element {
    let mut search = use_signal(String::new);

    let on_add = props.on_add;
    let on_delete = props.on_delete;
    let selected_ids = props.selected_ids;

    let selected_users: Vec<UserSummary> = props
        .following
        .iter()
        .filter(|u| selected_ids.contains(&u.id))
        .cloned()
        .collect();
    let candidates: Vec<UserSummary> = props
        .following
        .iter()
        .filter(|u| !selected_ids.contains(&u.id) && matches_search(u, &search.read()))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "member-selector",
            input {
                class: "simple-input",
                r#type: "search",
                value: "{search}",
                placeholder: "{props.placeholder}",
                oninput: move |event| search.set(event.value())
            }
            if let Some(error) = &props.error {
                span { class: "field-error", "{error}" }
            }

            div {
                class: "member-chips",
                for user in selected_users {
                    span {
                        key: "{user.id}",
                        class: "member-chip",
                        "{user.nickname}"
                        button {
                            r#type: "button",
                            class: "chip-remove",
                            onclick: move |_| on_delete.call(user.id),
                            "×"
                        }
                    }
                }
            }

            if props.following.is_empty() {
                if let Some(message) = &props.empty_message {
                    div { class: "member-empty", "{message}" }
                }
            } else {
                ul {
                    class: "member-candidates",
                    for user in candidates {
                        li {
                            key: "{user.id}",
                            class: "member-candidate",
                            onclick: move |_| on_add.call(user.id),
                            if let Some(url) = &user.profile_image_url {
                                img { class: "member-avatar", src: "{url}", alt: "" }
                            }
                            "{user.nickname}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(nickname: &str) -> UserSummary {
        UserSummary {
            id: 1,
            nickname: nickname.to_string(),
            profile_image_url: None,
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        assert!(matches_search(&user("MinaKim"), "kim"));
        assert!(matches_search(&user("MinaKim"), "  "));
        assert!(!matches_search(&user("MinaKim"), "jun"));
    }
}
