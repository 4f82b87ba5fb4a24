use dioxus::prelude::*;

use crate::app::{ListFormContext, ListFormMode, ServiceContext};
use crate::components::display::{FetchErrorNotice, LoadingIndicator};
use crate::components::input::{
    ButtonSelector, ColorSelector, InputKind, LabelInput, MemberSelector, PaletteSelector,
    RadioInput, SimpleInput,
};
use crate::components::layout::{Header, Section};
use crate::features::list_draft::*;
use crate::services::client::{selectable_categories, Category};
use crate::services::storage::CurrentUser;
use crate::{console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct CreateListFormProps {
    pub mode: ListFormMode,
    pub on_back: EventHandler<()>,
    pub on_next: EventHandler<()>,
}

/// Info step of the list creation flow: title, description, category, labels,
/// collaborators, background and visibility.
#[component]
pub fn CreateListForm(props: CreateListFormProps) -> Element {
    let form = use_context::<ListFormContext>();
    let services = use_context::<ServiceContext>();
    let language = use_context::<Signal<Language>>();
    let current_user = use_context::<Signal<Option<CurrentUser>>>();

    let state = form.state;
    let dispatch = form.dispatch;
    let mut prefill = form.prefill;
    let on_back = props.on_back;
    let on_next = props.on_next;

    let mut selection =
        use_signal(|| BackgroundSelection::new(state.peek().values.background_palette));
    let mut collaborator_error = use_signal(|| None::<CollaboratorError>);

    let categories = {
        let services = services.clone();
        use_resource(move || {
            let services = services.clone();
            async move { services.categories().await }
        })
    };

    let following = use_resource(move || {
        let services = services.clone();
        let user = current_user();
        async move {
            match user {
                Some(user) => services.following_list(user.id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    // Template prefill runs whenever category data arrives or changes
    use_effect(move || {
        let loaded: Option<Vec<Category>> = match &*categories.read() {
            Some(Ok(list)) => Some(list.clone()),
            _ => None,
        };
        let Some(list) = loaded else {
            return;
        };

        let actions = prefill.write().on_categories(&list);
        if !actions.is_empty() {
            console_info!("[CreateList] Applying template prefill");
        }
        for action in actions {
            dispatch.call(action);
        }
    });

    let lang = language();
    let locale = list_locale(lang);
    let placeholder = list_placeholder(lang);
    let snapshot = state();
    let values = snapshot.values.clone();
    let errors = snapshot.errors.clone();
    let is_valid = is_next_enabled(&snapshot);
    let field_error = |field: ListField| errors.get(field).map(|e| e.message(lang));

    let header_title = match props.mode {
        ListFormMode::Create => locale.create_list,
        ListFormMode::Edit { .. } => locale.edit_list,
    };

    let browsing = selection().browsing();
    let highlighted_color =
        (values.background_palette == browsing).then(|| values.background_color.clone());

    rsx! {
        div {
            class: "create-list",

            Header {
                title: header_title.to_string(),
                left_label: locale.close.to_string(),
                on_left: move |_| on_back.call(()),
                right: rsx! {
                    button {
                        class: if is_valid { "header-next-button active" } else { "header-next-button" },
                        disabled: !is_valid,
                        onclick: move |_| on_next.call(()),
                        "{locale.next}"
                    }
                }
            }

            div {
                class: "create-list-body",

                Section {
                    title: locale.title.to_string(),
                    is_required: true,
                    required_label: locale.required.to_string(),
                    SimpleInput {
                        kind: InputKind::Short,
                        value: values.title.clone(),
                        placeholder: placeholder.title.to_string(),
                        error: field_error(ListField::Title),
                        max_chars: TITLE_MAX_CHARS,
                        on_change: move |title: String| dispatch.call(ListAction::SetTitle(title)),
                    }
                }

                Section {
                    title: locale.description.to_string(),
                    SimpleInput {
                        kind: InputKind::Long,
                        value: values.description.clone(),
                        placeholder: placeholder.description.to_string(),
                        error: field_error(ListField::Description),
                        max_chars: DESCRIPTION_MAX_CHARS,
                        on_change: move |description: String| {
                            dispatch.call(ListAction::SetDescription(description))
                        },
                    }
                }

                Section {
                    title: locale.category.to_string(),
                    is_required: true,
                    required_label: locale.required.to_string(),
                    {match &*categories.read() {
                        None => rsx! {
                            LoadingIndicator { message: locale.loading_categories.to_string() }
                        },
                        Some(Err(e)) => {
                            console_warn!(
                                "[CreateList] Categories unavailable (temporary: {}): {}",
                                e.is_temporary(),
                                e
                            );
                            rsx! { FetchErrorNotice { message: locale.fetch_failed.to_string() } }
                        }
                        Some(Ok(list)) => rsx! {
                            ButtonSelector {
                                categories: selectable_categories(list),
                                selected: values.category.clone(),
                                language: lang,
                                on_select: move |category: Category| {
                                    dispatch.call(ListAction::select_category(&category))
                                },
                            }
                        },
                    }}
                    if let Some(error) = field_error(ListField::Category) {
                        span { class: "field-error", "{error}" }
                    }
                }

                Section {
                    title: locale.label.to_string(),
                    LabelInput {
                        labels: values.labels.clone(),
                        placeholder: placeholder.label.to_string(),
                        language: lang,
                        error: field_error(ListField::Labels),
                        on_change: move |labels: Vec<String>| dispatch.call(ListAction::SetLabels(labels)),
                    }
                }

                Section {
                    title: locale.add_collaborator.to_string(),
                    {match &*following.read() {
                        None => rsx! {
                            LoadingIndicator { message: locale.loading_following.to_string() }
                        },
                        Some(Err(e)) => {
                            console_warn!(
                                "[CreateList] Following list unavailable (temporary: {}): {}",
                                e.is_temporary(),
                                e
                            );
                            rsx! { FetchErrorNotice { message: locale.fetch_failed.to_string() } }
                        }
                        Some(Ok(list)) => rsx! {
                            MemberSelector {
                                placeholder: placeholder.collaborator.to_string(),
                                following: list.clone().map(|l| l.followings).unwrap_or_default(),
                                selected_ids: values.collaborator_ids.clone(),
                                error: collaborator_error()
                                    .map(|e| e.message(lang).to_string())
                                    .or(field_error(ListField::CollaboratorIds)),
                                empty_message: locale.no_following.to_string(),
                                on_add: move |user_id: u64| {
                                    let ids = state.peek().values.collaborator_ids.clone();
                                    match add_collaborator(&ids, user_id, COLLABORATORS_MAX) {
                                        Ok(next) => {
                                            collaborator_error.set(None);
                                            dispatch.call(ListAction::SetCollaboratorIds(next));
                                        }
                                        Err(e) => {
                                            console_warn!("[CreateList] {}", e);
                                            collaborator_error.set(Some(e));
                                        }
                                    }
                                },
                                on_delete: move |user_id: u64| {
                                    let ids = state.peek().values.collaborator_ids.clone();
                                    collaborator_error.set(None);
                                    dispatch.call(ListAction::SetCollaboratorIds(
                                        remove_collaborator(&ids, user_id),
                                    ));
                                },
                            }
                        },
                    }}
                }

                Section {
                    title: locale.background_color.to_string(),
                    is_required: true,
                    required_label: locale.required.to_string(),
                    PaletteSelector {
                        selected: browsing,
                        language: lang,
                        on_change: move |palette: BackgroundPalette| {
                            selection.write().choose_palette(palette)
                        },
                    }
                    ColorSelector {
                        palette: browsing,
                        selected_color: highlighted_color,
                        on_pick: move |color: String| {
                            let action = selection.peek().pick_color(&color);
                            if let Some(action) = action {
                                dispatch.call(action);
                            }
                        },
                    }
                }

                Section {
                    title: locale.public_setting.to_string(),
                    is_required: true,
                    required_label: locale.required.to_string(),
                    RadioInput {
                        name: "isPublic".to_string(),
                        value: values.is_public,
                        true_message: locale.public_message.to_string(),
                        false_message: locale.private_message.to_string(),
                        on_change: move |is_public: bool| dispatch.call(ListAction::SetPublic(is_public)),
                    }
                }
            }
        }
    }
}
