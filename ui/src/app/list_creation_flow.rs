use dioxus::prelude::*;

use super::context::{FlowStep, ListFormContext, ListFormMode, ServiceContext};
use crate::components::display::{DraftReview, FetchErrorNotice, LoadingIndicator};
use crate::components::forms::CreateListForm;
use crate::features::list_draft::{
    list_locale, DraftList, Language, ListAction, ListFormState, TemplateParams, TemplatePrefill,
};
use crate::services::config::AppConfig;
use crate::services::storage::PreferenceStore;
use crate::utils::initial_language;
use crate::{console_error, console_info, console_warn};

const CREATE_LIST_CSS: Asset = asset!("/assets/styling/create_list.css");

#[derive(Props, PartialEq, Clone)]
pub struct ListCreationFlowProps {
    pub mode: ListFormMode,
    #[props(default)]
    pub template: Option<TemplateParams>,
    /// Leaves the flow, e.g. navigates back
    pub on_exit: EventHandler<()>,
}

/// Entry point of the list creation flow. Builds the API services once and
/// hands off to the steps.
#[component]
pub fn ListCreationFlow(props: ListCreationFlowProps) -> Element {
    let services = use_hook(|| ServiceContext::from_config(&AppConfig::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: CREATE_LIST_CSS }

        {match services {
            Ok(services) => rsx! {
                ListCreationSteps {
                    services: services,
                    mode: props.mode,
                    template: props.template.clone(),
                    on_exit: props.on_exit,
                }
            },
            Err(e) => {
                console_error!("[ListCreationFlow] Failed to set up API client: {}", e);
                rsx! { FetchErrorNotice { message: e.to_string() } }
            }
        }}
    }
}

#[derive(Props, PartialEq, Clone)]
struct ListCreationStepsProps {
    services: ServiceContext,
    mode: ListFormMode,
    template: Option<TemplateParams>,
    on_exit: EventHandler<()>,
}

#[component]
fn ListCreationSteps(props: ListCreationStepsProps) -> Element {
    let services = use_context_provider(|| props.services.clone());
    let mut language = use_context_provider(|| Signal::new(initial_language()));
    use_context_provider(|| Signal::new(PreferenceStore::get_current_user().ok()));

    // The draft lives here so it survives moving between steps
    let mut state = use_signal(ListFormState::default);
    let dispatch = EventHandler::new(move |action: ListAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });
    // Kept here rather than in the form so leaving the info step does not reset it
    let prefill = use_signal(|| TemplatePrefill::new(props.template.clone()));
    use_context_provider(|| ListFormContext {
        state,
        dispatch,
        prefill,
    });

    let mut step = use_signal(|| FlowStep::ListInfo);
    let mut loaded_list = use_signal(|| None::<u64>);

    let mode = props.mode;
    let on_exit = props.on_exit;

    // Edit mode: load the stored list into the draft once per list id.
    // `mode` is a prop, so it has to be made reactive for route changes.
    let stored_list = use_resource(use_reactive!(|(mode,)| {
        let services = services.clone();
        async move {
            match mode {
                ListFormMode::Edit { list_id } => {
                    services.list_detail(list_id).await.map(|detail| Some((list_id, detail)))
                }
                ListFormMode::Create => Ok(None),
            }
        }
    }));

    use_effect(move || {
        let loaded = match &*stored_list.read() {
            Some(Ok(Some((list_id, detail)))) => Some((*list_id, detail.clone())),
            _ => None,
        };
        if let Some((list_id, detail)) = loaded {
            if *loaded_list.peek() != Some(list_id) {
                console_info!("[ListCreationFlow] Loaded list {} for editing", list_id);
                loaded_list.set(Some(list_id));
                dispatch.call(ListAction::ResetDraft(DraftList::from(detail)));
            }
        }
    });

    let lang = language();
    let locale = list_locale(lang);
    let toggle_label = match lang {
        Language::Ko => "EN",
        Language::En => "한국어",
    };

    let waiting_for_list = mode.pending_list(loaded_list()).is_some();

    rsx! {
        div {
            class: "list-creation-flow",

            button {
                r#type: "button",
                class: "language-toggle",
                onclick: move |_| {
                    let next = language().toggled();
                    language.set(next);
                    if let Err(e) = PreferenceStore::store_language(next) {
                        console_warn!("[ListCreationFlow] Could not persist language: {}", e);
                    }
                },
                "{toggle_label}"
            }

            if waiting_for_list {
                {match &*stored_list.read() {
                    Some(Err(e)) => {
                        console_error!("[ListCreationFlow] Failed to load list: {}", e);
                        rsx! { FetchErrorNotice { message: locale.fetch_failed.to_string() } }
                    }
                    _ => rsx! { LoadingIndicator { message: locale.loading_list.to_string() } },
                }}
            } else {
                {match step() {
                    FlowStep::ListInfo => rsx! {
                        CreateListForm {
                            mode: mode,
                            on_back: move |_| on_exit.call(()),
                            on_next: move |_| step.set(FlowStep::Review),
                        }
                    },
                    FlowStep::Review => rsx! {
                        DraftReview {
                            draft: state().values,
                            language: lang,
                            on_back: move |_| step.set(FlowStep::ListInfo),
                        }
                    },
                }}
            }
        }
    }
}
