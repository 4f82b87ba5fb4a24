use dioxus::prelude::*;
use ui::features::list_draft::TemplateParams;
use ui::{ListCreationFlow, ListFormMode};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    // Missing query args arrive as empty strings, so an empty value counts as absent
    #[route("/list/create?:title&:category")]
    CreateList { title: String, category: String },
    #[route("/list/:list_id/edit")]
    EditList { list_id: u64 },
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            class: "home",
            Link {
                to: Route::CreateList { title: String::new(), category: String::new() },
                "Create a list"
            }
        }
    }
}

#[component]
fn CreateList(title: String, category: String) -> Element {
    let template = TemplateParams::from_query(Some(title), Some(category));

    rsx! {
        ListCreationFlow {
            mode: ListFormMode::Create,
            template: template,
            on_exit: move |_| navigator().go_back(),
        }
    }
}

#[component]
fn EditList(list_id: u64) -> Element {
    rsx! {
        ListCreationFlow {
            mode: ListFormMode::Edit { list_id },
            on_exit: move |_| navigator().go_back(),
        }
    }
}
