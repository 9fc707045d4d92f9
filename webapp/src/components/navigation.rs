use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{logo::Logo, modal::ModalBox},
};
use gridhub_common::{features::Section, profile::BRAND};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path == target { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let sections = [
        Section::Calculators,
        Section::Alerts,
        Section::Resources,
        Section::Chat,
    ];

    rsx! {
        header { class: "app-header",
            div { class: "nav-container",
                div { class: "logo",
                    Link { to: Route::DashboardPage {},
                        Logo { size: 28 }
                        span { "{BRAND}" }
                    }
                }

                nav { class: "nav-links",
                    NavBarButton {
                        name: "Dashboard".to_owned(),
                        target: Route::DashboardPage {},
                    }
                    for section in sections {
                        NavBarButton {
                            key: "{section.path()}",
                            name: section.label().to_owned(),
                            target: Route::from(section),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        main { class: "container page-content", Outlet::<Route> {} }
        ModalBox {}
    }
}
