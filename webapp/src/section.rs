use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use gridhub_common::features::Section;

impl From<Section> for Route {
    fn from(section: Section) -> Self {
        match section {
            Section::Calculators => Route::Calculators {},
            Section::Alerts => Route::Alerts {},
            Section::Resources => Route::Resources {},
            Section::Chat => Route::Chat {},
            Section::Contact => Route::Contact {},
        }
    }
}

// the sections themselves are built out separately; until then each route
// lands on a stub so dashboard links never dead-end
#[derive(Clone, PartialEq, Props)]
struct SectionPageProps {
    section: Section,
}

#[component]
fn SectionPage(props: SectionPageProps) -> Element {
    let label = props.section.label();

    rsx! {
        div {
            div { class: "empty-state",
                h2 { class: "section-title", "{label}" }
                p { style: "color: var(--text-secondary); margin-bottom: var(--space-4);",
                    "This section is on its way."
                }
                Link { to: Route::DashboardPage {}, class: "btn btn-primary", "Back to Dashboard" }
            }
        }
    }
}

#[component]
pub fn Calculators() -> Element {
    rsx! {
        SectionPage { section: Section::Calculators }
    }
}

#[component]
pub fn Alerts() -> Element {
    rsx! {
        SectionPage { section: Section::Alerts }
    }
}

#[component]
pub fn Resources() -> Element {
    rsx! {
        SectionPage { section: Section::Resources }
    }
}

#[component]
pub fn Chat() -> Element {
    rsx! {
        SectionPage { section: Section::Chat }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        SectionPage { section: Section::Contact }
    }
}
