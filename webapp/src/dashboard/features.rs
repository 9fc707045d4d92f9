use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::icons::{Icon, IconSvg},
};
use gridhub_common::features::Feature;

#[derive(Clone, PartialEq, Props)]
pub struct FeatureGridProps {
    features: &'static [Feature],
}

#[component]
pub fn FeatureGrid(props: FeatureGridProps) -> Element {
    rsx! {
        div { class: "feature-grid",
            for feature in props.features.iter() {
                FeatureCard { key: "{feature.title}", feature: *feature }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct FeatureCardProps {
    feature: Feature,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    let feature = props.feature;

    rsx! {
        div { class: "card feature-card",
            div { class: "card-header feature-header",
                div { class: "feature-icon",
                    IconSvg { icon: Icon::from(feature.icon) }
                }
                h3 { class: "feature-title", "{feature.title}" }
            }
            div { class: "card-content",
                p { class: "card-description", "{feature.description}" }
                Link { to: Route::from(feature.section), class: "feature-link", "{feature.cta()}" }
            }
        }
    }
}
