use dioxus::prelude::*;

use crate::components::logo::Logo;

#[derive(Clone, PartialEq, Props)]
pub struct WelcomeBannerProps {
    welcome: String,
    tagline: &'static str,
}

#[component]
pub fn WelcomeBanner(props: WelcomeBannerProps) -> Element {
    rsx! {
        section { class: "card banner",
            div { class: "banner-text",
                h1 { class: "banner-title", "{props.welcome}" }
                p { style: "color: var(--text-muted); margin-bottom: var(--space-6);",
                    "{props.tagline}"
                }
            }
            div { class: "banner-art", Logo { size: 192 } }
        }
    }
}
