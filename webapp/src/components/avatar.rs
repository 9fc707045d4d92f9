use dioxus::prelude::*;

use crate::components::icons::{Icon, IconSize, IconSvg};

#[derive(Clone, Copy, PartialEq)]
pub enum AvatarSize {
    Small,
    Medium,
}

impl Default for AvatarSize {
    fn default() -> Self {
        AvatarSize::Small
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    #[props(!optional)]
    src: Option<String>,
    #[props(default)]
    size: AvatarSize,
    // shown instead of the user icon when there is no usable image
    initials: Option<String>,
}

// Avatar
//
// a missing reference and an image that fails to load look the same: the
// fallback.  the failure is remembered per src so a new reference gets a
// fresh attempt
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let mut failed_src = use_signal(|| None::<String>);

    let class = match props.size {
        AvatarSize::Small => "avatar avatar-sm",
        AvatarSize::Medium => "avatar avatar-md",
    };

    let current_src = props.src.clone();
    let usable = props
        .src
        .clone()
        .filter(|src| failed_src.read().as_ref() != Some(src));

    rsx! {
        span { class,
            if let Some(src) = usable {
                img {
                    src: "{src}",
                    alt: "avatar",
                    onerror: move |_| {
                        tracing::warn!("avatar image failed to load, using fallback");
                        failed_src.set(current_src.clone());
                    },
                }
            } else if let Some(initials) = &props.initials {
                "{initials}"
            } else {
                IconSvg { icon: Icon::UserCircle, size: IconSize::Md }
            }
        }
    }
}
