use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        avatar::Avatar,
        icons::{Icon, IconSize, IconSvg},
        modal::FriendsListDialog,
    },
};
use gridhub_common::{dashboard::Advert, profile::ProfileSummary};

#[derive(Clone, PartialEq, Props)]
pub struct SummaryStripProps {
    profile: ProfileSummary,
    community_total: usize,
    advert: Advert,
}

#[component]
pub fn SummaryStrip(props: SummaryStripProps) -> Element {
    rsx! {
        div { class: "summary-grid",
            ProfileCard { profile: props.profile }
            CommunityCard { total: props.community_total }
            AdvertCard { advert: props.advert }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ProfileCardProps {
    profile: ProfileSummary,
}

#[component]
fn ProfileCard(props: ProfileCardProps) -> Element {
    let profile = props.profile;

    rsx! {
        div { class: "card",
            div { class: "card-header",
                div { class: "profile-heading",
                    Avatar { src: profile.avatar.clone() }
                    h3 { class: "card-title", "{profile.title}" }
                }
                IconSvg { icon: Icon::UserCircle, size: IconSize::Sm, muted: true }
            }
            div { class: "card-content",
                div { class: "stat-value", "{profile.followers}" }
                p { class: "muted", "Total Followers" }
                div { class: "profile-location muted",
                    IconSvg { icon: Icon::MapPin, size: IconSize::Xs }
                    span { "{profile.location}" }
                }
                p { class: "muted truncate", style: "padding-top: var(--space-1);",
                    "{profile.bio}"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CommunityCardProps {
    total: usize,
}

#[component]
fn CommunityCard(props: CommunityCardProps) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title", "Community" }
                IconSvg { icon: Icon::Users, size: IconSize::Sm, muted: true }
            }
            div { class: "card-content",
                div { class: "stat-value", "{props.total}" }
                p { class: "muted", style: "padding-bottom: var(--space-2);", "Total Members" }
                FriendsListDialog {}
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AdvertCardProps {
    advert: Advert,
}

#[component]
fn AdvertCard(props: AdvertCardProps) -> Element {
    let advert = props.advert;

    rsx! {
        div { class: "card span-2",
            div { class: "card-header",
                h3 { class: "card-title", "{advert.title}" }
                IconSvg { icon: Icon::Megaphone, size: IconSize::Sm, muted: true }
            }
            div { class: "card-content",
                p { class: "muted", style: "padding-bottom: var(--space-2);", "{advert.blurb}" }
                Link {
                    to: Route::from(advert.section),
                    class: "btn btn-primary btn-sm btn-block",
                    "{advert.cta}"
                }
            }
        }
    }
}
