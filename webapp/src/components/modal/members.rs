use dioxus::prelude::*;

use super::{MODAL_STACK, Modal, ModalSize, ModernModal};
use crate::components::avatar::{Avatar, AvatarSize};
use gridhub_common::community::MEMBERS;

#[component]
pub fn FriendsListDialog() -> Element {
    rsx! {
        button {
            class: "btn btn-secondary btn-sm btn-block",
            onclick: move |_| {
                MODAL_STACK.with_mut(|v| v.push(Modal::FriendsList));
            },
            "View Members"
        }
    }
}

#[component]
pub fn FriendsListModal() -> Element {
    rsx! {
        ModernModal { title: "Community Members", size: ModalSize::Small,
            ul { class: "member-list",
                for member in MEMBERS.iter() {
                    li { key: "{member.handle}", class: "member-row",
                        Avatar {
                            src: None,
                            size: AvatarSize::Medium,
                            initials: member.initials(),
                        }
                        div {
                            div { style: "font-weight: 500;", "{member.name}" }
                            div { class: "muted", "{member.handle} · {member.location}" }
                        }
                    }
                }
            }
        }
    }
}
