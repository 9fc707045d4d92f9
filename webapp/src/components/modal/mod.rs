use dioxus::prelude::*;

mod members;
pub use members::FriendsListDialog;
use members::FriendsListModal;

// global modal signal
//
// the dialogs are opened from cards deep in the dashboard but drawn above the
// whole page, so the stack lives outside any one component
pub static MODAL_STACK: GlobalSignal<Vec<Modal>> = Signal::global(|| Vec::new());

// Modal
//
// every dialog we can display.  pushing one onto the modal stack makes the
// ModalBox, below, draw it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Modal {
    FriendsList,
}

pub fn close_modal() {
    MODAL_STACK.with_mut(|v| {
        v.pop();
    });
}

// ModalBox
//
// mounted once by the layout; shows whatever is on top of the stack
#[component]
pub fn ModalBox() -> Element {
    match MODAL_STACK.read().last() {
        Some(Modal::FriendsList) => rsx! {
            FriendsListModal {}
        },
        None => rsx! {},
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    children: Element,
}

#[derive(Clone, PartialEq)]
pub enum ModalSize {
    Small,
    Medium,
}

impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

#[component]
pub fn ModernModal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 400px;",
        ModalSize::Medium => "max-width: 600px;",
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                close_modal();
            },
            div {
                class: "modal-content",
                style: "{width}",
                // clicks inside the dialog must not reach the overlay
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        onclick: move |_| close_modal(),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }
            }
        }
    }
}
