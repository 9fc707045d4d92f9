use dioxus::prelude::*;

use gridhub_common::DashboardView;

use crate::common::storage::BrowserStore;

mod banner;
use banner::WelcomeBanner;

mod features;
use features::FeatureGrid;

mod summary;
use summary::SummaryStrip;

// DashboardPage
//
// the stored profile values are read fresh on every render; nothing here
// writes back to storage
#[component]
pub fn DashboardPage() -> Element {
    let DashboardView {
        welcome,
        tagline,
        profile,
        community_total,
        advert,
        features,
    } = DashboardView::load(&BrowserStore);

    rsx! {
        div { class: "dashboard",
            WelcomeBanner { welcome, tagline }
            ErrorBoundary {
                handle_error: |error: ErrorContext| {
                    rsx! {
                        if let Some(error_ui) = error.show() {
                            {error_ui}
                        } else {
                            div { class: "card empty-state", "The dashboard could not be displayed. Try reloading the page." }
                        }
                    }
                },
                SummaryStrip { profile, community_total, advert }
                FeatureGrid { features }
            }
        }
    }
}
