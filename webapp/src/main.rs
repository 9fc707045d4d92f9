#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod dashboard;
use dashboard::DashboardPage;

mod section;
use section::{Alerts, Calculators, Chat, Contact, Resources};

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every Section in the common crate needs a route here, see section.rs
#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        DashboardPage {},
        #[route("/calculators")]
        Calculators {},
        #[route("/alerts")]
        Alerts {},
        #[route("/resources")]
        Resources {},
        #[route("/chat")]
        Chat {},
        #[route("/contact")]
        Contact {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::APP_STYLES}" }
        style { "{common::style::DASHBOARD_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
