use dioxus::prelude::*;

use ui::{ApiProvider, NoticeProvider};
use views::{Admin, Confirmation, Home, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/register")]
    Register {},
    #[route("/confirmation?:status&:message")]
    Confirmation { status: String, message: String },
    #[route("/admin")]
    Admin {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ApiProvider {
            NoticeProvider {
                Router::<Route> {}
            }
        }
    }
}
