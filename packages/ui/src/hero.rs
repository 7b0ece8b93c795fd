use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "home",
            class: "hero",
            div {
                class: "hero__content",
                h1 { class: "hero__title", "Livres Conference" }
                p { class: "hero__subtitle", "Identity and Mission — three days to discover yours." }
                a { class: "btn btn--primary hero__cta", href: "/register", "Register now →" }
            }
        }
    }
}

/// Headline numbers under the hero banner.
#[component]
pub fn Stats() -> Element {
    let stats = [
        ("200+", "Attendees"),
        ("3", "Speakers"),
        ("3", "Event days"),
        ("98%", "Satisfaction"),
    ];

    rsx! {
        section {
            class: "stats",
            div {
                class: "stats__grid",
                for (value, label) in stats {
                    div {
                        class: "stats__card",
                        div { class: "stats__value", "{value}" }
                        p { class: "stats__label", "{label}" }
                    }
                }
            }
        }
    }
}
