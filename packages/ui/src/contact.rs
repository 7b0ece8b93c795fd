use dioxus::prelude::*;

#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section {
            class: "cta",
            h2 { "Ready to transform your life?" }
            p {
                "Don't miss the chance to discover your identity and mission. "
                "Spots are limited."
            }
            a { class: "btn btn--light", href: "/register", "Register now →" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let channels = [
        ("Email", "contato@livresconference.com.br", "We reply within 24 hours"),
        ("WhatsApp", "(99) 98147-5680", "Available 9 am to 6 pm"),
        ("Social", "@juvlivres", "Follow for event updates"),
    ];

    rsx! {
        section {
            id: "contact",
            class: "section",
            div {
                class: "section__heading",
                h2 { "Get in touch" }
                p { "Questions about the event? Our team is ready to help." }
            }

            div {
                class: "card-grid card-grid--three",
                for (title, content, description) in channels {
                    div {
                        class: "card contact-card",
                        h3 { "{title}" }
                        p { class: "card__content", "{content}" }
                        p { class: "card__description", "{description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Venue() -> Element {
    rsx! {
        section {
            class: "section section--gray",
            div {
                class: "section__heading",
                h2 { "Venue" }
                p { "A welcoming space prepared for the best possible experience." }
            }

            div {
                class: "venue",
                div {
                    class: "card",
                    h3 { "Address" }
                    p {
                        "Imperatriz First Baptist Church"
                        br {}
                        "Rua Hermes da Fonseca, 30"
                        br {}
                        "Centro — Imperatriz, MA"
                        br {}
                        "65900-600"
                    }
                    h3 { "Facilities" }
                    p {
                        "Air-conditioned hall, coffee break, networking area, "
                        "free parking and accessible entrances."
                    }
                }
                div {
                    class: "venue__map",
                    p { "Map of the venue" }
                    p { class: "venue__map-caption", "Imperatriz First Baptist Church" }
                }
            }
        }
    }
}
