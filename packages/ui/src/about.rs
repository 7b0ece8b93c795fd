use dioxus::prelude::*;

struct InfoCard {
    title: &'static str,
    content: &'static str,
    description: &'static str,
}

const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "Date and duration",
        content: "August 15–17",
        description: "Three days to dive into what God has in store for your life.",
    },
    InfoCard {
        title: "Times",
        content: "Fri 7:30 pm · Sat 9 am / 3 pm / 7:30 pm · Sun 9 am",
        description: "A full programme of talks, workshops and hands-on activities.",
    },
    InfoCard {
        title: "Who it is for",
        content: "Teenagers and young adults",
        description: "Limited capacity, so every attendee gets a personal experience.",
    },
];

const HOW_IT_WORKS: [(&str, &str); 3] = [
    (
        "Inspiring talks",
        "Seasoned speakers sharing their journeys on identity, purpose and mission.",
    ),
    (
        "Practical workshops",
        "Hands-on sessions to map your talents and build real skills.",
    ),
    (
        "Networking",
        "Connect with people who share the same vision and build lasting friendships.",
    ),
];

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "section",
            div {
                class: "section__heading",
                h2 { "About the event" }
                p {
                    "The Livres Conference is a gathering for young people searching for "
                    "purpose, identity and mission. Three days of inspiration, learning "
                    "and connections that will change your perspective."
                }
            }

            div {
                class: "card-grid card-grid--three",
                for card in INFO_CARDS {
                    div {
                        class: "card",
                        h3 { "{card.title}" }
                        p { class: "card__content", "{card.content}" }
                        p { class: "card__description", "{card.description}" }
                    }
                }
            }

            div {
                class: "about__panel",
                div {
                    h3 { "How it works" }
                    ul {
                        class: "about__steps",
                        for (title, description) in HOW_IT_WORKS {
                            li {
                                h4 { "{title}" }
                                p { "{description}" }
                            }
                        }
                    }
                }
                div {
                    class: "about__theme",
                    h4 { "This year's theme" }
                    p { class: "about__theme-name", "\"Identity and Mission\"" }
                    p {
                        "Discover who you really are and what your unique purpose is. "
                        "A journey of self-discovery that will transform how you see the future."
                    }
                }
            }
        }
    }
}
