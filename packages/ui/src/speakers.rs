use dioxus::prelude::*;

struct Speaker {
    name: &'static str,
    role: &'static str,
    topic: &'static str,
}

const SPEAKERS: [Speaker; 3] = [
    Speaker {
        name: "Pr. Carlos Alberto",
        role: "Pastor, Senador La Roque Baptist Church",
        topic: "Discovering Your Professional Identity",
    },
    Speaker {
        name: "Pr. Bruno Ernandes",
        role: "Youth pastor, Imperatriz First Baptist Church",
        topic: "The Purpose of Life in the Digital Age",
    },
    Speaker {
        name: "Pr. Carlos Pontes",
        role: "Pastor, Porta Formosa Baptist Church",
        topic: "Turning Passion into Mission",
    },
];

#[component]
pub fn Speakers() -> Element {
    rsx! {
        section {
            id: "speakers",
            class: "section section--gray",
            div {
                class: "section__heading",
                h2 { "Speakers" }
                p {
                    "Meet the people sharing their experience to help you find "
                    "your identity and mission."
                }
            }

            div {
                class: "card-grid card-grid--three",
                for speaker in SPEAKERS {
                    div {
                        class: "card speaker-card",
                        div { class: "speaker-card__photo" }
                        h3 { "{speaker.name}" }
                        p { class: "speaker-card__role", "{speaker.role}" }
                        p { class: "speaker-card__topic", "{speaker.topic}" }
                    }
                }
            }
        }
    }
}
