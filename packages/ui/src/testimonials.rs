use dioxus::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Joao Victor",
        role: "Engineering student",
        text: "The Livres Conference completely changed how I see my future. I found my true passion!",
    },
    Testimonial {
        name: "Maria",
        role: "Designer",
        text: "Three days that transformed my life. The connections I made here are for life.",
    },
    Testimonial {
        name: "Lucas",
        role: "Developer",
        text: "I never imagined an event could have this much impact. I recommend it to everyone!",
    },
];

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section {
            id: "testimonials",
            class: "section section--gray",
            div {
                class: "section__heading",
                h2 { "Testimonials" }
                p { "What attendees of previous editions have to say." }
            }

            div {
                class: "card-grid card-grid--three",
                for t in TESTIMONIALS {
                    div {
                        class: "card testimonial-card",
                        div { class: "testimonial-card__stars", "★★★★★" }
                        p { class: "testimonial-card__text", "\u{201c}{t.text}\u{201d}" }
                        h4 { "{t.name}" }
                        p { class: "testimonial-card__role", "{t.role}" }
                    }
                }
            }
        }
    }
}
