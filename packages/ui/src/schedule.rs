use dioxus::prelude::*;

struct ScheduleDay {
    day: &'static str,
    events: &'static [(&'static str, &'static str, &'static str)],
}

const SCHEDULE: [ScheduleDay; 3] = [
    ScheduleDay {
        day: "Friday — Aug 15",
        events: &[
            ("7:00 pm", "Opening and check-in", "Livres team"),
            ("7:30 pm", "Talk: Discovering Your Identity", "Pr. Carlos Alberto"),
            ("8:30 pm", "Networking and coffee break", ""),
        ],
    },
    ScheduleDay {
        day: "Saturday — Aug 16",
        events: &[
            ("9:00 am", "Workshop: Mapping your talents", "Pr. Bruno Ernandes"),
            ("11:00 am", "Panel: Young people who transform", "Special guests"),
            ("2:00 pm", "Hands-on: Defining your mission", "Pr. Carlos Pontes"),
            ("4:00 pm", "Round table: Career and purpose", "All speakers"),
            ("7:00 pm", "Fellowship dinner", ""),
        ],
    },
    ScheduleDay {
        day: "Sunday — Aug 17",
        events: &[
            ("9:00 am", "Meditation and reflection", "Livres team"),
            ("10:00 am", "Talk: Turning Passion into Mission", "Pr. Carlos Pontes"),
            ("11:30 am", "One-on-one mentoring", "All speakers"),
            ("2:00 pm", "Project presentations", "Attendees"),
            ("4:00 pm", "Closing and certificates", "Livres team"),
        ],
    },
];

#[component]
pub fn Schedule() -> Element {
    rsx! {
        section {
            id: "schedule",
            class: "section",
            div {
                class: "section__heading",
                h2 { "Schedule" }
                p { "Three days, end to end." }
            }

            div {
                class: "card-grid card-grid--three",
                for day in SCHEDULE {
                    div {
                        class: "card schedule-card",
                        h3 { "{day.day}" }
                        ul {
                            for &(time, title, speaker) in day.events {
                                li {
                                    span { class: "schedule-card__time", "{time}" }
                                    div {
                                        p { class: "schedule-card__title", "{title}" }
                                        if !speaker.is_empty() {
                                            p { class: "schedule-card__speaker", "{speaker}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
