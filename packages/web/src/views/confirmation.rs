//! Post-submission confirmation page, a pure function of two query
//! parameters (`status`, `message`).

use dioxus::prelude::*;
use ui::{Button, ButtonVariant, Spinner};

use crate::Route;

const DEFAULT_SUCCESS_MESSAGE: &str = "Registration completed successfully.";
const DEFAULT_ERROR_MESSAGE: &str = "A registration error occurred.";

/// Outcome encoded in the confirmation URL.
#[derive(Clone, Debug, PartialEq)]
enum Outcome {
    Success { message: String },
    Error { message: String },
    /// Unrecognized or missing status: treated as a direct navigation.
    Invalid,
}

impl Outcome {
    fn parse(status: &str, message: &str) -> Self {
        let message = message.trim();
        match status {
            "success" => Outcome::Success {
                message: if message.is_empty() {
                    DEFAULT_SUCCESS_MESSAGE.to_string()
                } else {
                    message.to_string()
                },
            },
            "error" => Outcome::Error {
                message: if message.is_empty() {
                    DEFAULT_ERROR_MESSAGE.to_string()
                } else {
                    message.to_string()
                },
            },
            _ => Outcome::Invalid,
        }
    }
}

#[component]
pub fn Confirmation(status: String, message: String) -> Element {
    let nav = use_navigator();

    match Outcome::parse(&status, &message) {
        // Keep the ready screen while bouncing home; never flash a template.
        Outcome::Invalid => {
            nav.replace(Route::Home {});
            rsx! {
                div {
                    class: "confirmation-page confirmation-page--loading",
                    Spinner { size: 48 }
                }
            }
        }
        Outcome::Success { message } => rsx! {
            div {
                class: "confirmation-page",
                div {
                    class: "confirmation-card",
                    div {
                        class: "confirmation-card__header",
                        h2 { "Success!" }
                        p { "Your registration has been processed" }
                    }
                    div {
                        class: "confirmation-card__body",
                        div { class: "confirmation-card__icon confirmation-card__icon--success", "✓" }
                        h3 { class: "confirmation-card__title--success", "Registration complete!" }
                        p { class: "confirmation-card__message", "{message}" }
                        div {
                            class: "confirmation-card__note",
                            p {
                                "Your data has been saved."
                                br {}
                                "You will receive more information by email soon."
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "confirmation-card__action",
                            onclick: move |_| { nav.push(Route::Home {}); },
                            "Back to home"
                        }
                        p {
                            class: "confirmation-card__footer",
                            "Thank you for registering! More information is on the way."
                        }
                    }
                }
            }
        },
        Outcome::Error { message } => rsx! {
            div {
                class: "confirmation-page",
                div {
                    class: "confirmation-card",
                    div {
                        class: "confirmation-card__header",
                        h2 { "Oops!" }
                        p { "Something went wrong" }
                    }
                    div {
                        class: "confirmation-card__body",
                        div { class: "confirmation-card__icon confirmation-card__icon--error", "✕" }
                        h3 { class: "confirmation-card__title--error", "Registration failed" }
                        p { class: "confirmation-card__message", "{message}" }
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "confirmation-card__action",
                            onclick: move |_| { nav.push(Route::Register {}); },
                            "Try again"
                        }
                        Button {
                            variant: ButtonVariant::Muted,
                            class: "confirmation-card__action",
                            onclick: move |_| { nav.push(Route::Home {}); },
                            "Back to home"
                        }
                        p {
                            class: "confirmation-card__footer",
                            "If the problem persists, please get in touch with us."
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_unknown_status_is_invalid() {
        assert_eq!(Outcome::parse("", ""), Outcome::Invalid);
        assert_eq!(Outcome::parse("done", "hi"), Outcome::Invalid);
        assert_eq!(Outcome::parse("SUCCESS", ""), Outcome::Invalid);
    }

    #[test]
    fn error_without_message_uses_the_default_text() {
        assert_eq!(
            Outcome::parse("error", ""),
            Outcome::Error { message: DEFAULT_ERROR_MESSAGE.to_string() }
        );
    }

    #[test]
    fn success_defaults_and_passthrough() {
        assert_eq!(
            Outcome::parse("success", ""),
            Outcome::Success { message: DEFAULT_SUCCESS_MESSAGE.to_string() }
        );
        assert_eq!(
            Outcome::parse("success", "Welcome aboard"),
            Outcome::Success { message: "Welcome aboard".to_string() }
        );
    }
}
