//! Attendee registration form with duplicate-email detection.
//!
//! The email field is checked against the API on blur. A hit switches the
//! card into a read-only "already registered" view with edit / start-over
//! actions; editing the email invalidates any prior finding. Submission is
//! hard-gated on the image-use consent checkbox.

use api::{is_checkable_email, Gender, Registration, RegistrationDraft};
use dioxus::prelude::*;
use ui::{push_notice, use_api, use_notices, Button, ButtonVariant, Input, Label, NoticeLevel, Spinner};

use crate::Route;

const DEFAULT_SUCCESS_MESSAGE: &str = "Registration completed successfully.";

/// Duplicate-detection state produced by the email pre-check.
///
/// `record` is the registration the API reported for the current email;
/// `visible` selects the read-only "already registered" card. Loading the
/// record for editing hides the card but keeps the record, so submission
/// stays blocked until the email itself changes.
#[derive(Clone, Debug, Default, PartialEq)]
struct DuplicateState {
    record: Option<Registration>,
    visible: bool,
}

impl DuplicateState {
    fn found(&mut self, record: Registration) {
        self.record = Some(record);
        self.visible = true;
    }

    fn not_found(&mut self) {
        self.record = None;
        self.visible = false;
    }

    /// Editing the email invalidates the finding, whatever was typed.
    fn email_edited(&mut self) {
        self.record = None;
        self.visible = false;
    }

    /// Go back to the form without forgetting the duplicate.
    fn dismiss_view(&mut self) {
        self.visible = false;
    }

    fn has_record(&self) -> bool {
        self.record.is_some()
    }
}

/// Submit-button enablement contract: idle, consent given, no duplicate.
fn can_submit(submitting: bool, image_authorization: bool, has_existing: bool) -> bool {
    !submitting && image_authorization && !has_existing
}

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut notices = use_notices();
    let nav = use_navigator();

    let mut draft = use_signal(RegistrationDraft::default);
    let mut submitting = use_signal(|| false);
    let mut checking_email = use_signal(|| false);
    let mut duplicate = use_signal(DuplicateState::default);

    // Sole trigger for the duplicate lookup: blur of the email field.
    let check_email = move |_: FocusEvent| {
        let email = draft().email;
        if !is_checkable_email(&email) {
            return;
        }
        let Some(client) = api().client() else {
            tracing::error!("email lookup skipped: registration API not configured");
            return;
        };
        spawn(async move {
            checking_email.set(true);
            match client.find_by_email(&email).await {
                Ok(Some(record)) => {
                    duplicate.write().found(record);
                    push_notice(
                        &mut notices,
                        NoticeLevel::Warning,
                        "This email is already registered",
                    );
                }
                Ok(None) => duplicate.write().not_found(),
                Err(err) => {
                    // Outcome unknown: keep whatever duplicate state we had.
                    tracing::warn!("email lookup failed: {}", err.user_message());
                }
            }
            checking_email.set(false);
        });
    };

    let on_email_input = move |evt: FormEvent| {
        draft.write().email = evt.value();
        if duplicate().has_record() {
            duplicate.write().email_edited();
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if duplicate().has_record() {
            push_notice(
                &mut notices,
                NoticeLevel::Error,
                "This email is already registered. Edit it or start a new registration.",
            );
            return;
        }
        let Some(client) = api().client() else {
            push_notice(
                &mut notices,
                NoticeLevel::Error,
                "The registration service is not configured. Please try again later.",
            );
            return;
        };
        let payload = draft();
        spawn(async move {
            submitting.set(true);
            match client.create_registration(&payload).await {
                Ok(response) => {
                    let message = response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                    nav.push(Route::Confirmation {
                        status: "success".to_string(),
                        message,
                    });
                }
                Err(err) => {
                    // Stay on the form so the user can retry by hand.
                    push_notice(
                        &mut notices,
                        NoticeLevel::Error,
                        &format!("Registration failed: {}", err.user_message()),
                    );
                }
            }
            submitting.set(false);
        });
    };

    let load_for_editing = move |_| {
        let record = duplicate().record;
        if let Some(record) = record {
            draft.set(RegistrationDraft::from_record(&record));
            duplicate.write().dismiss_view();
            push_notice(&mut notices, NoticeLevel::Info, "Data loaded for editing");
        }
    };

    let reset_to_blank = move |_| {
        draft.set(RegistrationDraft::default());
        duplicate.set(DuplicateState::default());
    };

    let state = duplicate();
    let submit_enabled = can_submit(submitting(), draft().image_authorization, state.has_record());

    rsx! {
        div {
            class: "register-page",
            div {
                class: "register-card",
                div {
                    class: "register-card__header",
                    h2 { "Registration" }
                    p { "Fill in your details to register" }
                }

                if state.visible {
                    if let Some(record) = state.record {
                        DuplicateFound {
                            record,
                            on_edit: load_for_editing,
                            on_reset: reset_to_blank,
                        }
                    }
                } else {
                    form {
                        class: "register-form",
                        onsubmit: handle_submit,

                        div {
                            Label { html_for: "name", "Full name" }
                            Input {
                                id: "name",
                                placeholder: "Enter your full name",
                                value: draft().name,
                                required: true,
                                oninput: move |evt: FormEvent| draft.write().name = evt.value(),
                            }
                        }

                        div {
                            Label { html_for: "date-birth", "Date of birth" }
                            Input {
                                id: "date-birth",
                                r#type: "date",
                                value: draft().date_birth,
                                oninput: move |evt: FormEvent| draft.write().date_birth = evt.value(),
                            }
                        }

                        div {
                            Label { html_for: "gender", "Gender" }
                            select {
                                id: "gender",
                                class: "form-input",
                                required: true,
                                value: draft().gender.map(Gender::as_str).unwrap_or(""),
                                onchange: move |evt| draft.write().gender = Gender::parse(&evt.value()),
                                option { value: "", "Select a gender" }
                                option { value: "masculino", "Masculino" }
                                option { value: "feminino", "Feminino" }
                            }
                        }

                        div {
                            Label { html_for: "phone", "Phone" }
                            Input {
                                id: "phone",
                                placeholder: "(11) 99999-9999",
                                value: draft().phone,
                                required: true,
                                oninput: move |evt: FormEvent| draft.write().phone = evt.value(),
                            }
                        }

                        div {
                            Label { html_for: "email", "Email" }
                            div {
                                class: "register-form__email",
                                Input {
                                    id: "email",
                                    class: if state.has_record() { "form-input--error" } else { "" },
                                    r#type: "email",
                                    placeholder: "you@email.com",
                                    value: draft().email,
                                    required: true,
                                    oninput: on_email_input,
                                    onblur: check_email,
                                }
                                if checking_email() {
                                    Spinner { size: 18 }
                                }
                            }
                            if state.has_record() {
                                p {
                                    class: "register-form__warning",
                                    "This email is already registered."
                                }
                            }
                        }

                        div {
                            class: "register-form__row",
                            div {
                                Label { html_for: "state", "State" }
                                Input {
                                    id: "state",
                                    placeholder: "State",
                                    value: draft().state,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().state = evt.value(),
                                }
                            }
                            div {
                                Label { html_for: "city", "City" }
                                Input {
                                    id: "city",
                                    placeholder: "City",
                                    value: draft().city,
                                    required: true,
                                    oninput: move |evt: FormEvent| draft.write().city = evt.value(),
                                }
                            }
                        }

                        div {
                            Label { html_for: "church-name", "Church" }
                            Input {
                                id: "church-name",
                                placeholder: "Name of your church",
                                value: draft().church_name,
                                required: true,
                                oninput: move |evt: FormEvent| draft.write().church_name = evt.value(),
                            }
                        }

                        div {
                            Label { html_for: "work", "Ministry" }
                            Input {
                                id: "work",
                                placeholder: "What is your role at church?",
                                value: draft().work,
                                required: true,
                                oninput: move |evt: FormEvent| draft.write().work = evt.value(),
                            }
                        }

                        label {
                            class: "register-form__checkbox",
                            input {
                                r#type: "checkbox",
                                checked: draft().hosting,
                                oninput: move |evt: FormEvent| draft.write().hosting = evt.checked(),
                            }
                            span {
                                "Do you need hosting? (Only for attendees from outside "
                                "Imperatriz. Meals not included.)"
                            }
                        }

                        label {
                            class: "register-form__checkbox",
                            input {
                                r#type: "checkbox",
                                checked: draft().image_authorization,
                                oninput: move |evt: FormEvent| {
                                    draft.write().image_authorization = evt.checked()
                                },
                            }
                            span {
                                strong { class: "register-form__required", "* Required: " }
                                "I authorize, free of charge and for an indefinite period, the "
                                "use of my image and voice captured during the conference in "
                                "photos, videos and other recordings, for the church's "
                                "institutional communication on social media, websites, printed "
                                "material and other channels. I understand my image will not be "
                                "used commercially or in ways that harm my honor or reputation."
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            class: "register-form__submit",
                            disabled: !submit_enabled,
                            if submitting() {
                                Spinner { size: 18 }
                                "Sending..."
                            } else {
                                "Register"
                            }
                        }

                        if !draft().image_authorization {
                            p {
                                class: "register-form__warning register-form__warning--center",
                                "Image-use authorization is required to complete the registration"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Read-only card shown when the typed email already has a registration.
#[component]
fn DuplicateFound(
    record: Registration,
    on_edit: EventHandler<MouseEvent>,
    on_reset: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        div {
            class: "duplicate-card",
            p {
                class: "duplicate-card__intro",
                "We found a registration for this email:"
            }

            dl {
                class: "duplicate-card__fields",
                dt { "Name" }
                dd { "{record.name}" }
                dt { "Email" }
                dd { "{record.email}" }
                dt { "Phone" }
                dd { "{record.phone}" }
                dt { "Gender" }
                dd { "{record.gender.label()}" }
                dt { "City" }
                dd { "{record.city}, {record.state}" }
                dt { "Church" }
                dd { "{record.church_name}" }
                dt { "Ministry" }
                dd { "{record.work}" }
                dt { "Hosting" }
                dd { if record.hosting { "Yes" } else { "No" } }
                if let Some(created) = record.created_at_display() {
                    dt { "Registered on" }
                    dd { "{created}" }
                }
            }

            div {
                class: "duplicate-card__actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |evt| on_edit.call(evt),
                    "Edit this data"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |evt| on_reset.call(evt),
                    "Start a new registration"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Gender;

    fn sample_record() -> Registration {
        Registration {
            id: None,
            name: "Ana".to_string(),
            date_birth: None,
            gender: Gender::Feminino,
            phone: "(99) 98147-5680".to_string(),
            email: "ana@example.com".to_string(),
            state: "MA".to_string(),
            city: "Imperatriz".to_string(),
            church_name: "First Church".to_string(),
            work: "Volunteer".to_string(),
            hosting: false,
            image_authorization: true,
            created_at: None,
        }
    }

    #[test]
    fn submit_requires_idle_consent_and_no_duplicate() {
        assert!(can_submit(false, true, false));
        assert!(!can_submit(true, true, false), "blocked while submitting");
        assert!(!can_submit(false, false, false), "blocked without consent");
        assert!(!can_submit(false, true, true), "blocked while a duplicate exists");
    }

    #[test]
    fn editing_email_clears_record_and_view() {
        let mut state = DuplicateState::default();
        state.found(sample_record());
        assert!(state.has_record());
        assert!(state.visible);

        state.email_edited();
        assert!(!state.has_record());
        assert!(!state.visible);
    }

    #[test]
    fn loading_for_editing_keeps_the_duplicate_block() {
        let mut state = DuplicateState::default();
        state.found(sample_record());

        state.dismiss_view();
        assert!(!state.visible, "form is shown again");
        assert!(state.has_record(), "submission stays blocked");
        assert!(!can_submit(false, true, state.has_record()));
    }

    #[test]
    fn not_found_clears_everything() {
        let mut state = DuplicateState::default();
        state.found(sample_record());
        state.not_found();
        assert_eq!(state, DuplicateState::default());
    }
}
