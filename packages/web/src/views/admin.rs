//! Administrative table of registered attendees with local filtering.
//!
//! The full list is fetched once on mount (and on demand via the refresh
//! button); search and the gender/hosting selectors are applied locally and
//! recomputed reactively. A failed fetch keeps whatever data is already on
//! screen and is only logged.

use api::{filter_registrations, Gender, Registration};
use dioxus::prelude::*;
use ui::{use_api, Button, ButtonVariant, Input, Spinner};

#[component]
pub fn Admin() -> Element {
    let api = use_api();
    let mut records = use_signal(Vec::<Registration>::new);
    let mut search = use_signal(String::new);
    let mut gender_filter = use_signal(|| Option::<Gender>::None);
    let mut hosting_filter = use_signal(|| Option::<bool>::None);
    let mut loading = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);

    // Fetch on mount and whenever the refresh counter bumps.
    let _loader = use_resource(move || async move {
        reload();
        let Some(client) = api().client() else {
            tracing::error!("listing skipped: registration API not configured");
            return;
        };
        loading.set(true);
        match client.list_registrations().await {
            Ok(list) => records.set(list),
            // Keep the previous data on screen; the admin can retry.
            Err(err) => tracing::error!("failed to load registrations: {}", err.user_message()),
        }
        loading.set(false);
    });

    let filtered = use_memo(move || {
        filter_registrations(&records(), &search(), gender_filter(), hosting_filter())
    });

    let total = records().len();
    let hosting_count = records().iter().filter(|r| r.hosting).count();
    let authorized_count = records().iter().filter(|r| r.image_authorization).count();
    let filtered_count = filtered().len();

    rsx! {
        div {
            class: "admin-page",
            div {
                class: "admin-page__header",
                div {
                    h1 { "Registered attendees" }
                    p { "Everyone who signed up for the conference" }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: loading(),
                    onclick: move |_| reload += 1,
                    if loading() { "Refreshing..." } else { "Refresh" }
                }
            }

            div {
                class: "admin-stats",
                div {
                    class: "admin-stats__card",
                    p { class: "admin-stats__label", "Total attendees" }
                    p { class: "admin-stats__value", "{total}" }
                }
                div {
                    class: "admin-stats__card",
                    p { class: "admin-stats__label", "Need hosting" }
                    p { class: "admin-stats__value admin-stats__value--green", "{hosting_count}" }
                }
                div {
                    class: "admin-stats__card",
                    p { class: "admin-stats__label", "Image authorized" }
                    p { class: "admin-stats__value admin-stats__value--purple", "{authorized_count}" }
                }
                div {
                    class: "admin-stats__card",
                    p { class: "admin-stats__label", "Matching filters" }
                    p { class: "admin-stats__value admin-stats__value--orange", "{filtered_count}" }
                }
            }

            div {
                class: "admin-filters",
                Input {
                    placeholder: "Search by name, email, city or church...",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                select {
                    class: "form-input",
                    onchange: move |evt| gender_filter.set(Gender::parse(&evt.value())),
                    option { value: "all", "All genders" }
                    option { value: "masculino", "Masculino" }
                    option { value: "feminino", "Feminino" }
                }
                select {
                    class: "form-input",
                    onchange: move |evt| {
                        hosting_filter.set(match evt.value().as_str() {
                            "true" => Some(true),
                            "false" => Some(false),
                            _ => None,
                        })
                    },
                    option { value: "all", "Hosting — all" }
                    option { value: "true", "Needs hosting" }
                    option { value: "false", "No hosting" }
                }
            }

            div {
                class: "admin-table",
                if loading() && records().is_empty() {
                    div {
                        class: "admin-table__placeholder",
                        Spinner { size: 32 }
                        p { "Loading attendees..." }
                    }
                } else if filtered().is_empty() {
                    div {
                        class: "admin-table__placeholder",
                        p { class: "admin-table__placeholder-title", "No attendees found" }
                        p { "Try adjusting the search filters" }
                    }
                } else {
                    table {
                        thead {
                            tr {
                                th { "Attendee" }
                                th { "Contact" }
                                th { "Location" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for record in filtered() {
                                AttendeeRow {
                                    key: "{record.email}",
                                    record,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendeeRow(record: Registration) -> Element {
    rsx! {
        tr {
            td {
                div {
                    class: "admin-table__attendee",
                    span { class: "admin-table__avatar", "{record.initials()}" }
                    div {
                        p { class: "admin-table__name", "{record.name}" }
                        if let Some(age) = record.age() {
                            p { class: "admin-table__age", "{age} years old" }
                        }
                    }
                }
            }
            td {
                p { "{record.email}" }
                p { class: "admin-table__muted", "{record.phone}" }
            }
            td {
                p { "{record.city}, {record.state}" }
                p { class: "admin-table__muted", "{record.church_name}" }
            }
            td {
                span {
                    class: if record.hosting { "badge badge--green" } else { "badge" },
                    if record.hosting { "Needs hosting" } else { "No hosting" }
                }
                span {
                    class: if record.image_authorization { "badge badge--purple" } else { "badge badge--red" },
                    if record.image_authorization { "Image OK" } else { "No image use" }
                }
            }
        }
    }
}
