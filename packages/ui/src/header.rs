use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/#about", "About"),
    ("/#speakers", "Speakers"),
    ("/#schedule", "Schedule"),
    ("/#testimonials", "Testimonials"),
    ("/#contact", "Contact"),
];

/// Fixed top navigation with a hamburger menu on small screens.
#[component]
pub fn SiteHeader() -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header__inner",
                a { class: "site-header__logo", href: "/", "Livres" }

                nav {
                    class: "site-header__nav",
                    for (href, label) in NAV_LINKS {
                        a { href, "{label}" }
                    }
                    a { class: "site-header__cta", href: "/register", "Register" }
                }

                button {
                    class: if menu_open() { "site-header__burger site-header__burger--open" } else { "site-header__burger" },
                    aria_label: "Menu",
                    onclick: move |_| menu_open.toggle(),
                    span {}
                    span {}
                    span {}
                }
            }

            if menu_open() {
                nav {
                    class: "site-header__mobile",
                    for (href, label) in NAV_LINKS {
                        a {
                            href,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    a {
                        href: "/register",
                        onclick: move |_| menu_open.set(false),
                        "Register"
                    }
                }
            }
        }
    }
}
