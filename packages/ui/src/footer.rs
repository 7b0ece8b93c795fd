use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "site-footer",
            div {
                class: "site-footer__grid",
                div {
                    h3 { "Livres" }
                    p { "Transforming lives through the discovery of identity and mission." }
                }
                div {
                    h4 { "Quick links" }
                    ul {
                        li { a { href: "/#about", "About" } }
                        li { a { href: "/#speakers", "Speakers" } }
                        li { a { href: "/#contact", "Contact" } }
                        li { a { href: "/register", "Register" } }
                    }
                }
                div {
                    h4 { "Contact" }
                    ul {
                        li { "contato@livresconference.com.br" }
                        li { "(99) 98147-5680" }
                        li { "Imperatriz, MA" }
                    }
                }
            }
            div {
                class: "site-footer__bottom",
                p { "© Livres Conference. All rights reserved." }
            }
        }
    }
}
