//! Landing page: marketing sections only, no state beyond the nav menu.

use dioxus::prelude::*;
use ui::{
    About, CallToAction, Contact, Hero, Schedule, SiteFooter, SiteHeader, Speakers, Stats,
    Testimonials, Venue,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        SiteHeader {}
        main {
            Hero {}
            Stats {}
            About {}
            Speakers {}
            Schedule {}
            Testimonials {}
            CallToAction {}
            Contact {}
            Venue {}
        }
        SiteFooter {}
    }
}
