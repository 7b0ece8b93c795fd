//! This crate contains all shared UI for the workspace: form primitives,
//! the notice (toast) system, the API client provider, and the static
//! marketing sections of the landing page.

mod components;
pub use components::{Button, ButtonVariant, Input, Label, Spinner};

mod notices;
pub use notices::{
    push_notice, use_notices, Notice, NoticeLevel, NoticeProvider, NoticeStack, Notices,
};

mod api_provider;
pub use api_provider::{use_api, ApiContext, ApiProvider};

mod header;
pub use header::SiteHeader;

mod hero;
pub use hero::{Hero, Stats};

mod about;
pub use about::About;

mod speakers;
pub use speakers::Speakers;

mod schedule;
pub use schedule::Schedule;

mod testimonials;
pub use testimonials::Testimonials;

mod contact;
pub use contact::{CallToAction, Contact, Venue};

mod footer;
pub use footer::SiteFooter;
