//! Small form primitives shared by the register and admin views.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Muted,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn--primary",
            ButtonVariant::Outline => "btn btn--outline",
            ButtonVariant::Muted => "btn btn--muted",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    #[props(default = "".to_string())] class: String,
    #[props(default)] onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] name: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] required: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
    #[props(default)] onblur: EventHandler<FocusEvent>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            name: "{name}",
            class: "form-input {class}",
            r#type: r#type,
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| oninput.call(evt),
            onblur: move |evt| onblur.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "form-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

/// Rotating ring, sized in pixels.
#[component]
pub fn Spinner(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        span {
            class: "spinner",
            style: "width: {size}px; height: {size}px;",
            aria_label: "Loading",
        }
    }
}
