use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    /// Icon-only, no border
    Ghost,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    /// Accessible name for icon-only buttons
    label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Secondary => "c-button--secondary",
        ButtonVariant::Ghost => "c-button--ghost",
    };

    rsx! {
        button {
            r#type: "button",
            class: "c-button {variant_class}",
            "aria-label": label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
