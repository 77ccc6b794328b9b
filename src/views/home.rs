use dioxus::prelude::*;

use crate::utils::ThemeState;

#[component]
pub fn Home() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();

    // The rendered checkbox exists only after the first render, so the
    // DOM-level binding is attached from an effect.
    use_effect(|| {
        #[cfg(target_arch = "wasm32")]
        match crate::binding::dom::attach() {
            Ok(()) => log::info!("theme toggle bound to #{}", crate::binding::dom::TOGGLE_ID),
            Err(err) => log::error!("theme toggle not activated: {}", err),
        }
    });

    let icon = theme.read().label();

    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Theme Switch"
            }
            p {
                class: "text-gray-600",
                "Flip the switch to move the page between light and dark."
            }
            label {
                class: "p-2 rounded-lg bg-gray-200 hover:bg-gray-300 transition-colors",
                input {
                    r#type: "checkbox",
                    id: "theme-toggle",
                    onchange: move |evt| {
                        theme.write().is_dark = evt.checked();
                    },
                }
                " {icon}"
            }
        }
    }
}
