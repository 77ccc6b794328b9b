use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::{MarkerTarget, ThemeBinding, ToggleControl};
use crate::error::ThemeError;

/// Id of the checkbox the binding subscribes to.
pub const TOGGLE_ID: &str = "theme-toggle";

struct DomToggle {
    input: HtmlInputElement,
}

impl ToggleControl for DomToggle {
    fn is_checked(&self) -> bool {
        self.input.checked()
    }
}

struct DomRoot {
    element: HtmlElement,
}

impl MarkerTarget for DomRoot {
    fn add_marker(&self, marker: &str) {
        let _ = self.element.class_list().add_1(marker);
    }

    fn remove_marker(&self, marker: &str) {
        let _ = self.element.class_list().remove_1(marker);
    }
}

/// Wires the theme binding to the live document.
///
/// Looks up the `#theme-toggle` checkbox and `<body>`, then subscribes a
/// `change` listener that forwards to [`ThemeBinding::on_control_change`].
/// Fails with [`ThemeError::MissingElement`] if either element cannot be
/// found, in which case no listener is installed and the control stays
/// inert. The listener is leaked on purpose; the binding lives for the
/// rest of the page.
pub fn attach() -> Result<(), ThemeError> {
    let document: Document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ThemeError::MissingElement("document".to_string()))?;

    let input = document
        .get_element_by_id(TOGGLE_ID)
        .ok_or_else(|| ThemeError::MissingElement(format!("#{}", TOGGLE_ID)))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| ThemeError::MissingElement(format!("#{} (not an input)", TOGGLE_ID)))?;

    let body = document
        .body()
        .ok_or_else(|| ThemeError::MissingElement("body".to_string()))?;

    let binding = ThemeBinding::new(DomToggle { input: input.clone() }, DomRoot { element: body });
    let handler = Closure::<dyn FnMut()>::new(move || binding.on_control_change());
    let _ = input.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
    handler.forget();

    Ok(())
}
