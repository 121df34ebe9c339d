use folder_host::FileOpenRequest;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Document, HtmlElement, Window};

use crate::PageError;

fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::Unavailable)
}

fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::Unavailable)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

/// `Ok(None)` when no element has `id`; an existing element without text yields `Some("")`.
pub fn element_text(id: &str) -> Result<Option<String>, PageError> {
    Ok(document()?
        .get_element_by_id(id)
        .map(|element| element.text_content().unwrap_or_default()))
}

pub fn html_element_by_id(id: &str) -> Result<Option<HtmlElement>, PageError> {
    Ok(document()?
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok()))
}

pub fn query_html_element(selector: &str) -> Result<HtmlElement, PageError> {
    let missing = || PageError::MissingContainer {
        selector: selector.to_string(),
    };
    let element = document()?
        .query_selector(selector)
        .map_err(|err| PageError::InvalidSelector {
            selector: selector.to_string(),
            message: js_error_to_string(err),
        })?
        .ok_or_else(missing)?;
    element.dyn_into::<HtmlElement>().map_err(|_| missing())
}

pub fn dispatch_open_file_event(event_name: &str, request: &FileOpenRequest) -> Result<(), String> {
    let window = window().map_err(|err| err.to_string())?;
    let detail = serde_wasm_bindgen::to_value(request).map_err(|err| err.to_string())?;

    let init = CustomEventInit::new();
    init.set_detail(&detail);
    let event =
        CustomEvent::new_with_event_init_dict(event_name, &init).map_err(js_error_to_string)?;
    window
        .dispatch_event(&event)
        .map(|_| ())
        .map_err(js_error_to_string)
}
