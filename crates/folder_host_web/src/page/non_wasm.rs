use folder_host::FileOpenRequest;
use web_sys::HtmlElement;

use crate::PageError;

pub fn element_text(_id: &str) -> Result<Option<String>, PageError> {
    Err(PageError::Unavailable)
}

pub fn html_element_by_id(_id: &str) -> Result<Option<HtmlElement>, PageError> {
    Err(PageError::Unavailable)
}

pub fn query_html_element(_selector: &str) -> Result<HtmlElement, PageError> {
    Err(PageError::Unavailable)
}

pub fn dispatch_open_file_event(
    _event_name: &str,
    _request: &FileOpenRequest,
) -> Result<(), String> {
    Err(PageError::Unavailable.to_string())
}
