//! Network fetching utilities.
//!
//! Thin wrappers over the browser Fetch API. No timeout is raced against
//! the request; the browser's own network stack decides when to give up.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::core::error::FetchError;

/// Best-effort message out of a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

/// Issue a GET request and resolve with the response, whatever its status.
///
/// Fails with [`FetchError::Network`] when no response arrives at all.
pub async fn fetch_response(url: &str, accept: Option<&str>) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    if let Some(accept) = accept {
        let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
        headers
            .set("Accept", accept)
            .map_err(|_| FetchError::RequestCreationFailed)?;
        opts.set_headers(&headers);
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let result = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::Network(js_error_message(&e)))?;

    result
        .dyn_into::<Response>()
        .map_err(|_| FetchError::ResponseReadFailed)
}

/// Read a response body as text.
pub async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::ResponseReadFailed)
}

/// Fetch text content from a URL, failing on any non-2xx status.
pub async fn fetch_content(url: &str) -> Result<String, FetchError> {
    let resp = fetch_response(url, None).await?;
    if !resp.ok() {
        return Err(FetchError::HttpError(resp.status()));
    }
    read_text(&resp).await
}
