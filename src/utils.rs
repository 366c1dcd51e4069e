//! Browser access for the address bar and the clipboard.
//!
//! Every failure here is recoverable: callers log it and carry on.

use gloo_utils::window;
use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Url;

fn current_url() -> Result<Url, JsValue> {
    let href = window().location().href()?;
    Url::new(&href)
}

/// Reads a query parameter from the current location.
pub fn read_query_param(name: &str) -> Option<String> {
    match current_url() {
        Ok(url) => url.search_params().get(name),
        Err(e) => {
            warn!("cannot read current location: {:?}", e);
            None
        }
    }
}

/// Replaces a query parameter in place, without adding a history entry.
pub fn replace_query_param(name: &str, value: &str) -> Result<(), JsValue> {
    let url = current_url()?;
    let params = url.search_params();
    if params.get(name).as_deref() == Some(value) {
        return Ok(());
    }
    params.set(name, value);
    debug!("{}={}", name, value);
    window()
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
}

/// Fire-and-forget clipboard write. A rejected write is only logged.
pub fn copy_to_clipboard(text: String) {
    let promise = window().navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => debug!("copied {} bytes to clipboard", text.len()),
            Err(e) => warn!("clipboard write failed: {:?}", e),
        }
    });
}
