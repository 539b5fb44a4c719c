//! Browser Dialogs
//!
//! Blocking `alert`/`prompt` wrappers over `web_sys::Window`.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum DialogError {
    #[error("no browser window available")]
    NoWindow,
    #[error("dialog failed: {0}")]
    Js(String),
}

fn browser_window() -> Result<web_sys::Window, DialogError> {
    web_sys::window().ok_or(DialogError::NoWindow)
}

fn js_error(err: JsValue) -> DialogError {
    DialogError::Js(format!("{:?}", err))
}

pub fn alert(message: &str) -> Result<(), DialogError> {
    browser_window()?.alert_with_message(message).map_err(js_error)
}

/// `None` when the user cancelled
pub fn prompt(message: &str, default: &str) -> Result<Option<String>, DialogError> {
    browser_window()?
        .prompt_with_message_and_default(message, default)
        .map_err(js_error)
}
