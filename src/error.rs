//! Error types for the rune column
//!
//! Transliteration, layout and dragging never fail. Everything in here comes
//! from the browser boundary (missing elements, canvas exceptions) or from
//! configuration supplied by the host page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while mounting, configuring or drawing the column
#[derive(Debug, Error)]
pub enum RuneError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error("2d canvas context unavailable")]
    ContextUnavailable,

    /// A canvas call threw a JavaScript exception
    #[error("surface error: {0}")]
    Surface(String),

    /// Any other DOM call threw (listener registration and the like)
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration JSON: {0}")]
    Config(#[from] serde_json::Error),
}

impl RuneError {
    /// Wrap a JavaScript exception thrown by a canvas call
    pub fn surface(err: JsValue) -> Self {
        RuneError::Surface(format!("{:?}", err))
    }

    /// Wrap a JavaScript exception thrown by a non-canvas DOM call
    pub fn dom(err: JsValue) -> Self {
        RuneError::Dom(format!("{:?}", err))
    }
}

impl From<RuneError> for JsValue {
    fn from(err: RuneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = RuneError> = std::result::Result<T, E>;
