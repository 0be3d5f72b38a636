use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub(crate) enum ViewerError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("canvas has no {0} drawing context")]
    ContextUnavailable(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl ViewerError {
    pub(crate) fn code(&self) -> &'static str {
        match self {
            ViewerError::NoWindow => "no-window",
            ViewerError::NoDocument => "no-document",
            ViewerError::ContextUnavailable(_) => "no-context",
            ViewerError::Js(_) => "js",
        }
    }
}

impl From<JsValue> for ViewerError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        ViewerError::Js(message)
    }
}
