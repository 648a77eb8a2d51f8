use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a single call against the `/api` proxy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Browser(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => FetchError::Decode(e.to_string()),
            other => FetchError::Network(other.to_string()),
        }
    }
}

impl From<JsValue> for FetchError {
    fn from(v: JsValue) -> Self {
        FetchError::Browser(v.as_string().unwrap_or_else(|| format!("{v:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_code_and_message() {
        let e = FetchError::Status { status: 500, message: "Failed to fetch resorts".into() };
        assert_eq!(e.to_string(), "server responded 500: Failed to fetch resorts");
    }
}
