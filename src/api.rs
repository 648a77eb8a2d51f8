//! Calls against the `/api` proxy.
//!
//! One attempt per user action; failures come back as [`FetchError`] and the
//! caller decides how to present them.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::{DetectionRequest, DetectionResult, Hut, Lift, Resort, ResortId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiClient {
    config: ApiConfig,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    fn resorts_url(&self) -> String {
        self.config.url("ski-resorts")
    }

    fn resort_url(&self, id: ResortId, leaf: &str) -> String {
        self.config.url(&format!("ski-resorts/{id}/{leaf}"))
    }

    fn detect_url(&self) -> String {
        self.config.url("detect-people")
    }

    pub async fn list_resorts(&self) -> Result<Vec<Resort>, FetchError> {
        get_json(&self.resorts_url()).await
    }

    pub async fn list_lifts(&self, id: ResortId) -> Result<Vec<Lift>, FetchError> {
        get_json(&self.resort_url(id, "lifts")).await
    }

    pub async fn list_huts(&self, id: ResortId) -> Result<Vec<Hut>, FetchError> {
        get_json(&self.resort_url(id, "huts")).await
    }

    pub async fn get_map_image(&self, id: ResortId) -> Result<MapImage, FetchError> {
        let resp = checked(Request::get(&self.resort_url(id, "map")).send().await?).await?;
        let bytes = resp.binary().await?;
        MapImage::from_png(&bytes)
    }

    pub async fn detect_people(&self, image_base64: &str) -> Result<DetectionResult, FetchError> {
        let resp = Request::post(&self.detect_url())
            .json(&DetectionRequest { base64: image_base64 })?
            .send()
            .await?;
        Ok(checked(resp).await?.json().await?)
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = checked(Request::get(url).send().await?).await?;
    Ok(resp.json::<T>().await?)
}

/// Turn a non-2xx response into [`FetchError::Status`], preferring the proxy's
/// `{error}` message over the status text.
async fn checked(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let status_text = resp.status_text();
    let message = match resp.text().await {
        Ok(body) => error_message(&body).unwrap_or(status_text),
        Err(_) => status_text,
    };
    Err(FetchError::Status { status, message })
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error)
}

/// Object URL for a fetched map raster. The URL is revoked on drop, so
/// replacing or unmounting the owner releases the browser memory.
#[derive(Debug, PartialEq, Eq)]
pub struct MapImage {
    url: String,
}

impl MapImage {
    fn from_png(bytes: &[u8]) -> Result<Self, FetchError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let props = web_sys::BlobPropertyBag::new();
        props.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for MapImage {
    fn drop(&mut self) {
        if web_sys::Url::revoke_object_url(&self.url).is_err() {
            log::warn!("could not revoke {}", self.url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let api = ApiClient::new(ApiConfig { base_url: "/api".into() });
        assert_eq!(api.resorts_url(), "/api/ski-resorts");
        assert_eq!(api.resort_url(4, "lifts"), "/api/ski-resorts/4/lifts");
        assert_eq!(api.resort_url(4, "huts"), "/api/ski-resorts/4/huts");
        assert_eq!(api.resort_url(4, "map"), "/api/ski-resorts/4/map");
        assert_eq!(api.detect_url(), "/api/detect-people");
    }

    #[test]
    fn proxy_error_body_is_surfaced() {
        assert_eq!(error_message(r#"{"error":"Failed to fetch lifts"}"#).as_deref(), Some("Failed to fetch lifts"));
        assert_eq!(error_message("<html>bad gateway</html>"), None);
    }
}
