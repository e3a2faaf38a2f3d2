//! Browser-side fetch of the temperature dataset.
//!
//! One GET against the fixed upstream URL, decoded and validated by
//! `gth_data::dataset::Dataset`. Every failure mode maps to a `FetchError`
//! variant so the UI can show a "failed to load" state instead of an
//! unhandled rejection.

use std::fmt;

use gth_data::dataset::Dataset;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Why a dataset load failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No `window` object (not running in a browser context)
    NoWindow,
    /// Building the request failed (bad URL)
    BadRequest,
    /// Network-level failure before any response arrived
    Network,
    /// Non-2xx HTTP status
    Status(u16),
    /// The response body could not be read as text
    Body,
    /// The body was not a valid dataset
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NoWindow => write!(f, "no browser window available"),
            FetchError::BadRequest => write!(f, "could not build the dataset request"),
            FetchError::Network => write!(f, "network error while fetching the dataset"),
            FetchError::Status(code) => write!(f, "dataset request returned HTTP {}", code),
            FetchError::Body => write!(f, "could not read the dataset response body"),
            FetchError::Decode(reason) => write!(f, "could not decode the dataset: {}", reason),
        }
    }
}

/// Fetch and decode the dataset from `url`.
pub async fn fetch_dataset(url: &str) -> Result<Dataset, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| FetchError::BadRequest)?;

    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| FetchError::Network)?;
    let response: Response = response_value.dyn_into().map_err(|_| FetchError::Network)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text_promise = response.text().map_err(|_| FetchError::Body)?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| FetchError::Body)?;
    let body = text_value.as_string().ok_or(FetchError::Body)?;
    log::debug!("fetched {} bytes from {}", body.len(), url);

    Dataset::from_json(&body).map_err(|e| FetchError::Decode(e.to_string()))
}
