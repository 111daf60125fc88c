//! Remote-call pipeline: image recognition (Clarifai) followed by recipe
//! lookup (TheMealDB), composed into a single `Food` result. The two calls
//! run sequentially; either failure collapses into one retryable error.

pub mod clarifai;
pub mod mealdb;

use crate::model::Food;
use crate::nutrition;
use crate::util::clog;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiError {
    Recognition,
    Recipe,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Both variants read the same to the user; retake/re-upload is the
        // only recovery either way.
        match self {
            ApiError::Recognition => write!(f, "Failed to recognize food. Please try again."),
            ApiError::Recipe => write!(f, "Failed to recognize food. Please try again."),
        }
    }
}

/// Base64 payload of a data URL ("data:image/jpeg;base64,<payload>").
pub fn data_url_payload(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Runs a prepared fetch request and returns the body as text. Non-2xx is
/// an error; there is no retry and no timeout beyond the transport's own.
pub(crate) async fn fetch_text(request: &Request) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(request)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", resp.status())));
    }
    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("non-text response body"))
}

/// The full recognition pipeline for one captured image: classify the dish,
/// fetch its recipe if the directory has one, attach the macro estimate.
/// A missing recipe is not an error; a failed recipe call is.
pub async fn recognize_meal(image_data_url: &str) -> Result<Food, ApiError> {
    let label = clarifai::recognize_food(image_data_url)
        .await
        .map_err(|e| {
            clog(&format!("recognition failed: {:?}", e));
            ApiError::Recognition
        })?;

    let recipe = mealdb::lookup_recipe(&label).await.map_err(|e| {
        clog(&format!("recipe lookup failed: {:?}", e));
        ApiError::Recipe
    })?;

    Ok(Food {
        macros: nutrition::estimate_for(&label),
        name: label,
        recipe,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_payload_splits_after_comma() {
        let url = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
        assert_eq!(data_url_payload(url), Some("/9j/4AAQSkZJRg=="));
    }

    #[test]
    fn data_url_payload_rejects_bare_string() {
        assert_eq!(data_url_payload("not a data url"), None);
        assert_eq!(data_url_payload(""), None);
    }
}
