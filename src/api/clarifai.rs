//! Clarifai food-item recognition client. One POST with the base64 image,
//! one label out (the top-ranked concept).

use super::{data_url_payload, fetch_text};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::{Request, RequestInit, RequestMode};

const CLARIFAI_PAT: &str = "5a2c5e444b9b40ab9e4f60f950e71bfd";
const CLARIFAI_USER_ID: &str = "clarifai";
const CLARIFAI_APP_ID: &str = "main";
const CLARIFAI_MODEL_ID: &str = "food-item-recognition";

#[derive(Serialize)]
struct ClarifaiRequest {
    user_app_id: UserAppId,
    inputs: Vec<Input>,
}

#[derive(Serialize)]
struct UserAppId {
    user_id: &'static str,
    app_id: &'static str,
}

#[derive(Serialize)]
struct Input {
    data: InputData,
}

#[derive(Serialize)]
struct InputData {
    image: ImagePayload,
}

#[derive(Serialize)]
struct ImagePayload {
    base64: String,
}

#[derive(Deserialize)]
struct ClarifaiResponse {
    outputs: Vec<Output>,
}

#[derive(Deserialize)]
struct Output {
    data: OutputData,
}

#[derive(Deserialize)]
struct OutputData {
    concepts: Vec<Concept>,
}

#[derive(Deserialize)]
#[allow(dead_code)]
struct Concept {
    name: String,
    value: f64,
}

fn top_concept(response: ClarifaiResponse) -> Option<String> {
    response
        .outputs
        .into_iter()
        .next()?
        .data
        .concepts
        .into_iter()
        .next()
        .map(|c| c.name)
}

/// Sends the captured image (as a data URL) to the classifier and returns
/// the best-guess dish label.
pub async fn recognize_food(image_data_url: &str) -> Result<String, JsValue> {
    let base64 = data_url_payload(image_data_url)
        .ok_or_else(|| JsValue::from_str("invalid image data URL"))?;

    let payload = ClarifaiRequest {
        user_app_id: UserAppId {
            user_id: CLARIFAI_USER_ID,
            app_id: CLARIFAI_APP_ID,
        },
        inputs: vec![Input {
            data: InputData {
                image: ImagePayload {
                    base64: base64.to_string(),
                },
            },
        }],
    };
    let body = serde_json::to_string(&payload).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let url = format!(
        "https://api.clarifai.com/v2/models/{}/outputs",
        CLARIFAI_MODEL_ID
    );
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts)?;
    request.headers().set("Accept", "application/json")?;
    request.headers().set("Content-Type", "application/json")?;
    request
        .headers()
        .set("Authorization", &format!("Key {}", CLARIFAI_PAT))?;

    let text = fetch_text(&request).await?;
    let response: ClarifaiResponse =
        serde_json::from_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    top_concept(response).ok_or_else(|| JsValue::from_str("empty concept list"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_expected_shape() {
        let payload = ClarifaiRequest {
            user_app_id: UserAppId {
                user_id: CLARIFAI_USER_ID,
                app_id: CLARIFAI_APP_ID,
            },
            inputs: vec![Input {
                data: InputData {
                    image: ImagePayload {
                        base64: "abc123".to_string(),
                    },
                },
            }],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"user_app_id\""));
        assert!(json.contains("\"user_id\":\"clarifai\""));
        assert!(json.contains("\"app_id\":\"main\""));
        assert!(json.contains("\"base64\":\"abc123\""));
    }

    #[test]
    fn top_concept_takes_first_ranked_entry() {
        let json = r#"{
            "outputs": [{
                "data": {
                    "concepts": [
                        {"name": "pizza", "value": 0.98},
                        {"name": "flatbread", "value": 0.62}
                    ]
                }
            }]
        }"#;
        let response: ClarifaiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(top_concept(response).as_deref(), Some("pizza"));
    }

    #[test]
    fn top_concept_empty_outputs_is_none() {
        let response: ClarifaiResponse = serde_json::from_str(r#"{"outputs": []}"#).unwrap();
        assert_eq!(top_concept(response), None);
    }
}
