// Standard library
use std::net::Ipv4Addr;

// 3rd party crates
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Current module imports
use super::constants::RECORD_TYPE;
use super::types::CfConfig;

/// Response envelope returned by the DNS record endpoint.
#[derive(Debug, Deserialize)]
pub struct RecordResponse {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<Value>,
    #[serde(default)]
    pub messages: Vec<Value>,
    pub result: RecordResult,
}

/// Details of the record response result.
#[derive(Debug, Deserialize)]
pub struct RecordResult {
    pub content: String,
}

/// Envelope of the update response. Only the `success` boolean is
/// authoritative; the rest of the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
}

/// Record-update payload sent with the PUT request.
#[derive(Debug, Serialize)]
pub struct UpdateForm {
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub id: String,
    pub name: String,
}

impl UpdateForm {
    pub fn new(config: &CfConfig, ip: &Ipv4Addr) -> Self {
        Self {
            record_type: RECORD_TYPE.to_string(),
            content: ip.to_string(),
            id: config.record_id.clone(),
            name: config.domain.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CfConfig {
        CfConfig {
            zone_id: "z1".to_string(),
            record_id: "r1".to_string(),
            domain: "home.example.com".to_string(),
            api_token: Some("t".to_string()),
            api_key: None,
            email: None,
        }
    }

    #[test]
    fn update_form_serializes_to_wire_shape() {
        let form = UpdateForm::new(&config(), &"1.2.3.4".parse().unwrap());
        let body = serde_json::to_value(&form).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "type": "A",
                "content": "1.2.3.4",
                "id": "r1",
                "name": "home.example.com",
            })
        );
    }

    #[test]
    fn record_response_deserializes_envelope() {
        let body = r#"{
            "success": true,
            "errors": [],
            "messages": [],
            "result": { "content": "1.2.3.3" }
        }"#;

        let response: RecordResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert!(response.errors.is_empty());
        assert_eq!(response.result.content, "1.2.3.3");
    }

    #[test]
    fn update_response_only_needs_success() {
        let response: UpdateResponse =
            serde_json::from_str(r#"{"success": false, "errors": ["oops"]}"#).unwrap();
        assert!(!response.success);
    }
}
