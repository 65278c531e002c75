//! Request/response payload types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Client-to-server invocation of a named remote operation.
///
/// The operation name is opaque to this client; no request body is carried
/// (parameterized operations are out of scope).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Name of the remote operation.
    pub request_type: String,
    /// Correlation identifier, unique within the session.
    pub request_id: String,
}

/// Outcome flag nested in a [`RequestResponse`] body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    /// True when the server executed the operation successfully.
    pub result: bool,
    /// Server status code.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<u32>,
    /// Human-readable failure detail.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comment: Option<String>,
}

/// Server reply to a previously issued [`Request`].
///
/// `request_status` is mandatory — a reply without it is malformed.
/// `request_id` echoes the request's correlation identifier; minimal servers
/// may omit it, which the dispatcher tolerates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestResponse {
    /// Echo of the invoked operation name.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_type: Option<String>,
    /// Echo of the correlation identifier.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_id: Option<String>,
    /// Operation outcome.
    pub request_status: RequestStatus,
    /// Operation result payload; absent when the server returns none.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub response_data: Option<Map<String, Value>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_wire_field_names() {
        let request = Request {
            request_type: "ToggleCapture".to_string(),
            request_id: "stagelink-0".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"requestType": "ToggleCapture", "requestId": "stagelink-0"})
        );
    }

    #[test]
    fn response_with_data() {
        let response: RequestResponse = serde_json::from_value(json!({
            "requestType": "ToggleCapture",
            "requestId": "stagelink-0",
            "requestStatus": {"result": true, "code": 100},
            "responseData": {"outputActive": true}
        }))
        .unwrap();

        assert!(response.request_status.result);
        assert_eq!(response.request_id.as_deref(), Some("stagelink-0"));
        let data = response.response_data.unwrap();
        assert_eq!(data.get("outputActive"), Some(&json!(true)));
    }

    #[test]
    fn response_without_data() {
        let response: RequestResponse = serde_json::from_value(json!({
            "requestStatus": {"result": false, "code": 204, "comment": "output not running"}
        }))
        .unwrap();

        assert!(!response.request_status.result);
        assert!(response.response_data.is_none());
        assert_eq!(response.request_status.comment.as_deref(), Some("output not running"));
    }

    #[test]
    fn response_requires_status() {
        let result: Result<RequestResponse, _> =
            serde_json::from_value(json!({"responseData": {"x": 1}}));
        assert!(result.is_err());
    }
}
