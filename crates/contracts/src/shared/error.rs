use serde::{Deserialize, Serialize};

/// Body of every 404 under the API namespaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotFoundResponse {
    pub message: String,
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self {
            message: "Not Found".to_string(),
            status: 404,
            kind: "error".to_string(),
        }
    }
}

/// Underlying cause attached to a failed report query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorCause {
    /// "connection", "query" or "decode"
    pub kind: String,
    pub detail: String,
}

/// Body of a 500 returned when the data store fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchErrorResponse {
    pub message: String,
    pub error: ErrorCause,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_found_shape() {
        let value = serde_json::to_value(NotFoundResponse::default()).unwrap();
        assert_eq!(
            value,
            json!({ "message": "Not Found", "status": 404, "type": "error" })
        );
    }
}
