//! Request and response bodies for document endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocumentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDocumentResponse {
    pub document_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDocumentContentRequest {
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentCommandResponse {
    pub document_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_response_serializes_camel_case() {
        let json = serde_json::to_value(CreateDocumentResponse {
            document_id: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json["documentId"], "abc");
    }

    #[test]
    fn update_request_requires_content() {
        assert!(serde_json::from_str::<UpdateDocumentContentRequest>("{}").is_err());
        let req: UpdateDocumentContentRequest =
            serde_json::from_str(r#"{"content":"B"}"#).unwrap();
        assert_eq!(req.content, "B");
    }
}
