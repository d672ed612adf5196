//! Request and response bodies for contract endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractRequest {
    #[serde(default)]
    pub attachment_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContractResponse {
    pub contract_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCommandResponse {
    pub contract_id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_camel_case_ids() {
        let req: CreateContractRequest =
            serde_json::from_str(r#"{"attachmentIds":["d1","d2"]}"#).unwrap();
        assert_eq!(req.attachment_ids, vec!["d1", "d2"]);
    }

    #[test]
    fn create_request_defaults_to_no_attachments() {
        let req: CreateContractRequest = serde_json::from_str("{}").unwrap();
        assert!(req.attachment_ids.is_empty());
    }
}
