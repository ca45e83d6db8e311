use serde::{Deserialize, Serialize};

/// The response body when an API request fails
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    #[serde(alias = "error")]
    pub message: String,
}

/// Acknowledgement returned by mutation endpoints
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResultDto {
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default)]
    pub inserted_id: Option<String>,
    #[serde(default)]
    pub modified_count: Option<u64>,
    #[serde(default)]
    pub deleted_count: Option<u64>,
}
