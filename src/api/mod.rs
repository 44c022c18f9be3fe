use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::models::{DashboardStats, Member, MemberForm, Transaction};

pub mod client;

pub use client::PayPointClient;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to reach the PayPoint API: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("Unexpected response from the PayPoint API: {0}")]
    Decode(String),
}

/// Body returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub data: LoginData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
}

/// Body returned by the create-estate-member endpoint, whatever the status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberResponse {
    pub success: Option<bool>,
    pub status_code: Option<u16>,
    pub message: Option<String>,
    pub data: Option<Value>,
}

impl CreateMemberResponse {
    /// Field-level message from a validation failure, if the API sent one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
pub trait PayPointApi: Send + Sync {
    async fn login(&self, identity: &str, password: &str) -> Result<LoginResponse, ApiError>;

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError>;

    async fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError>;

    async fn members(&self, token: &str) -> Result<Vec<Member>, ApiError>;

    async fn create_member(
        &self,
        token: &str,
        form: &MemberForm,
    ) -> Result<CreateMemberResponse, ApiError>;
}
