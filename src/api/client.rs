use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method, RequestBuilder, Response,
};
use serde_json::Value;

use crate::models::{ApiMember, DashboardStats, Member, MemberForm, RawTransaction, Transaction};

use super::{ApiError, CreateMemberResponse, LoginResponse, PayPointApi};

const LOGIN: &str = "private-estate/login";
const DASHBOARD_ANALYTICS: &str = "private-estate/dashboard-analytics";
const TRANSACTION_LIST: &str = "private-estate/transaction-list";
const LIST_ESTATE_MEMBER: &str = "private-estate/list-estate-member";
const CREATE_ESTATE_MEMBER: &str = "private-estate/create-estate-member";

/// reqwest client for the PayPoint private-estate endpoints.
pub struct PayPointClient {
    http: Client,
    base_url: String,
}

impl PayPointClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key = HeaderValue::from_str(api_key)
            .map_err(|err| format!("Invalid API key header: {}", err))?;
        headers.insert("x-api-key", key);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|err| format!("Failed to build HTTP client: {}", err))?;

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { http, base_url })
    }

    fn request(&self, method: Method, endpoint: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, endpoint));
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    // A failed call may come back with a non-JSON body; only a successful
    // one is required to decode.
    async fn read_body(response: Response) -> Result<(bool, Value), ApiError> {
        let ok = response.status().is_success();
        let text = response.text().await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok((ok, body)),
            Err(_) if !ok => Ok((ok, Value::Null)),
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    }
}

fn rejection(body: &Value, fallback: &str) -> ApiError {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(fallback);
    ApiError::Rejected(message.to_string())
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait]
impl PayPointApi for PayPointClient {
    async fn login(&self, identity: &str, password: &str) -> Result<LoginResponse, ApiError> {
        tracing::info!("Attempting to log in operator: {}", identity);

        let response = self
            .request(Method::POST, LOGIN, None)
            .json(&serde_json::json!({ "identity": identity, "password": password }))
            .send()
            .await?;
        let (ok, body) = Self::read_body(response).await?;

        if !ok {
            tracing::warn!("Login rejected for operator: {}", identity);
            return Err(rejection(&body, "Login failed"));
        }
        decode(body)
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        let response = self
            .request(Method::GET, DASHBOARD_ANALYTICS, Some(token))
            .send()
            .await?;
        let (ok, body) = Self::read_body(response).await?;

        if !ok {
            return Err(rejection(&body, "Failed to fetch dashboard data"));
        }
        DashboardStats::from_body(body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        let response = self
            .request(Method::GET, TRANSACTION_LIST, Some(token))
            .send()
            .await?;
        let (ok, mut body) = Self::read_body(response).await?;

        if !ok {
            return Err(rejection(&body, "Failed to fetch"));
        }
        let list = body.get_mut("data").map(Value::take).unwrap_or_default();
        let raw: Vec<RawTransaction> = decode(list)?;
        tracing::info!("Fetched {} transactions", raw.len());

        Ok(raw.into_iter().map(Transaction::from).collect())
    }

    async fn members(&self, token: &str) -> Result<Vec<Member>, ApiError> {
        let response = self
            .request(Method::GET, LIST_ESTATE_MEMBER, Some(token))
            .send()
            .await?;
        let (ok, mut body) = Self::read_body(response).await?;

        let list = body
            .get_mut("data")
            .and_then(|data| data.get_mut("data"))
            .filter(|list| !list.is_null())
            .map(Value::take);
        let list = match (ok, list) {
            (true, Some(list)) => list,
            _ => return Err(rejection(&body, "Failed to fetch members")),
        };
        let raw: Vec<ApiMember> = decode(list)?;
        tracing::info!("Fetched {} estate members", raw.len());

        Ok(Member::from_list(raw))
    }

    async fn create_member(
        &self,
        token: &str,
        form: &MemberForm,
    ) -> Result<CreateMemberResponse, ApiError> {
        tracing::info!("Creating estate member with meter: {}", form.meter_number);

        let response = self
            .request(Method::POST, CREATE_ESTATE_MEMBER, Some(token))
            .json(form)
            .send()
            .await?;
        let text = response.text().await?;

        serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))
    }
}
