//! In-memory stand-in for the PayPoint API used by router tests.

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::api::{ApiError, CreateMemberResponse, LoginData, LoginResponse, PayPointApi};
use crate::models::{DashboardStats, Member, MemberForm, Transaction, TransactionStatus};

pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "session-token";

/// `None` for a listing makes the matching call fail with a rejection.
#[derive(Default)]
pub struct FakeApi {
    pub login_status: Option<u16>,
    pub stats: Option<DashboardStats>,
    pub transactions: Option<Vec<Transaction>>,
    pub members: Option<Vec<Member>>,
    pub create_response: Option<CreateMemberResponse>,
    pub created: Mutex<Vec<MemberForm>>,
}

impl FakeApi {
    pub fn healthy() -> Self {
        let mut members = Vec::new();
        for (id, name, active) in [("1", "Ada Obi", true), ("2", "Bayo Ade", false)] {
            let form = MemberForm {
                customer_name: name.to_string(),
                customer_phone_number: "08030000000".to_string(),
                meter_number: format!("010{}", id),
                address: "1 Palm Close".to_string(),
                meter_type: "Prepaid".to_string(),
            };
            let mut member = Member::from_form(&form, id.to_string());
            member.is_active = active;
            members.push(member);
        }

        Self {
            login_status: Some(200),
            stats: Some(DashboardStats {
                total_amount: Some("150000".to_string()),
                no_of_transaction: Some("12".to_string()),
                total_commission_paid: Some("1200".to_string()),
                total_amount_paid: Some("148800".to_string()),
                total_commission: Some("1500".to_string()),
            }),
            transactions: Some(vec![
                transaction("op-1", TransactionStatus::Completed, 50000),
                transaction("op-2", TransactionStatus::Completed, 2500),
                transaction("op-3", TransactionStatus::Pending, 1000),
            ]),
            members: Some(members),
            create_response: Some(CreateMemberResponse {
                success: Some(true),
                message: Some("Success".to_string()),
                ..Default::default()
            }),
            created: Mutex::new(Vec::new()),
        }
    }
}

pub fn transaction(id: &str, status: TransactionStatus, amount: i64) -> Transaction {
    Transaction {
        id: id.to_string(),
        full_name: "Ada Obi".to_string(),
        phone_number: "08030000000".to_string(),
        meter_number: "0101".to_string(),
        amount: Decimal::from(amount),
        token: "1234-5678".to_string(),
        status,
        date: "2024-01-15T09:30:00Z".to_string(),
    }
}

fn listing<T: Clone>(value: &Option<T>, token: &str, fallback: &str) -> Result<T, ApiError> {
    if token != TOKEN {
        return Err(ApiError::Rejected("Unauthorized".to_string()));
    }
    value
        .clone()
        .ok_or_else(|| ApiError::Rejected(fallback.to_string()))
}

#[async_trait]
impl PayPointApi for FakeApi {
    async fn login(&self, identity: &str, password: &str) -> Result<LoginResponse, ApiError> {
        if identity == "admin" && password == PASSWORD {
            Ok(LoginResponse {
                status_code: self.login_status,
                message: Some("Success".to_string()),
                data: LoginData {
                    token: TOKEN.to_string(),
                },
            })
        } else {
            Err(ApiError::Rejected("Invalid credentials".to_string()))
        }
    }

    async fn dashboard_stats(&self, token: &str) -> Result<DashboardStats, ApiError> {
        listing(&self.stats, token, "Failed to fetch dashboard data")
    }

    async fn transactions(&self, token: &str) -> Result<Vec<Transaction>, ApiError> {
        listing(&self.transactions, token, "Failed to fetch")
    }

    async fn members(&self, token: &str) -> Result<Vec<Member>, ApiError> {
        listing(&self.members, token, "Failed to fetch members")
    }

    async fn create_member(
        &self,
        token: &str,
        form: &MemberForm,
    ) -> Result<CreateMemberResponse, ApiError> {
        self.created.lock().unwrap().push(form.clone());
        listing(&self.create_response, token, "unused")
            .map_err(|_| ApiError::Decode("expected value at line 1 column 1".to_string()))
    }
}
