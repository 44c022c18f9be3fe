use std::sync::Arc;

use axum::{extract::State, response::Redirect, routing::get, Router};
use axum_extra::extract::cookie::CookieJar;

use crate::views::{self, Notice};

use super::{auth::AuthService, utils::{self, PageContext, PageResponse}};

// fetched once per page load, never cached
async fn list_transactions(
    State(service): State<Arc<AuthService>>,
    jar: CookieJar,
) -> Result<PageResponse, Redirect> {
    let token = utils::session_token(&jar)?;
    let ctx = PageContext::new("/dashboard/transactions", jar);

    let (transactions, ctx) = match service.api.transactions(&token).await {
        Ok(transactions) if transactions.is_empty() => {
            tracing::warn!("Transaction list is empty");
            (transactions, ctx.with_notice(Notice::error("No transaction data found")))
        }
        Ok(transactions) => (transactions, ctx),
        Err(err) => {
            tracing::error!("Error fetching transactions: {}", err);
            (Vec::new(), ctx)
        }
    };

    Ok(ctx.render(&views::transactions::render(&transactions)))
}

pub fn tx_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/dashboard/transactions", get(list_transactions))
        .with_state(service)
}
