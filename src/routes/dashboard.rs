use std::sync::Arc;

use axum::{extract::State, response::Redirect, routing::get, Router};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{DashboardStats, MemberSummary};
use crate::views;

use super::{auth::AuthService, utils::{self, PageContext, PageResponse}};

async fn overview(
    State(service): State<Arc<AuthService>>,
    jar: CookieJar,
) -> Result<PageResponse, Redirect> {
    let token = utils::session_token(&jar)?;

    // two independent loads; neither failure blocks the page
    let (stats, members) = futures::join!(
        service.api.dashboard_stats(&token),
        service.api.members(&token)
    );

    let stats = stats.unwrap_or_else(|err| {
        tracing::error!("Error fetching dashboard stats: {}", err);
        DashboardStats::default()
    });
    let members = members.unwrap_or_else(|err| {
        tracing::error!("Error fetching members: {}", err);
        Vec::new()
    });

    let body = views::dashboard::render(&stats, &MemberSummary::from(members.as_slice()));
    Ok(PageContext::new("/dashboard", jar).render(&body))
}

pub fn dashboard_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/dashboard", get(overview))
        .with_state(service)
}
