use axum::{response::Redirect, routing::get, Form, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::views::{self, reports::ReportForm, Notice};

use super::utils::{self, PageContext, PageResponse};

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportAction {
    View,
    Download,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    action: ReportAction,
    #[serde(flatten)]
    form: ReportForm,
}

async fn reports_page(jar: CookieJar) -> Result<PageResponse, Redirect> {
    utils::session_token(&jar)?;
    let ctx = PageContext::new("/dashboard/reports", jar);
    Ok(ctx.render(&views::reports::render(&ReportForm::default())))
}

// Report generation is simulated; only the acknowledgement is real.
async fn report_action(
    jar: CookieJar,
    Form(req): Form<ReportRequest>,
) -> Result<PageResponse, Redirect> {
    utils::session_token(&jar)?;
    tracing::info!("Simulated report action {:?} for {:?}", req.action, req.form.report_type);

    let notice = match req.action {
        ReportAction::View => Notice::success("Report generated and displayed!"),
        ReportAction::Download => Notice::success("Report download started!"),
    };
    let ctx = PageContext::new("/dashboard/reports", jar).with_notice(notice);
    Ok(ctx.render(&views::reports::render(&req.form)))
}

pub fn report_routes() -> Router {
    Router::new().route("/dashboard/reports", get(reports_page).post(report_action))
}
