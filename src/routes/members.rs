use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::api::CreateMemberResponse;
use crate::models::{Member, MemberForm};
use crate::store::MemberBoards;
use crate::views::{self, Notice};

use super::{
    auth::AuthService,
    utils::{self, PageContext, PageResponse},
};

const MEMBERS_PATH: &str = "/dashboard/members";

/// How the API answered an add-member request.
#[derive(Debug, PartialEq, Eq)]
pub enum CreationOutcome {
    Created,
    Rejected(String),
    Failed,
}

pub fn classify_creation(form: &MemberForm, response: &CreateMemberResponse) -> CreationOutcome {
    if response.success == Some(true) || response.message.as_deref() == Some("Success") {
        return CreationOutcome::Created;
    }
    if response.status_code != Some(400) {
        return CreationOutcome::Failed;
    }

    // first empty field wins, in this order
    let checks = [
        (&form.meter_type, "meterType", "Meter Type cannot be empty"),
        (&form.customer_phone_number, "phoneNumber", "Phone Number cannot be empty"),
        (&form.meter_number, "meterNumber", "Meter Number cannot be empty"),
        (&form.address, "address", "Address cannot be empty"),
    ];
    let message = checks
        .iter()
        .find(|(value, _, _)| value.is_empty())
        .map(|(_, field, fallback)| response.field_error(field).unwrap_or(*fallback).to_string())
        .unwrap_or_else(|| response.message.clone().unwrap_or_default());

    CreationOutcome::Rejected(message)
}

fn render_board(ctx: PageContext, members: &[Member], form: &MemberForm, form_open: bool) -> PageResponse {
    ctx.render(&views::members::render(members, form, form_open))
}

async fn list_members(
    State((service, boards)): State<(Arc<AuthService>, Arc<MemberBoards>)>,
    jar: CookieJar,
) -> Result<PageResponse, Redirect> {
    let token = utils::session_token(&jar)?;
    let ctx = PageContext::new(MEMBERS_PATH, jar);

    match service.api.members(&token).await {
        Ok(members) => {
            tracing::info!("Loaded {} members into view", members.len());
            let page = render_board(ctx, &members, &MemberForm::default(), false);
            boards.replace(&token, members).await;
            Ok(page)
        }
        Err(err) => {
            tracing::error!("Error fetching members: {}", err);
            Ok(ctx.render(&views::members::render_error(&err.to_string())))
        }
    }
}

async fn create_member(
    State((service, boards)): State<(Arc<AuthService>, Arc<MemberBoards>)>,
    jar: CookieJar,
    Form(form): Form<MemberForm>,
) -> Result<PageResponse, Redirect> {
    let token = utils::session_token(&jar)?;
    let ctx = PageContext::new(MEMBERS_PATH, jar);

    let outcome = match service.api.create_member(&token, &form).await {
        Ok(response) => classify_creation(&form, &response),
        Err(err) => {
            tracing::error!("Error creating member: {}", err);
            CreationOutcome::Rejected("An error occurred while creating member.".to_string())
        }
    };

    match outcome {
        CreationOutcome::Created => {
            // the server's copy is not read back
            let member = Member::from_form(&form, Utc::now().timestamp_millis().to_string());
            let members = boards.append(&token, member).await;
            tracing::info!("Member added to view: {}", form.customer_name);

            let notice = Notice::success(format!("User added to {} estate", service.estate_name));
            Ok(render_board(ctx.with_notice(notice), &members, &MemberForm::default(), false)
                .with_status(StatusCode::CREATED))
        }
        CreationOutcome::Rejected(message) => {
            tracing::warn!("Member creation rejected: {}", message);
            let members = boards.snapshot(&token).await.unwrap_or_default();
            Ok(render_board(ctx.with_notice(Notice::error(message)), &members, &form, true))
        }
        CreationOutcome::Failed => {
            tracing::warn!("Member creation failed");
            let members = boards.snapshot(&token).await.unwrap_or_default();
            Ok(render_board(ctx.with_notice(Notice::error("Failed to add member")), &members, &form, true))
        }
    }
}

async fn toggle_member(
    State((_, boards)): State<(Arc<AuthService>, Arc<MemberBoards>)>,
    jar: CookieJar,
    Path(member_id): Path<String>,
) -> Response {
    let token = match utils::session_token(&jar) {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match boards.toggle(&token, &member_id).await {
        Some(members) => {
            let ctx = PageContext::new(MEMBERS_PATH, jar);
            render_board(ctx, &members, &MemberForm::default(), false).into_response()
        }
        None => Redirect::to(MEMBERS_PATH).into_response(),
    }
}

pub fn member_routes(service: Arc<AuthService>, boards: Arc<MemberBoards>) -> Router {
    Router::new()
        .route(MEMBERS_PATH, get(list_members).post(create_member))
        .route("/dashboard/members/:id/toggle", post(toggle_member))
        .with_state((service, boards))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled_form() -> MemberForm {
        MemberForm {
            customer_name: "Ada".to_string(),
            customer_phone_number: "0803".to_string(),
            meter_number: "0101".to_string(),
            address: "1 Palm Close".to_string(),
            meter_type: "Prepaid".to_string(),
        }
    }

    fn response(body: serde_json::Value) -> CreateMemberResponse {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn success_flag_or_message_means_created() {
        let form = filled_form();
        assert_eq!(
            classify_creation(&form, &response(json!({ "success": true }))),
            CreationOutcome::Created
        );
        assert_eq!(
            classify_creation(&form, &response(json!({ "message": "Success", "statusCode": 201 }))),
            CreationOutcome::Created
        );
    }

    #[test]
    fn empty_meter_type_is_reported_first() {
        let form = MemberForm {
            meter_type: String::new(),
            address: String::new(),
            ..filled_form()
        };
        let body = response(json!({
            "statusCode": 400,
            "message": "Validation failed",
            "data": { "meterType": "meterType must not be empty", "address": "address is required" }
        }));
        assert_eq!(
            classify_creation(&form, &body),
            CreationOutcome::Rejected("meterType must not be empty".to_string())
        );
    }

    #[test]
    fn field_fallbacks_apply_without_server_detail() {
        let body = response(json!({ "statusCode": 400, "message": "Validation failed" }));

        let form = MemberForm {
            customer_phone_number: String::new(),
            ..filled_form()
        };
        assert_eq!(
            classify_creation(&form, &body),
            CreationOutcome::Rejected("Phone Number cannot be empty".to_string())
        );

        let form = MemberForm {
            meter_number: String::new(),
            ..filled_form()
        };
        assert_eq!(
            classify_creation(&form, &body),
            CreationOutcome::Rejected("Meter Number cannot be empty".to_string())
        );

        let form = MemberForm {
            address: String::new(),
            ..filled_form()
        };
        assert_eq!(
            classify_creation(&form, &body),
            CreationOutcome::Rejected("Address cannot be empty".to_string())
        );
    }

    #[test]
    fn complete_form_rejection_uses_server_message() {
        let body = response(json!({ "statusCode": 400, "message": "Meter already registered" }));
        assert_eq!(
            classify_creation(&filled_form(), &body),
            CreationOutcome::Rejected("Meter already registered".to_string())
        );
    }

    #[test]
    fn other_statuses_are_failures() {
        let body = response(json!({ "statusCode": 500, "message": "Internal error" }));
        assert_eq!(classify_creation(&filled_form(), &body), CreationOutcome::Failed);
        assert_eq!(
            classify_creation(&filled_form(), &CreateMemberResponse::default()),
            CreationOutcome::Failed
        );
    }
}
