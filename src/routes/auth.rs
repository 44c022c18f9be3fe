use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::api::PayPointApi;
use crate::store::MemberBoards;
use crate::views::{Notice, Theme};

use super::utils::{self, Flash, PageContext};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    identity: String,
    #[serde(default)]
    password: String,
}

pub struct Session {
    pub token: String,
    /// The API confirmed the login with status code 200.
    pub confirmed: bool,
}

// Session service shared by every route
pub struct AuthService {
    pub api: Arc<dyn PayPointApi>,
    pub estate_name: String,
    secure_cookies: bool,
}

impl AuthService {
    pub fn new(api: Arc<dyn PayPointApi>, estate_name: String, secure_cookies: bool) -> Self {
        Self {
            api,
            estate_name,
            secure_cookies,
        }
    }

    pub async fn login(&self, identity: &str, password: &str) -> Result<Session, String> {
        let response = self
            .api
            .login(identity, password)
            .await
            .map_err(|err| err.to_string())?;
        tracing::info!(
            "Operator logged in: {} ({})",
            identity,
            response.message.as_deref().unwrap_or("no message")
        );

        Ok(Session {
            token: response.data.token,
            confirmed: response.status_code == Some(200),
        })
    }

    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        utils::token_cookie(token, self.secure_cookies)
    }
}

// Login screen, or straight to the dashboard when a session already exists
async fn login_page(jar: CookieJar) -> Response {
    if utils::cookie(&jar, utils::TOKEN_COOKIE).is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    PageContext::new("/", jar).render_login("").into_response()
}

async fn login_handler(
    State((service, _)): State<(Arc<AuthService>, Arc<MemberBoards>)>,
    jar: CookieJar,
    Form(req): Form<LoginRequest>,
) -> Response {
    match service.login(&req.identity, &req.password).await {
        Ok(session) => {
            let mut jar = jar.add(service.session_cookie(session.token));
            if session.confirmed {
                jar = jar.add(Flash::LoggedIn.cookie());
            }
            (jar, Redirect::to("/dashboard")).into_response()
        }
        Err(message) => {
            tracing::warn!("Login failed for operator {}: {}", req.identity, message);
            PageContext::new("/", jar)
                .with_notice(Notice::error(message))
                .render_login(&req.identity)
                .with_status(StatusCode::UNAUTHORIZED)
                .into_response()
        }
    }
}

async fn logout_handler(
    State((_, boards)): State<(Arc<AuthService>, Arc<MemberBoards>)>,
    jar: CookieJar,
) -> Response {
    if let Some(token) = utils::cookie(&jar, utils::TOKEN_COOKIE) {
        boards.forget(&token).await;
    }
    tracing::info!("Operator logged out");

    let jar = jar
        .remove(utils::removal(utils::TOKEN_COOKIE))
        .add(Flash::LoggedOut.cookie());
    (jar, Redirect::to("/")).into_response()
}

async fn theme_handler(jar: CookieJar, headers: HeaderMap) -> Response {
    let current = utils::cookie(&jar, utils::THEME_COOKIE)
        .map(|value| Theme::parse(&value))
        .unwrap_or_default();

    // only follow same-site paths back
    let back = headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(referer_path)
        .unwrap_or_else(|| "/dashboard".to_string());

    (jar.add(utils::theme_cookie(current.toggled())), Redirect::to(&back)).into_response()
}

fn referer_path(referer: &str) -> Option<String> {
    let rest = referer
        .strip_prefix("http://")
        .or_else(|| referer.strip_prefix("https://"))?;
    let path = &rest[rest.find('/')?..];
    path.starts_with('/')
        .then(|| path.to_string())
        .filter(|path| !path.starts_with("//"))
}

async fn health() -> &'static str {
    "ok"
}

pub fn auth_routes(service: Arc<AuthService>, boards: Arc<MemberBoards>) -> Router {
    Router::new()
        .route("/", get(login_page))
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/theme", post(theme_handler))
        .route("/health", get(health))
        .with_state((service, boards))
}
