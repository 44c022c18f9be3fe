use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::views::{self, Notice, Theme};

pub const TOKEN_COOKIE: &str = "token";
pub const THEME_COOKIE: &str = "theme";
pub const NOTICE_COOKIE: &str = "notice";

/// Value of cookie `name` from the request, ignoring empty values.
pub fn cookie(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|cookie| cookie.value_trimmed().to_string())
        .filter(|value| !value.is_empty())
}

#[inline]
pub fn session_token(jar: &CookieJar) -> Result<String, Redirect> {
    match cookie(jar, TOKEN_COOKIE) {
        Some(token) => Ok(token),
        None => {
            tracing::info!("No session cookie, redirecting to login");
            Err(Redirect::to("/"))
        }
    }
}

pub fn token_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Cookie to hand to `CookieJar::remove`; the path has to match the one it
/// was set with.
pub fn removal(name: &'static str) -> Cookie<'static> {
    Cookie::build(name).path("/").build()
}

pub fn theme_cookie(theme: Theme) -> Cookie<'static> {
    Cookie::build((THEME_COOKIE, theme.as_str()))
        .path("/")
        .max_age(Duration::days(365))
        .same_site(SameSite::Lax)
        .build()
}

/// Notices that have to survive a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    LoggedIn,
    LoggedOut,
}

impl Flash {
    fn code(&self) -> &'static str {
        match self {
            Flash::LoggedIn => "login",
            Flash::LoggedOut => "logout",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "login" => Some(Flash::LoggedIn),
            "logout" => Some(Flash::LoggedOut),
            _ => None,
        }
    }

    pub fn notice(&self) -> Notice {
        match self {
            Flash::LoggedIn => Notice::success("Login successful!"),
            Flash::LoggedOut => Notice::success("Logged out successfully!"),
        }
    }

    pub fn cookie(&self) -> Cookie<'static> {
        Cookie::build((NOTICE_COOKIE, self.code()))
            .path("/")
            .max_age(Duration::seconds(60))
            .same_site(SameSite::Strict)
            .build()
    }
}

/// Request-derived pieces every rendered page needs.
pub struct PageContext {
    pub path: &'static str,
    pub theme: Theme,
    pub notice: Option<Notice>,
    jar: CookieJar,
    flash_pending: bool,
}

impl PageContext {
    pub fn new(path: &'static str, jar: CookieJar) -> Self {
        let flash = cookie(&jar, NOTICE_COOKIE);
        Self {
            path,
            theme: cookie(&jar, THEME_COOKIE)
                .map(|value| Theme::parse(&value))
                .unwrap_or_default(),
            notice: flash
                .as_deref()
                .and_then(Flash::from_code)
                .map(|flash| flash.notice()),
            flash_pending: flash.is_some(),
            jar,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    fn respond(self, html: String) -> PageResponse {
        let jar = if self.flash_pending {
            self.jar.remove(removal(NOTICE_COOKIE))
        } else {
            self.jar
        };
        PageResponse {
            status: StatusCode::OK,
            jar,
            html,
        }
    }

    /// Renders `body` inside the dashboard layout.
    pub fn render(self, body: &str) -> PageResponse {
        let html = views::dashboard_shell(self.path, self.theme, self.notice.as_ref(), body);
        self.respond(html)
    }

    pub fn render_login(self, identity: &str) -> PageResponse {
        let html = views::login::render(self.theme, self.notice.as_ref(), identity);
        self.respond(html)
    }
}

pub struct PageResponse {
    status: StatusCode,
    jar: CookieJar,
    html: String,
}

impl PageResponse {
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for PageResponse {
    fn into_response(self) -> Response {
        (self.status, self.jar, Html(self.html)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header, HeaderMap, HeaderValue};

    use super::*;

    fn jar(cookie: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        CookieJar::from_headers(&headers)
    }

    fn set_cookies(response: &Response) -> Vec<Cookie<'static>> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|value| Cookie::parse(value.to_str().unwrap().to_string()).unwrap())
            .collect()
    }

    #[test]
    fn finds_cookie_among_others() {
        let jar = jar("theme=dark; token=abc.def.ghi; other=1");
        assert_eq!(cookie(&jar, "token").as_deref(), Some("abc.def.ghi"));
        assert_eq!(cookie(&jar, "theme").as_deref(), Some("dark"));
        assert_eq!(cookie(&jar, "missing"), None);
    }

    #[test]
    fn quoted_token_is_unquoted() {
        assert_eq!(session_token(&jar(r#"token="abc.def""#)).unwrap(), "abc.def");
    }

    #[test]
    fn empty_token_is_no_session() {
        assert!(session_token(&jar("token=")).is_err());
        assert!(session_token(&CookieJar::new()).is_err());
        assert_eq!(session_token(&jar("token=xyz")).unwrap(), "xyz");
    }

    #[test]
    fn token_cookie_attributes() {
        let secure = token_cookie("abc".to_string(), true);
        assert_eq!(secure.value(), "abc");
        assert_eq!(secure.path(), Some("/"));
        assert_eq!(secure.same_site(), Some(SameSite::Strict));
        assert_eq!(secure.secure(), Some(true));
        assert!(!token_cookie("abc".to_string(), false).to_string().contains("Secure"));
    }

    #[test]
    fn flash_is_read_and_cleared() {
        let ctx = PageContext::new("/dashboard", jar("notice=login; theme=dark"));
        assert_eq!(ctx.notice, Some(Notice::success("Login successful!")));
        assert_eq!(ctx.theme, Theme::Dark);

        let response = ctx.render("<p>x</p>").into_response();
        let cookies = set_cookies(&response);
        let cleared = cookies
            .iter()
            .find(|cookie| cookie.name() == NOTICE_COOKIE)
            .unwrap();
        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.max_age(), Some(Duration::ZERO));
        assert_eq!(cleared.path(), Some("/"));
    }

    #[test]
    fn page_without_flash_sets_no_cookies() {
        let response = PageContext::new("/dashboard", jar("token=abc"))
            .render("<p>x</p>")
            .into_response();
        assert!(set_cookies(&response).is_empty());
    }

    #[test]
    fn unknown_flash_code_shows_nothing() {
        let ctx = PageContext::new("/dashboard", jar("notice=bogus"));
        assert_eq!(ctx.notice, None);
    }
}
