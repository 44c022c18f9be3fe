//! Server-side HTML for the portal pages.
//!
//! Every value that comes from the API or from a form goes through
//! [`escape`] before it is written into markup.

use std::fmt::Write;

pub mod dashboard;
pub mod login;
pub mod members;
pub mod reports;
pub mod transactions;

pub const NAVIGATION: [(&str, &str); 4] = [
    ("Dashboard", "/dashboard"),
    ("Members", "/dashboard/members"),
    ("Transactions", "/dashboard/transactions"),
    ("Reports", "/dashboard/reports"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown at the top right of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Badge {
    Default,
    Secondary,
    Destructive,
}

pub fn badge(variant: Badge, label: &str) -> String {
    let class = match variant {
        Badge::Default => "badge",
        Badge::Secondary => "badge secondary",
        Badge::Destructive => "badge destructive",
    };
    format!(r#"<span class="{}">{}</span>"#, class, escape(label))
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn stat_card(title: &str, value: &str, accent: &str) -> String {
    format!(
        r#"<div class="card"><div class="card-title">{}</div><div class="card-value {}">{}</div></div>"#,
        escape(title),
        accent,
        escape(value)
    )
}

fn notice_html(notice: Option<&Notice>) -> String {
    match notice {
        Some(notice) => {
            let class = match notice.kind {
                NoticeKind::Success => "toast success",
                NoticeKind::Error => "toast error",
            };
            format!(r#"<div class="{}" role="status">{}</div>"#, class, escape(&notice.message))
        }
        None => String::new(),
    }
}

pub fn document(title: &str, theme: Theme, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{styles}</style>
</head>
<body class="{theme}">
{body}
</body>
</html>"#,
        title = escape(title),
        styles = STYLES,
        theme = theme.as_str(),
        body = body
    )
}

fn sidebar(path: &str) -> String {
    let mut nav = String::new();
    for (name, href) in NAVIGATION {
        let class = if path == href { "nav-item active" } else { "nav-item" };
        let _ = write!(nav, r#"<a class="{}" href="{}">{}</a>"#, class, href, name);
    }

    format!(
        r#"<aside class="sidebar">
<div class="brand">MacroPayPoint</div>
<nav>{}</nav>
<form method="post" action="/logout" class="logout"><button type="submit" class="ghost danger">Logout</button></form>
</aside>"#,
        nav
    )
}

fn header() -> String {
    r#"<header class="topbar">
<form method="post" action="/theme"><button type="submit" class="ghost" title="Toggle theme">Toggle theme</button></form>
</header>"#
        .to_string()
}

/// Wraps a dashboard page body in the sidebar and header layout.
pub fn dashboard_shell(path: &str, theme: Theme, notice: Option<&Notice>, body: &str) -> String {
    let content = format!(
        r#"{notice}{sidebar}<div class="content">{header}<main>{body}</main></div>"#,
        notice = notice_html(notice),
        sidebar = sidebar(path),
        header = header(),
        body = body
    );
    document("MacroTech Estate Portal", theme, &content)
}

pub fn page_heading(title: &str, subtitle: &str) -> String {
    format!(
        r#"<div class="heading"><h1>{}</h1><p>{}</p></div>"#,
        escape(title),
        escape(subtitle)
    )
}

const STYLES: &str = "\
body{margin:0;font-family:Inter,system-ui,sans-serif;background:#f9fafb;color:#111827}\
body.dark{background:#111827;color:#f9fafb}\
.sidebar{position:fixed;inset:0 auto 0 0;width:16rem;background:#fff;border-right:1px solid #e5e7eb;display:flex;flex-direction:column}\
body.dark .sidebar,body.dark .topbar,body.dark .card{background:#1f2937;border-color:#374151}\
.brand{padding:1rem 1.5rem;font-weight:700;font-size:1.25rem;border-bottom:1px solid #e5e7eb}\
nav{flex:1;padding:1.5rem 1rem}\
.nav-item{display:block;padding:.5rem .75rem;border-radius:.5rem;color:#4b5563;text-decoration:none}\
.nav-item.active{background:#dcfce7;color:#15803d}\
.logout{padding:1rem;border-top:1px solid #e5e7eb}\
.content{margin-left:16rem}\
.topbar{background:#fff;border-bottom:1px solid #e5e7eb;padding:1rem 1.5rem;display:flex;justify-content:flex-end}\
main{padding:1.5rem}\
.heading h1{margin:0;font-size:1.875rem}.heading p{color:#6b7280}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr));gap:1.5rem;margin:1.5rem 0}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:.75rem;padding:1.25rem}\
.card-title{font-size:.875rem;color:#6b7280}.card-value{font-size:1.5rem;font-weight:700}\
.green{color:#16a34a}.red{color:#dc2626}\
table{width:100%;border-collapse:collapse}th,td{text-align:left;padding:.5rem;border-bottom:1px solid #e5e7eb}\
.mono{font-family:monospace}\
.badge{display:inline-block;padding:.1rem .6rem;border-radius:999px;background:#111827;color:#fff;font-size:.75rem}\
body.dark .badge{background:#f9fafb;color:#111827}\
.badge.secondary{background:#e5e7eb;color:#111827}.badge.destructive{background:#dc2626;color:#fff}\
button{cursor:pointer;border:0;border-radius:.375rem;padding:.5rem 1rem;background:#16a34a;color:#fff}\
button.ghost{background:transparent;color:inherit}button.danger{color:#dc2626}\
button.outline{background:transparent;border:1px solid #d1d5db;color:inherit}\
input,select{display:block;width:100%;box-sizing:border-box;padding:.5rem;border:1px solid #d1d5db;border-radius:.375rem;margin:.25rem 0 .75rem}\
.toast{position:fixed;top:1rem;right:1rem;padding:.75rem 1rem;border-radius:.5rem;background:#fff;box-shadow:0 4px 12px rgba(0,0,0,.15);color:#111827}\
.toast.success{border-left:4px solid #16a34a}.toast.error{border-left:4px solid #dc2626}\
.inline-error{color:#dc2626}\
.login{min-height:100vh;display:flex;align-items:center;justify-content:center;background:linear-gradient(135deg,#f0fdf4,#d1fae5)}\
.login .card{width:100%;max-width:28rem;text-align:center}.login form{text-align:left}\
";
