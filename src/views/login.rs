use super::{document, escape, notice_html, Notice, Theme};

pub fn render(theme: Theme, notice: Option<&Notice>, identity: &str) -> String {
    let body = format!(
        r#"{notice}<div class="login">
<div class="card">
<h2 class="green">MacroPayPoint</h2>
<p>Sign in to your admin dashboard</p>
<form method="post" action="/login">
<label for="identity">Username</label>
<input id="identity" name="identity" type="text" placeholder="User" value="{identity}">
<label for="password">Password</label>
<input id="password" name="password" type="password" placeholder="Enter your password" required>
<button type="submit" style="width:100%">Sign In</button>
</form>
</div>
</div>"#,
        notice = notice_html(notice),
        identity = escape(identity)
    );
    document("MacroTech Estate Portal", theme, &body)
}
