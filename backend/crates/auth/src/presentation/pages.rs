//! HTML pages.
//!
//! Server-rendered with `format!`. Anything user-supplied goes through
//! [`html_escape`].

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{ font-family: system-ui, sans-serif; max-width: 32rem; margin: 4rem auto; padding: 0 1rem; }}
        form {{ display: flex; flex-direction: column; gap: 0.75rem; }}
        nav {{ display: flex; gap: 1rem; align-items: center; }}
        nav form {{ display: inline; }}
    </style>
</head>
<body>
{content}
</body>
</html>"##,
        title = html_escape(title),
        content = content,
    )
}

fn credentials_form(action: &str, submit: &str) -> String {
    format!(
        r#"<form method="post" action="{action}">
    <label>Name <input type="text" name="name" autocomplete="username" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">{submit}</button>
</form>"#
    )
}

fn signed_in_nav() -> &'static str {
    r#"<nav>
    <a href="/dashboard">Dashboard</a>
    <a href="/profile">Profile</a>
    <form method="post" action="/logout"><button type="submit">Log out</button></form>
</nav>"#
}

/// GET /login
pub fn login_page() -> String {
    let content = format!(
        "<h1>Log in</h1>\n{}\n<p>No account? <a href=\"/register\">Register</a></p>",
        credentials_form("/login", "Log in")
    );
    layout("Log in", &content)
}

/// GET /register
pub fn register_page() -> String {
    let content = format!(
        "<h1>Register</h1>\n{}\n<p>Already registered? <a href=\"/login\">Log in</a></p>",
        credentials_form("/register", "Register")
    );
    layout("Register", &content)
}

/// GET /dashboard
pub fn dashboard_page(user_name: &str) -> String {
    let content = format!(
        "{}\n<h1>Dashboard</h1>\n<p>Welcome, {}!</p>",
        signed_in_nav(),
        html_escape(user_name)
    );
    layout("Dashboard", &content)
}

/// GET /profile
pub fn profile_page(user_name: &str) -> String {
    let content = format!(
        "{}\n<h1>Profile</h1>\n<dl><dt>User name</dt><dd>{}</dd></dl>",
        signed_in_nav(),
        html_escape(user_name)
    );
    layout("Profile", &content)
}

/// Simple HTML escape function
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
