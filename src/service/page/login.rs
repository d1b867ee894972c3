use scraper::Html;

use crate::macros::select;

/// Extracts the login csrf token (`#edit-csrfToken`). An empty value counts
/// as missing.
pub fn csrf_token(html: &Html) -> Option<String> {
    let token = html
        .select(select!("#edit-csrfToken"))
        .next()?
        .value()
        .attr("value")?;
    if token.is_empty() {
        None
    } else {
        Some(token.to_owned())
    }
}

/// The logout button only renders for authenticated pages.
pub fn has_logout_button(html: &Html) -> bool {
    html.select(select!(".logout-link")).next().is_some()
}

/// The login form only renders for anonymous pages.
pub fn has_login_form(html: &Html) -> bool {
    html.select(select!("#new-login-form")).next().is_some()
}

pub fn is_session_limited(html: &Html) -> bool {
    html.select(select!("#session-limit-page")).next().is_some()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLimitForm {
    pub action: String,
    pub inputs: Vec<(String, String)>,
}

/// Extracts the disconnect-sessions form: its action and every named input
/// except the checkbox naming the current session (the fifth from the end).
pub fn session_limit_form(html: &Html) -> Option<SessionLimitForm> {
    let form = html.select(select!("form#session-limit-page")).next()?;
    let action = form.value().attr("action")?.to_owned();
    let mut inputs: Vec<(String, String)> = form
        .select(select!("input"))
        .filter_map(|input| {
            let name = input.value().attr("name")?;
            let value = input.value().attr("value").unwrap_or("");
            Some((name.to_owned(), value.to_owned()))
        })
        .collect();
    if inputs.len() >= 5 {
        inputs.remove(inputs.len() - 5);
    }
    Some(SessionLimitForm { action, inputs })
}
