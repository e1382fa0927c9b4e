//! Auth Commands
//!
//! Login submission. The server sets the session cookie on success.

use super::{post_form, ApiError};
use crate::config::Endpoint;

/// Post the login form fields. `Err` carries the server's `error` message when present.
pub async fn login(username: &str, password: &str) -> Result<(), ApiError> {
    let fields = login_fields(username, password);
    post_form(Endpoint::Auth, &fields).await?;
    Ok(())
}

fn login_fields<'a>(username: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("username", username), ("password", password)]
}
