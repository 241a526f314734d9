use crate::api::bank::models::LoginResponse;
use crate::api::bank::BankClient;
use crate::session::Session;

pub struct RegisterResult {
    pub message: String,
}

pub enum LoginOutcome {
    /// Token stored in the session, banking panel active
    LoggedIn,
    /// Server refused the credentials; its message for the user
    Rejected(String),
}

/// Register a new user. The server's `msg` is shown either way: a 409 for a
/// taken username is an answer, not a failure.
pub async fn register(
    client: &BankClient,
    username: &str,
    password: &str,
) -> Result<RegisterResult, String> {
    match client.register(username, password).await {
        Ok(resp) => Ok(RegisterResult { message: resp.msg }),
        Err(e) => match e.server_message() {
            Some(msg) => Ok(RegisterResult {
                message: msg.to_string(),
            }),
            None => Err(e.to_string()),
        },
    }
}

/// Log in and, on success, store the token in the session.
pub async fn login(
    client: &BankClient,
    session: &mut Session,
    username: &str,
    password: &str,
) -> Result<LoginOutcome, String> {
    match client.login(username, password).await {
        Ok(resp) => Ok(apply_login_response(session, resp)),
        Err(e) => match e.server_message() {
            Some(msg) => Ok(LoginOutcome::Rejected(msg.to_string())),
            None => Err(e.to_string()),
        },
    }
}

/// Pure state transition: only a response carrying `access_token` counts as
/// a successful login.
fn apply_login_response(session: &mut Session, response: LoginResponse) -> LoginOutcome {
    match response.access_token {
        Some(token) => {
            session.authenticate(token);
            LoginOutcome::LoggedIn
        }
        None => LoginOutcome::Rejected(
            response
                .msg
                .unwrap_or_else(|| "Login failed".to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Panel;

    #[test]
    fn test_login_with_token_authenticates() {
        let mut session = Session::new();
        let response = LoginResponse {
            access_token: Some("jwt.token".to_string()),
            msg: None,
        };

        let outcome = apply_login_response(&mut session, response);

        assert!(matches!(outcome, LoginOutcome::LoggedIn));
        assert_eq!(session.bearer_token(), "jwt.token");
        assert_eq!(session.panel(), Panel::Banking);
    }

    #[test]
    fn test_login_without_token_is_rejected() {
        let mut session = Session::new();
        let response = LoginResponse {
            access_token: None,
            msg: Some("Bad username or password".to_string()),
        };

        let outcome = apply_login_response(&mut session, response);

        match outcome {
            LoginOutcome::Rejected(msg) => assert_eq!(msg, "Bad username or password"),
            LoginOutcome::LoggedIn => panic!("should not log in without a token"),
        }
        assert!(!session.is_authenticated());
        assert_eq!(session.panel(), Panel::LoginRegister);
    }
}
