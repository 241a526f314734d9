/// A visible section of the client: credentials entry before login, banking
/// operations after. Mirrors the two panels of the page this client
/// replaces; it only affects the prompt and the help listing, never whether
/// a command is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    LoginRegister,
    Banking,
}

/// Login state for the lifetime of the process.
///
/// Owns the bearer token and the active panel. The token is set exactly
/// once per successful login and never persisted anywhere.
#[derive(Debug, Clone)]
pub struct Session {
    token: Option<String>,
    panel: Panel,
}

impl Session {
    pub fn new() -> Self {
        Session {
            token: None,
            panel: Panel::LoginRegister,
        }
    }

    /// Store the token from a successful login and switch to the banking
    /// panel.
    pub fn authenticate(&mut self, token: String) {
        self.token = Some(token);
        self.panel = Panel::Banking;
    }

    /// The bearer token to send with authenticated calls.
    ///
    /// Empty before login: requests still go out, carrying an empty token,
    /// and the server rejects them. There is no client-side pre-flight
    /// check.
    pub fn bearer_token(&self) -> &str {
        self.token.as_deref().unwrap_or("")
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer_token(), "");
        assert_eq!(session.panel(), Panel::LoginRegister);
    }

    #[test]
    fn test_authenticate_switches_panel_and_keeps_token() {
        let mut session = Session::new();
        session.authenticate("tok.en.123".to_string());
        assert!(session.is_authenticated());
        assert_eq!(session.bearer_token(), "tok.en.123");
        assert_eq!(session.panel(), Panel::Banking);
    }
}
