use services::{AuthMode, AuthServiceError, Credentials};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Failed,
}

/// State of the sign-in / sign-up form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    mode: AuthMode,
    email: String,
    password: String,
    pending: bool,
    error: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            email: String::new(),
            password: String::new(),
            pending: false,
            error: None,
        }
    }
}

impl LoginForm {
    #[must_use]
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    #[must_use]
    pub fn pending(&self) -> bool {
        self.pending
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        match (self.pending, self.mode) {
            (true, _) => "Processing...",
            (false, AuthMode::Login) => "Sign In",
            (false, AuthMode::Signup) => "Sign Up",
        }
    }

    /// Prompt and button text for switching modes.
    #[must_use]
    pub fn toggle_labels(&self) -> (&'static str, &'static str) {
        match self.mode {
            AuthMode::Login => ("Don't have an account?", "Sign up"),
            AuthMode::Signup => ("Already have an account?", "Sign in"),
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.error = None;
    }

    /// Start a submission. Returns `None` while one is already in flight or
    /// when a field is blank; the latter sets the inline error instead.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.pending {
            return None;
        }
        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        if !credentials.is_complete() {
            self.error = Some(AuthServiceError::MissingCredentials.user_message());
            return None;
        }
        self.pending = true;
        self.error = None;
        Some(credentials)
    }

    pub fn finish<T>(&mut self, result: Result<T, AuthServiceError>) -> LoginOutcome {
        self.pending = false;
        match result {
            Ok(_) => {
                self.error = None;
                LoginOutcome::Authenticated
            }
            Err(err) => {
                self.error = Some(err.user_message());
                LoginOutcome::Failed
            }
        }
    }
}
