//! Registration and login forms for both roles.

use super::strength::{Strength, StrengthPolicy};
use super::validate::{self, ValidationError};
use super::{FieldTransform, Submission, TextField};
use crate::api::models::{LoginRequest, RegisterRequest};
use crate::app::route::Route;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    AdminRegister,
    AdminLogin,
    UserRegister,
    UserLogin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    Confirm,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Name => "YOUR NAME",
            AuthField::Email => "YOUR EMAIL",
            AuthField::Password => "PASSWORD",
            AuthField::Confirm => "CONFIRM PASSWORD",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password | AuthField::Confirm)
    }
}

/// A request produced by a valid auth form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Register(RegisterRequest),
    Login(LoginRequest),
}

impl AuthKind {
    pub fn role(self) -> Role {
        match self {
            AuthKind::AdminRegister | AuthKind::AdminLogin => Role::Admin,
            AuthKind::UserRegister | AuthKind::UserLogin => Role::User,
        }
    }

    pub fn is_register(self) -> bool {
        matches!(self, AuthKind::AdminRegister | AuthKind::UserRegister)
    }

    pub fn fields(self) -> &'static [AuthField] {
        if self.is_register() {
            &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::Confirm,
            ]
        } else {
            &[AuthField::Email, AuthField::Password]
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthKind::AdminRegister => "Admin Sign Up",
            AuthKind::AdminLogin => "Sign In to Event Hive",
            AuthKind::UserRegister => "Sign Up to Event Hive",
            AuthKind::UserLogin => "Sign In to Event Hive",
        }
    }

    pub fn submit_label(self) -> &'static str {
        if self.is_register() {
            "Sign Up"
        } else {
            "Sign In"
        }
    }

    pub fn strength_policy(self) -> Option<StrengthPolicy> {
        match self {
            AuthKind::AdminRegister => Some(StrengthPolicy::LengthTiered),
            AuthKind::UserRegister => Some(StrengthPolicy::Scored),
            _ => None,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            AuthKind::AdminRegister => "Registered successfully!",
            AuthKind::AdminLogin => "Login successful! Redirecting...",
            AuthKind::UserRegister => "Registered successfully! Redirecting to login...",
            AuthKind::UserLogin => "Logged in successfully! Redirecting...",
        }
    }

    pub fn fallback_message(self) -> &'static str {
        if self.is_register() {
            crate::api::fallback::REGISTRATION
        } else {
            crate::api::fallback::LOGIN
        }
    }

    /// Where to go, and after how long, once the request succeeds.
    pub fn redirect(self) -> (Route, Duration) {
        match self {
            AuthKind::AdminRegister => (Route::AdminLogin, Duration::ZERO),
            AuthKind::AdminLogin => (Route::AdminCreateEvent, Duration::from_millis(1000)),
            AuthKind::UserRegister => (Route::UserLogin, Duration::from_millis(1500)),
            AuthKind::UserLogin => (Route::BrowseEvents, Duration::from_millis(800)),
        }
    }

    /// The sign-in/sign-up counterpart screen.
    pub fn switch_route(self) -> Route {
        match self {
            AuthKind::AdminRegister => Route::AdminLogin,
            AuthKind::AdminLogin => Route::AdminRegister,
            AuthKind::UserRegister => Route::UserLogin,
            AuthKind::UserLogin => Route::UserRegister,
        }
    }

    fn transform(self, field: AuthField) -> FieldTransform {
        match (self, field) {
            (AuthKind::AdminRegister, AuthField::Email)
            | (AuthKind::AdminLogin, AuthField::Email)
            | (AuthKind::UserRegister, AuthField::Email)
            | (AuthKind::UserLogin, AuthField::Email) => FieldTransform::TrimLowercase,
            (AuthKind::UserRegister, AuthField::Name)
            | (AuthKind::UserRegister, AuthField::Password)
            | (AuthKind::UserRegister, AuthField::Confirm)
            | (AuthKind::UserLogin, AuthField::Password) => FieldTransform::Trim,
            _ => FieldTransform::None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub kind: AuthKind,
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: usize,
    pub show_password: bool,
    pub strength: Option<Strength>,
    pub submission: Submission,
}

impl AuthForm {
    pub fn new(kind: AuthKind) -> Self {
        Self {
            kind,
            name: TextField::new(kind.transform(AuthField::Name)),
            email: TextField::new(kind.transform(AuthField::Email)),
            password: TextField::new(kind.transform(AuthField::Password)),
            confirm: TextField::new(kind.transform(AuthField::Confirm)),
            focus: 0,
            show_password: false,
            strength: None,
            submission: Submission::default(),
        }
    }

    pub fn focused(&self) -> AuthField {
        let fields = self.kind.fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn field(&self, field: AuthField) -> &TextField {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::Confirm => &self.confirm,
        }
    }

    pub fn field_mut(&mut self, field: AuthField) -> &mut TextField {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::Confirm => &mut self.confirm,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.kind.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.kind.fields().len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Apply an edit to the focused field and refresh derived state.
    pub fn edit(&mut self, f: impl FnOnce(&mut TextField)) {
        let field = self.focused();
        f(self.field_mut(field));
        self.after_edit(field);
    }

    fn after_edit(&mut self, field: AuthField) {
        match field {
            AuthField::Password => {
                self.strength = self
                    .kind
                    .strength_policy()
                    .and_then(|p| p.evaluate(self.password.value()));
            }
            AuthField::Name if self.kind == AuthKind::AdminRegister => {
                match validate::admin_name_partial(self.name.value()) {
                    Ok(()) => self.submission.error = None,
                    Err(e) => {
                        self.submission.success = None;
                        self.submission.error = Some(e.to_string());
                    }
                }
            }
            _ => {}
        }
    }

    /// Run the screen's rules in order and build the request.
    pub fn validate(&self) -> Result<AuthRequest, ValidationError> {
        let name = self.name.value();
        let password = self.password.value();
        let confirm = self.confirm.value();
        match self.kind {
            AuthKind::AdminRegister => {
                validate::admin_name(name)?;
                let email = validate::email(self.email.value())?;
                validate::admin_password(password)?;
                validate::passwords_match(password, confirm)?;
                Ok(AuthRequest::Register(RegisterRequest {
                    name: name.to_string(),
                    email,
                    password: password.to_string(),
                }))
            }
            AuthKind::UserRegister => {
                let name = validate::user_name(name)?;
                let email = validate::email(self.email.value())?;
                validate::passwords_match(password, confirm)?;
                let password = password.trim();
                validate::strong_password(password)?;
                Ok(AuthRequest::Register(RegisterRequest {
                    name,
                    email,
                    password: password.to_string(),
                }))
            }
            AuthKind::AdminLogin => {
                let email = validate::email(self.email.value())?;
                let password = password.trim();
                validate::admin_password(password)?;
                Ok(AuthRequest::Login(LoginRequest {
                    email,
                    password: password.to_string(),
                }))
            }
            AuthKind::UserLogin => {
                let email = validate::normalize_email(self.email.value());
                let password = password.trim();
                if email.is_empty() || password.is_empty() {
                    return Err(ValidationError::CredentialsRequired);
                }
                Ok(AuthRequest::Login(LoginRequest {
                    email,
                    password: password.to_string(),
                }))
            }
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm.clear();
        self.strength = None;
        self.focus = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut AuthForm, field: AuthField, value: &str) {
        form.field_mut(field).clear();
        for c in value.chars() {
            form.field_mut(field).insert_char(c);
        }
        form.after_edit(field);
    }

    fn register(kind: AuthKind, name: &str, email: &str, pw: &str, confirm: &str) -> AuthForm {
        let mut form = AuthForm::new(kind);
        fill(&mut form, AuthField::Name, name);
        fill(&mut form, AuthField::Email, email);
        fill(&mut form, AuthField::Password, pw);
        fill(&mut form, AuthField::Confirm, confirm);
        form
    }

    #[test]
    fn test_admin_register_accepts_six_chars() {
        let form = register(AuthKind::AdminRegister, "Ada Lovelace", " ADA@Example.com", "abc123", "abc123");
        assert_eq!(form.email.value(), "ada@example.com");
        match form.validate().unwrap() {
            AuthRequest::Register(req) => {
                assert_eq!(req.name, "Ada Lovelace");
                assert_eq!(req.email, "ada@example.com");
                assert_eq!(req.password, "abc123");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_admin_register_rejects_five_chars() {
        let form = register(AuthKind::AdminRegister, "Ada", "ada@example.com", "abc12", "abc12");
        assert!(matches!(
            form.validate(),
            Err(ValidationError::PasswordTooShort)
        ));
    }

    #[test]
    fn test_admin_register_rule_order() {
        // Name is checked before everything else.
        let form = register(AuthKind::AdminRegister, "Ada1", "bad", "x", "y");
        assert!(matches!(form.validate(), Err(ValidationError::AdminName)));
        let form = register(AuthKind::AdminRegister, "Ada", "ada@example.com", "abc123", "abc124");
        assert!(matches!(
            form.validate(),
            Err(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_admin_name_checked_on_keystroke() {
        let mut form = AuthForm::new(AuthKind::AdminRegister);
        fill(&mut form, AuthField::Name, "Ada9");
        assert_eq!(
            form.submission.error.as_deref(),
            Some("Name should contain only alphabetic characters and spaces.")
        );
        fill(&mut form, AuthField::Name, "Ada");
        assert!(form.submission.error.is_none());
    }

    #[test]
    fn test_user_register_composite_rule() {
        let form = register(AuthKind::UserRegister, "Ada", "ada@example.com", "Abcdef1!", "Abcdef1!");
        assert!(form.validate().is_ok());
        assert_eq!(form.strength, Some(Strength::Strong));

        let form = register(AuthKind::UserRegister, "Ada", "ada@example.com", "abcdefgh", "abcdefgh");
        assert!(matches!(form.validate(), Err(ValidationError::WeakPassword)));
        assert_eq!(form.strength, Some(Strength::Weak));
    }

    #[test]
    fn test_user_register_confirm_checked_before_strength() {
        let form = register(AuthKind::UserRegister, "Ada", "ada@example.com", "abc", "abd");
        assert!(matches!(
            form.validate(),
            Err(ValidationError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_user_register_confirm_trimmed() {
        let form = register(AuthKind::UserRegister, "Ada", "ada@example.com", "Secret1!", "Secret1! ");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_user_name_drops_spaces_while_typing() {
        let form = register(AuthKind::UserRegister, "Ada Lovelace", "ada@example.com", "Abcdef1!", "Abcdef1!");
        assert_eq!(form.name.value(), "AdaLovelace");
        match form.validate().unwrap() {
            AuthRequest::Register(req) => assert_eq!(req.name, "AdaLovelace"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_user_name_rejects_digits() {
        let form = register(AuthKind::UserRegister, "Ada9", "ada@example.com", "Abcdef1!", "Abcdef1!");
        assert!(matches!(form.validate(), Err(ValidationError::UserName)));
    }

    #[test]
    fn test_fields_normalized_as_typed() {
        let form = register(AuthKind::UserRegister, " Ada ", " ADA@Example.COM ", " Secret1! ", " Secret1! ");
        assert_eq!(form.name.value(), "Ada");
        assert_eq!(form.email.value(), "ada@example.com");
        assert_eq!(form.password.value(), "Secret1!");
        assert_eq!(form.confirm.value(), "Secret1!");

        let mut login = AuthForm::new(AuthKind::UserLogin);
        fill(&mut login, AuthField::Email, " Ada@Example.com");
        fill(&mut login, AuthField::Password, " secret ");
        assert_eq!(login.email.value(), "ada@example.com");
        assert_eq!(login.password.value(), "secret");

        let mut admin = AuthForm::new(AuthKind::AdminLogin);
        fill(&mut admin, AuthField::Email, " Admin@Example.COM ");
        fill(&mut admin, AuthField::Password, " secret ");
        assert_eq!(admin.email.value(), "admin@example.com");
        // Admin passwords keep their padding until submit.
        assert_eq!(admin.password.value(), " secret ");
    }

    #[test]
    fn test_user_login_requires_both() {
        let mut form = AuthForm::new(AuthKind::UserLogin);
        fill(&mut form, AuthField::Email, "ada@example.com");
        assert!(matches!(
            form.validate(),
            Err(ValidationError::CredentialsRequired)
        ));
        fill(&mut form, AuthField::Password, "x");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_admin_login_checks_format_and_length() {
        let mut form = AuthForm::new(AuthKind::AdminLogin);
        fill(&mut form, AuthField::Email, "nope");
        fill(&mut form, AuthField::Password, "secret");
        assert!(matches!(form.validate(), Err(ValidationError::Email)));
        fill(&mut form, AuthField::Email, "Admin@Example.com");
        match form.validate().unwrap() {
            AuthRequest::Login(req) => assert_eq!(req.email, "admin@example.com"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_focus_wraps_over_visible_fields() {
        let mut form = AuthForm::new(AuthKind::UserLogin);
        assert_eq!(form.focused(), AuthField::Email);
        form.focus_next();
        assert_eq!(form.focused(), AuthField::Password);
        form.focus_next();
        assert_eq!(form.focused(), AuthField::Email);
        form.focus_prev();
        assert_eq!(form.focused(), AuthField::Password);
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = register(AuthKind::UserRegister, "Ada", "ada@example.com", "Abcdef1!", "Abcdef1!");
        form.clear();
        assert!(form.name.is_empty() && form.password.is_empty());
        assert_eq!(form.strength, None);
    }
}
