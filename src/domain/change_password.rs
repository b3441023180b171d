use secrecy::Secret;
use serde::Deserialize;

/// The three field values owned by the change-password form.
#[derive(Deserialize)]
pub struct ChangePasswordForm {
    pub old_password: Secret<String>,
    pub new_password: Secret<String>,
    pub new_password_confirmation: Secret<String>,
}

impl ChangePasswordForm {
    pub fn empty() -> Self {
        Self {
            old_password: Secret::new(String::new()),
            new_password: Secret::new(String::new()),
            new_password_confirmation: Secret::new(String::new()),
        }
    }

    /// Clears all three fields, as happens after a successful change.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }
}

impl Default for ChangePasswordForm {
    fn default() -> Self {
        Self::empty()
    }
}
