//! Message keys surfaced by the change-password form.
//!
//! The real translation catalog lives in the host application; the form only
//! names the messages it needs and resolves them through a [`Localizer`].
//! [`EnglishLocale`] is the built-in default resolution.

/// Every localized message the form can surface: field labels, per-rule
/// validation messages, the handled-failure messages and the success toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OldPasswordLabel,
    NewPasswordLabel,
    NewPasswordConfirmLabel,
    SubmitLabel,
    OldPasswordRequired,
    OldPasswordTooShort { min: usize },
    OldPasswordTooLong { max: usize },
    OldPasswordIncorrect,
    NewPasswordRequired,
    NewPasswordTooShort { min: usize },
    NewPasswordTooLong { max: usize },
    NewPasswordInvalid,
    ConfirmationRequired,
    ConfirmationMismatch,
    SuccessTitle,
    SuccessBody,
}

pub trait Localizer {
    fn localize(&self, message: &Message) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocale;

impl Localizer for EnglishLocale {
    fn localize(&self, message: &Message) -> String {
        match message {
            Message::OldPasswordLabel => "Old password".to_string(),
            Message::NewPasswordLabel => "New password".to_string(),
            Message::NewPasswordConfirmLabel => "Confirm new password".to_string(),
            Message::SubmitLabel => "Change password".to_string(),
            Message::OldPasswordRequired => "The old password is required.".to_string(),
            Message::OldPasswordTooShort { min } => {
                format!("The old password must be at least {} characters long.", min)
            }
            Message::OldPasswordTooLong { max } => {
                format!("The old password must be at most {} characters long.", max)
            }
            Message::OldPasswordIncorrect => {
                "The old password you entered is incorrect.".to_string()
            }
            Message::NewPasswordRequired => "The new password is required.".to_string(),
            Message::NewPasswordTooShort { min } => {
                format!("The new password must be at least {} characters long.", min)
            }
            Message::NewPasswordTooLong { max } => {
                format!("The new password must be at most {} characters long.", max)
            }
            Message::NewPasswordInvalid => {
                "The new password was rejected by the server.".to_string()
            }
            Message::ConfirmationRequired => {
                "The new password confirmation is required.".to_string()
            }
            Message::ConfirmationMismatch => {
                "You entered two different new passwords - the field values must match."
                    .to_string()
            }
            Message::SuccessTitle => "Password changed".to_string(),
            Message::SuccessBody => "Your password has been changed successfully.".to_string(),
        }
    }
}
