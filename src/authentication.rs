use std::sync::Arc;

use async_trait::async_trait;
use secrecy::Secret;

/// Outcome of a password-change attempt, as reported by the service layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChangeResult {
    Success,
    OldPasswordIncorrect,
    NewPasswordInvalid,
}

/// The injected password-change capability.
///
/// Whatever service layer the host application has implements this and hands
/// it to the form controller; an `Err` stands for anything unexpected
/// (network failure, server fault) as opposed to the handled
/// [`PasswordChangeResult`] outcomes.
#[async_trait]
pub trait PasswordChanger: Send + Sync {
    async fn change_password(
        &self,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> anyhow::Result<PasswordChangeResult>;
}

#[async_trait]
impl<T: PasswordChanger + ?Sized> PasswordChanger for Arc<T> {
    async fn change_password(
        &self,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> anyhow::Result<PasswordChangeResult> {
        (**self).change_password(old_password, new_password).await
    }
}
