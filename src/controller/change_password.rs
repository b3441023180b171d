use std::collections::HashSet;

use secrecy::Secret;

use crate::{
    authentication::{PasswordChangeResult, PasswordChanger},
    configuration::PasswordPolicy,
    domain::{
        validation::{evaluate, rule_set, Field, FieldError, Rule},
        ChangePasswordForm,
    },
    i18n::{Localizer, Message},
    notifications::{Notification, NotificationSink},
};

/// The change-password form controller.
///
/// Owns the three field values and their validation state, and runs the
/// submission protocol against the injected [`PasswordChanger`]. Feedback
/// goes out through the [`NotificationSink`]; nothing is propagated past it.
pub struct ChangePasswordController<C, N, L> {
    changer: C,
    notifier: N,
    locale: L,
    rules: Vec<Rule>,
    values: ChangePasswordForm,
    field_errors: Vec<FieldError>,
    touched: HashSet<Field>,
    in_progress: bool,
}

impl<C, N, L> ChangePasswordController<C, N, L>
where
    C: PasswordChanger,
    N: NotificationSink,
    L: Localizer,
{
    pub fn new(policy: PasswordPolicy, changer: C, notifier: N, locale: L) -> Self {
        Self {
            changer,
            notifier,
            locale,
            rules: rule_set(&policy),
            values: ChangePasswordForm::empty(),
            field_errors: Vec::new(),
            touched: HashSet::new(),
            in_progress: false,
        }
    }

    pub fn set_old_password(&mut self, value: impl Into<String>) {
        self.values.old_password = Secret::new(value.into());
        self.touch(Field::OldPassword);
    }

    pub fn set_new_password(&mut self, value: impl Into<String>) {
        self.values.new_password = Secret::new(value.into());
        self.touch(Field::NewPassword);
    }

    pub fn set_new_password_confirmation(&mut self, value: impl Into<String>) {
        self.values.new_password_confirmation = Secret::new(value.into());
        self.touch(Field::NewPasswordConfirmation);
    }

    // Rules are re-evaluated on every change, but only touched fields
    // surface their errors, so an untouched confirmation field does not
    // complain while the user is still typing the new password.
    fn touch(&mut self, field: Field) {
        self.touched.insert(field);
        let errors: Vec<FieldError> = evaluate(&self.rules, &self.values)
            .into_iter()
            .filter(|error| self.touched.contains(&error.field))
            .collect();
        self.field_errors = errors;
    }

    /// Touches every field, evaluates the full rule set and stores the
    /// failures. Returns whether the form may be submitted.
    pub fn validate(&mut self) -> bool {
        self.touched.extend([
            Field::OldPassword,
            Field::NewPassword,
            Field::NewPasswordConfirmation,
        ]);
        self.field_errors = evaluate(&self.rules, &self.values);
        self.field_errors.is_empty()
    }

    pub fn label(&self, field: Field) -> String {
        let message = match field {
            Field::OldPassword => Message::OldPasswordLabel,
            Field::NewPassword => Message::NewPasswordLabel,
            Field::NewPasswordConfirmation => Message::NewPasswordConfirmLabel,
        };
        self.locale.localize(&message)
    }

    pub fn submit_label(&self) -> String {
        self.locale.localize(&Message::SubmitLabel)
    }

    pub fn values(&self) -> &ChangePasswordForm {
        &self.values
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Runs one submission: validate, invoke the injected operation, map the
    /// outcome to a notification and form-state change.
    ///
    /// The in-progress flag is cleared strictly after the outcome handling,
    /// on every settled path; there is no early return once it is set.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&mut self) {
        if !self.validate() {
            tracing::debug!(
                errors = self.field_errors.len(),
                "change-password form failed validation"
            );
            return;
        }
        self.in_progress = true;
        let outcome = self
            .changer
            .change_password(
                self.values.old_password.clone(),
                self.values.new_password.clone(),
            )
            .await;
        match outcome {
            Ok(PasswordChangeResult::Success) => {
                tracing::info!("password changed");
                self.notifier.notify(Notification::success(
                    self.locale.localize(&Message::SuccessTitle),
                    self.locale.localize(&Message::SuccessBody),
                ));
                self.values.reset();
                self.field_errors.clear();
                self.touched.clear();
            }
            Ok(PasswordChangeResult::OldPasswordIncorrect) => {
                self.notify_error(Message::OldPasswordIncorrect);
            }
            Ok(PasswordChangeResult::NewPasswordInvalid) => {
                self.notify_error(Message::NewPasswordInvalid);
            }
            Err(e) => {
                tracing::error!(error = ?e, "password change failed unexpectedly");
                self.notifier.notify(Notification::error(e.to_string()));
            }
        }
        self.in_progress = false;
    }

    fn notify_error(&self, message: Message) {
        self.notifier
            .notify(Notification::error(self.locale.localize(&message)));
    }
}
