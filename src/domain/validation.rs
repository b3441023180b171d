use secrecy::ExposeSecret;
use unicode_segmentation::UnicodeSegmentation;

use crate::{configuration::PasswordPolicy, domain::ChangePasswordForm, i18n::Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OldPassword,
    NewPassword,
    NewPasswordConfirmation,
}

impl Field {
    fn value<'a>(&self, form: &'a ChangePasswordForm) -> &'a str {
        match self {
            Field::OldPassword => form.old_password.expose_secret(),
            Field::NewPassword => form.new_password.expose_secret(),
            Field::NewPasswordConfirmation => form.new_password_confirmation.expose_secret(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Required,
    MinLength(usize),
    MaxLength(usize),
    MustMatch(Field),
}

/// A declarative per-field constraint together with the localized message it
/// surfaces when violated.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub constraint: Constraint,
    pub message: Message,
}

impl Rule {
    fn holds(&self, form: &ChangePasswordForm) -> bool {
        let value = self.field.value(form);
        match self.constraint {
            Constraint::Required => !value.is_empty(),
            // An empty value is the Required rule's concern.
            Constraint::MinLength(min) => {
                value.is_empty() || value.graphemes(true).count() >= min
            }
            Constraint::MaxLength(max) => value.graphemes(true).count() <= max,
            Constraint::MustMatch(other) => value == other.value(form),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: Message,
}

/// The rules the change-password form declares: all three fields required,
/// length bounds on the old and new password, confirmation equal to the new
/// password.
pub fn rule_set(policy: &PasswordPolicy) -> Vec<Rule> {
    let min = policy.min_length;
    let max = policy.max_length;
    vec![
        Rule {
            field: Field::OldPassword,
            constraint: Constraint::Required,
            message: Message::OldPasswordRequired,
        },
        Rule {
            field: Field::OldPassword,
            constraint: Constraint::MinLength(min),
            message: Message::OldPasswordTooShort { min },
        },
        Rule {
            field: Field::OldPassword,
            constraint: Constraint::MaxLength(max),
            message: Message::OldPasswordTooLong { max },
        },
        Rule {
            field: Field::NewPassword,
            constraint: Constraint::Required,
            message: Message::NewPasswordRequired,
        },
        Rule {
            field: Field::NewPassword,
            constraint: Constraint::MinLength(min),
            message: Message::NewPasswordTooShort { min },
        },
        Rule {
            field: Field::NewPassword,
            constraint: Constraint::MaxLength(max),
            message: Message::NewPasswordTooLong { max },
        },
        Rule {
            field: Field::NewPasswordConfirmation,
            constraint: Constraint::Required,
            message: Message::ConfirmationRequired,
        },
        Rule {
            field: Field::NewPasswordConfirmation,
            constraint: Constraint::MustMatch(Field::NewPassword),
            message: Message::ConfirmationMismatch,
        },
    ]
}

/// Evaluates every rule against the current values and returns the failures
/// in rule order. Stateless; lengths are counted in grapheme clusters.
pub fn evaluate(rules: &[Rule], form: &ChangePasswordForm) -> Vec<FieldError> {
    rules
        .iter()
        .filter(|rule| !rule.holds(form))
        .map(|rule| FieldError {
            field: rule.field,
            message: rule.message,
        })
        .collect()
}
