use change_password_form::{
    authentication::PasswordChangeResult,
    domain::validation::Field,
    i18n::{EnglishLocale, Localizer, Message},
    notifications::Color,
};
use secrecy::ExposeSecret;

use crate::helpers::{fill_valid, spawn_form, FakePasswordChanger};

#[tokio::test]
async fn a_successful_change_resets_the_form_and_notifies_once() {
    let mut form = spawn_form(FakePasswordChanger::resolving(PasswordChangeResult::Success));
    let (old_password, new_password) = fill_valid(&mut form);

    form.controller.submit().await;

    assert_eq!(form.changer.calls(), vec![(old_password, new_password)]);
    let received = form.notifications.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].color, Color::Green);
    assert_eq!(
        received[0].title,
        EnglishLocale.localize(&Message::SuccessTitle)
    );
    assert_eq!(
        received[0].message,
        EnglishLocale.localize(&Message::SuccessBody)
    );
    let values = form.controller.values();
    assert!(values.old_password.expose_secret().is_empty());
    assert!(values.new_password.expose_secret().is_empty());
    assert!(values.new_password_confirmation.expose_secret().is_empty());
    assert!(form.controller.field_errors().is_empty());
    assert!(!form.controller.is_touched(Field::OldPassword));
    assert!(!form.controller.in_progress());
}

#[tokio::test]
async fn an_incorrect_old_password_keeps_the_entered_values() {
    let mut form = spawn_form(FakePasswordChanger::resolving(
        PasswordChangeResult::OldPasswordIncorrect,
    ));
    let (old_password, new_password) = fill_valid(&mut form);

    form.controller.submit().await;

    let received = form.notifications.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].color, Color::Red);
    assert_eq!(
        received[0].message,
        EnglishLocale.localize(&Message::OldPasswordIncorrect)
    );
    let values = form.controller.values();
    assert_eq!(values.old_password.expose_secret(), &old_password);
    assert_eq!(values.new_password.expose_secret(), &new_password);
    assert!(!form.controller.in_progress());
}

#[tokio::test]
async fn a_rejected_new_password_keeps_the_entered_values() {
    let mut form = spawn_form(FakePasswordChanger::resolving(
        PasswordChangeResult::NewPasswordInvalid,
    ));
    let (_, new_password) = fill_valid(&mut form);

    form.controller.submit().await;

    let received = form.notifications.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].color, Color::Red);
    assert_eq!(
        received[0].message,
        EnglishLocale.localize(&Message::NewPasswordInvalid)
    );
    assert_eq!(
        form.controller.values().new_password.expose_secret(),
        &new_password
    );
    assert!(!form.controller.in_progress());
}

#[tokio::test]
async fn an_unexpected_failure_surfaces_a_generic_error_notification() {
    let mut form = spawn_form(FakePasswordChanger::failing("connection reset by peer"));
    let (_, new_password) = fill_valid(&mut form);

    form.controller.submit().await;

    let received = form.notifications.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].color, Color::Red);
    assert_eq!(received[0].title, "Error");
    assert!(received[0].message.contains("connection reset by peer"));
    assert_eq!(
        form.controller.values().new_password.expose_secret(),
        &new_password
    );
    assert!(!form.controller.in_progress());
}

#[tokio::test]
async fn the_changer_receives_the_old_and_new_password_only() {
    let mut form = spawn_form(FakePasswordChanger::resolving(PasswordChangeResult::Success));
    form.controller.set_old_password("validOldPass1");
    form.controller.set_new_password("newPass123");
    form.controller.set_new_password_confirmation("newPass123");

    form.controller.submit().await;

    assert_eq!(
        form.changer.calls(),
        vec![("validOldPass1".to_string(), "newPass123".to_string())]
    );
}

#[test]
fn labels_resolve_through_the_localizer() {
    let form = spawn_form(FakePasswordChanger::resolving(PasswordChangeResult::Success));
    assert_eq!(form.controller.label(Field::OldPassword), "Old password");
    assert_eq!(form.controller.label(Field::NewPassword), "New password");
    assert_eq!(
        form.controller.label(Field::NewPasswordConfirmation),
        "Confirm new password"
    );
    assert_eq!(form.controller.submit_label(), "Change password");
}
