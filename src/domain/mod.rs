mod change_password;
pub mod validation;

pub use change_password::ChangePasswordForm;
