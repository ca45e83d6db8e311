use thiserror::Error;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("All fields are required")]
    Required,
    #[error("New passwords do not match")]
    Mismatch,
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    TooShort,
}

/// Contents of the change password form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// Check the form locally and return the new password to send.
    pub fn validate(&self) -> Result<&str, PasswordError> {
        if self.current.is_empty() || self.new.is_empty() || self.confirm.is_empty() {
            return Err(PasswordError::Required);
        }
        if self.new != self.confirm {
            return Err(PasswordError::Mismatch);
        }
        if self.new.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PasswordError::TooShort);
        }

        Ok(&self.new)
    }
}
