use crate::model::{payment::CustomerDto, ticket::SellerDto, user::Role};

/// Signed in identity as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    /// Bearer token attached to credentialed backend calls.
    pub id_token: String,
}

impl SessionUser {
    pub fn as_seller(&self) -> SellerDto {
        SellerDto {
            name: self.display_name.clone().unwrap_or_default(),
            email: self.email.clone(),
            image: self.photo_url.clone(),
        }
    }

    pub fn as_customer(&self) -> CustomerDto {
        CustomerDto {
            name: self.display_name.clone(),
            email: self.email.clone(),
            image: self.photo_url.clone(),
        }
    }
}

/// Application-wide session, provided as a context signal by `App`.
///
/// `fetched` flips to true once the stored token has been checked at startup, whether or not a
/// user was restored. `role` is loaded separately from the backend after sign in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub role: Option<Role>,
    pub fetched: bool,
}

impl SessionState {
    pub fn signed_in(user: SessionUser) -> Self {
        Self {
            user: Some(user),
            role: None,
            fetched: true,
        }
    }

    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn signed_out() -> Self {
        Self {
            fetched: true,
            ..Default::default()
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.id_token.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.email.as_str())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}
