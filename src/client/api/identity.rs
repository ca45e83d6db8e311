//! Hosted identity provider (Firebase Auth REST API).

use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::client::{
    api::transport::{self, Method},
    config::ClientConfig,
    error::ClientError,
    store::session::SessionUser,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordCredentialsDto<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountUpdateDto<'a> {
    id_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequestDto<'a> {
    id_token: &'a str,
}

/// Account fields shared by the sign in, sign up, update and lookup responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDto {
    local_id: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default, alias = "profilePicture")]
    photo_url: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LookupResponseDto {
    #[serde(default)]
    users: Vec<AccountDto>,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorBodyDto {
    error: IdentityErrorDto,
}

#[derive(Debug, Deserialize)]
struct IdentityErrorDto {
    message: String,
}

impl AccountDto {
    fn into_user(self, fallback_token: &str) -> SessionUser {
        SessionUser {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name.filter(|name| !name.is_empty()),
            photo_url: self.photo_url.filter(|url| !url.is_empty()),
            id_token: self
                .id_token
                .unwrap_or_else(|| fallback_token.to_string()),
        }
    }
}

/// Friendly text for an identity provider error code such as `EMAIL_EXISTS`.
///
/// Codes may carry a detail suffix (`WEAK_PASSWORD : Password should be ...`), only the code
/// before it is matched.
pub fn friendly_message(code: &str) -> &'static str {
    let code = code.split(" : ").next().unwrap_or(code).trim();

    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            "Invalid email or password"
        }
        "EMAIL_EXISTS" => "An account with this email already exists",
        "INVALID_EMAIL" => "Please enter a valid email address",
        "WEAK_PASSWORD" => "Password should be at least 6 characters",
        "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" | "TOKEN_EXPIRED" | "INVALID_ID_TOKEN" => {
            "Please log in again before changing your password"
        }
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts, please try again later",
        "USER_DISABLED" => "This account has been disabled",
        _ => "Something went wrong, please try again",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentityClient {
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.identity_url, &config.identity_api_key)
    }

    async fn call<B, T>(&self, action: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}/accounts:{}?key={}", self.base_url, action, self.api_key);
        let body = serde_json::to_string(body).map_err(|e| ClientError::Parse(e.to_string()))?;

        let response = transport::send(Method::Post, &url, None, Some(body)).await?;
        if response.is_success() {
            return response.json();
        }

        match serde_json::from_str::<IdentityErrorBodyDto>(&response.body) {
            Ok(body) => {
                tracing::warn!("Identity provider refused {}: {}", action, body.error.message);
                Err(ClientError::Identity(
                    friendly_message(&body.error.message).to_string(),
                ))
            }
            Err(_) => Err(response.into_error()),
        }
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SessionUser, ClientError> {
        let account: AccountDto = self
            .call(
                "signInWithPassword",
                &PasswordCredentialsDto {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(account.into_user(""))
    }

    /// Create an account, then attach the display name and avatar to it.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        photo_url: Option<&str>,
    ) -> Result<SessionUser, ClientError> {
        let account: AccountDto = self
            .call(
                "signUp",
                &PasswordCredentialsDto {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        let user = account.into_user("");

        self.update_profile(&user, Some(display_name), photo_url)
            .await
    }

    pub async fn update_profile(
        &self,
        user: &SessionUser,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> Result<SessionUser, ClientError> {
        let account: AccountDto = self
            .call(
                "update",
                &AccountUpdateDto {
                    id_token: &user.id_token,
                    display_name: display_name.filter(|name| !name.trim().is_empty()),
                    photo_url: photo_url.filter(|url| !url.trim().is_empty()),
                    return_secure_token: true,
                    ..Default::default()
                },
            )
            .await?;

        Ok(account.into_user(&user.id_token))
    }

    /// Re-authenticate with the current password, then set the new one.
    ///
    /// Returns the refreshed session, since a password change invalidates the old token.
    pub async fn change_password(
        &self,
        user: &SessionUser,
        current_password: &str,
        new_password: &str,
    ) -> Result<SessionUser, ClientError> {
        let fresh = self
            .sign_in(&user.email, current_password)
            .await
            .map_err(|e| match e {
                ClientError::Identity(_) => {
                    ClientError::Identity("Current password is incorrect".to_string())
                }
                other => other,
            })?;

        let account: AccountDto = self
            .call(
                "update",
                &AccountUpdateDto {
                    id_token: &fresh.id_token,
                    password: Some(new_password),
                    return_secure_token: true,
                    ..Default::default()
                },
            )
            .await?;

        Ok(account.into_user(&fresh.id_token))
    }

    /// Resolve a stored token back into a session, `None` when the token is no longer valid.
    pub async fn lookup(&self, id_token: &str) -> Result<Option<SessionUser>, ClientError> {
        let result: Result<LookupResponseDto, ClientError> =
            self.call("lookup", &LookupRequestDto { id_token }).await;

        match result {
            Ok(response) => Ok(response
                .users
                .into_iter()
                .next()
                .map(|account| account.into_user(id_token))),
            Err(ClientError::Identity(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_codes_with_detail_suffix() {
        assert_eq!(
            friendly_message("WEAK_PASSWORD : Password should be at least 6 characters"),
            "Password should be at least 6 characters"
        );
        assert_eq!(
            friendly_message("CREDENTIAL_TOO_OLD_LOGIN_AGAIN"),
            "Please log in again before changing your password"
        );
        assert_eq!(
            friendly_message("EMAIL_NOT_FOUND"),
            "Invalid email or password"
        );
        assert_eq!(
            friendly_message("SOMETHING_NEW"),
            "Something went wrong, please try again"
        );
    }

    #[test]
    fn lookup_account_keeps_stored_token() {
        let account: AccountDto = serde_json::from_str(
            r#"{"localId":"uid-1","email":"a@example.com","displayName":"","photoUrl":"https://img.example.com/a.png"}"#,
        )
        .unwrap();

        let user = account.into_user("stored-token");

        assert_eq!(user.id_token, "stored-token");
        assert_eq!(user.display_name, None);
        assert_eq!(user.photo_url.as_deref(), Some("https://img.example.com/a.png"));
    }
}
