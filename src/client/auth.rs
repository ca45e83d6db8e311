//! Session lifecycle: restore at startup, sign in, sign out.

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{ApiClient, IdentityClient},
        browser::{self, TOKEN_STORAGE_KEY},
        config::ClientConfig,
        error::ClientError,
        store::{
            query::{QueryCache, QueryResource},
            session::{SessionState, SessionUser},
        },
    },
    model::user::{Role, SaveUserDto},
};

/// Restore the session from the stored identity token, if any.
pub async fn restore_session(config: ClientConfig, mut session: Signal<SessionState>) {
    let Some(token) = browser::storage_get(TOKEN_STORAGE_KEY).await else {
        session.set(SessionState::signed_out());
        return;
    };

    let identity = IdentityClient::from_config(&config);
    match identity.lookup(&token).await {
        Ok(Some(user)) => {
            tracing::info!("Restored session for {}", user.email);
            let api = ApiClient::new(&config.api_url, Some(&user.id_token));
            let role = fetch_role(&api).await;
            session.set(SessionState::signed_in(user).with_role(role));
        }
        Ok(None) => {
            tracing::info!("Stored session expired");
            browser::storage_remove(TOKEN_STORAGE_KEY);
            session.set(SessionState::signed_out());
        }
        Err(e) => {
            tracing::error!("Failed to restore session: {}", e);
            session.set(SessionState::signed_out());
        }
    }
}

/// Adopt a freshly authenticated user: persist the token, sync the profile, load the role.
///
/// The session is published last, with its role, so views reacting to the sign in never see a
/// signed in user whose role is still unknown.
pub async fn complete_sign_in(
    config: &ClientConfig,
    mut session: Signal<SessionState>,
    mut cache: Signal<QueryCache>,
    user: SessionUser,
) {
    browser::storage_set(TOKEN_STORAGE_KEY, &user.id_token);
    let api = ApiClient::new(&config.api_url, Some(&user.id_token));

    let profile = SaveUserDto {
        email: user.email.clone(),
        name: user.display_name.clone(),
        image: user.photo_url.clone(),
    };
    if let Err(e) = api.save_user(&profile).await {
        tracing::error!("Failed to save user profile: {}", e);
    }
    let role = fetch_role(&api).await;

    tracing::info!("Signed in as {}", user.email);
    session.set(SessionState::signed_in(user).with_role(role));
    cache.write().invalidate(&QueryResource::ORDERS);
}

/// Replace the session user after a profile or password update.
pub fn refresh_user(mut session: Signal<SessionState>, user: SessionUser) {
    browser::storage_set(TOKEN_STORAGE_KEY, &user.id_token);
    session.with_mut(|state| state.user = Some(user));
}

async fn fetch_role(api: &ApiClient) -> Option<Role> {
    match api.get_role().await {
        Ok(role) => Some(role),
        // A signed in user without a stored role is a customer.
        Err(ClientError::Status { status: 404, .. }) => Some(Role::default()),
        Err(e) => {
            tracing::error!("Failed to load user role: {}", e);
            None
        }
    }
}

pub fn sign_out(mut session: Signal<SessionState>) {
    browser::storage_remove(TOKEN_STORAGE_KEY);
    session.set(SessionState::signed_out());
    tracing::info!("Signed out");
}
