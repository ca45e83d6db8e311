//! Route guards evaluated against the current session before a protected view renders.

use crate::{client::store::session::SessionState, model::user::Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Any signed in user.
    Authenticated,
    /// A signed in user holding exactly this role.
    Role(Role),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session or role is still loading; show a spinner.
    Pending,
    Allow,
    Redirect(Redirect),
}

pub fn evaluate(session: &SessionState, access: Access) -> GuardDecision {
    if !session.fetched {
        return GuardDecision::Pending;
    }
    if session.user.is_none() {
        return GuardDecision::Redirect(Redirect::Login);
    }

    match access {
        Access::Authenticated => GuardDecision::Allow,
        Access::Role(required) => match session.role {
            None => GuardDecision::Pending,
            Some(role) if role == required => GuardDecision::Allow,
            Some(_) => GuardDecision::Redirect(Redirect::Home),
        },
    }
}
