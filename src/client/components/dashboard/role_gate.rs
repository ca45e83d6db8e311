use dioxus::prelude::*;

use crate::{
    client::{
        components::Loading,
        router::Route,
        store::use_session,
        util::guard::{evaluate, Access, GuardDecision, Redirect},
    },
    model::user::Role,
};

/// Render `children` only when the session satisfies `access`, otherwise redirect.
#[component]
pub fn Guard(access: Access, children: Element) -> Element {
    let session = use_session();
    let decision = evaluate(&session.read(), access);

    use_effect(use_reactive!(|decision| {
        if let GuardDecision::Redirect(target) = decision {
            let route = match target {
                Redirect::Login => Route::Login {},
                Redirect::Home => Route::Home {},
            };
            navigator().replace(route);
        }
    }));

    match decision {
        GuardDecision::Allow => rsx!({ children }),
        GuardDecision::Pending | GuardDecision::Redirect(_) => rsx!(Loading {}),
    }
}

#[component]
pub fn RoleGate(role: Role, children: Element) -> Element {
    rsx!(
        Guard { access: Access::Role(role), {children} }
    )
}
