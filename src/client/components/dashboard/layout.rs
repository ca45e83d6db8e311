use dioxus::prelude::*;

use crate::client::{
    components::dashboard::{role_gate::Guard, Sidebar},
    router::Route,
    util::guard::Access,
};

/// Dashboard chrome: guarded for signed in users, role menu on the side.
#[component]
pub fn DashboardLayout() -> Element {
    rsx!(
        Guard { access: Access::Authenticated,
            div { class: "flex flex-col md:flex-row",
                Sidebar {}
                div { class: "flex-1 p-4 md:p-8",
                    Outlet::<Route> {}
                }
            }
        }
    )
}
