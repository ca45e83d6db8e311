use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMoon, FaSun, FaTicket};
use dioxus_free_icons::Icon;

use crate::client::{
    auth, browser,
    components::Footer,
    router::Route,
    store::{
        query::QueryResource, toast::notify_success, use_query_cache, use_session, use_theme,
        use_toasts,
    },
    util::format,
};

#[component]
pub fn BrandLink() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            class: "flex items-center gap-2 text-xl font-bold",
            Icon { width: 24, height: 24, icon: FaTicket }
            "TicketMaster"
        }
    )
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx!(
        button {
            class: "btn btn-ghost btn-circle",
            title: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggle();
                theme.set(next);
                browser::apply_theme(next);
            },
            if theme().is_dark() {
                Icon { width: 18, height: 18, icon: FaSun }
            } else {
                Icon { width: 18, height: 18, icon: FaMoon }
            }
        }
    )
}

#[component]
fn UserMenu() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut cache = use_query_cache();
    let state = session.read().clone();

    let Some(user) = state.user else {
        if !state.fetched {
            return rsx!( span { class: "loading loading-dots loading-sm" } );
        }
        return rsx!(
            div { class: "flex gap-2",
                Link { to: Route::Login {}, class: "btn btn-primary btn-sm", "Login" }
                Link { to: Route::Signup {}, class: "btn btn-outline btn-sm", "Register" }
            }
        );
    };
    let name = user.display_name.clone().unwrap_or_else(|| user.email.clone());
    let initial = format::initial(user.display_name.as_deref(), &user.email);

    rsx!(
        div { class: "dropdown dropdown-end",
            div { tabindex: "0", role: "button", class: "btn btn-ghost btn-circle avatar",
                if let Some(photo) = &user.photo_url {
                    div { class: "w-10 rounded-full",
                        img { src: "{photo}", alt: "{name}" }
                    }
                } else {
                    div { class: "w-10 rounded-full bg-primary text-primary-content grid place-items-center",
                        "{initial}"
                    }
                }
            }
            ul { tabindex: "0", class: "menu menu-sm dropdown-content bg-base-100 rounded-box z-10 mt-3 w-52 p-2 shadow",
                li { class: "menu-title", "{name}" }
                li { Link { to: Route::Profile {}, "My Profile" } }
                li { Link { to: Route::DashboardHome {}, "Dashboard" } }
                li {
                    button {
                        onclick: move |_| {
                            auth::sign_out(session);
                            cache.write().invalidate(&QueryResource::ORDERS);
                            notify_success(toasts, "Logged out successfully");
                            navigator().push(Route::Home {});
                        },
                        "Logout"
                    }
                }
            }
        }
    )
}

/// Site chrome around every public page.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div { class: "navbar bg-base-200 sticky top-0 z-40 px-4",
            div { class: "navbar-start",
                BrandLink {}
            }
            div { class: "navbar-center hidden md:flex",
                ul { class: "menu menu-horizontal gap-1",
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::catalog(), "All Tickets" } }
                    li { Link { to: Route::DashboardHome {}, "Dashboard" } }
                    li { Link { to: Route::About {}, "About" } }
                }
            }
            div { class: "navbar-end gap-2",
                ThemeToggle {}
                UserMenu {}
            }
        }

        main { class: "bg-base-100",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
