use dioxus::prelude::*;

use crate::{
    client::{router::Route, store::use_session},
    model::user::Role,
};

fn menu(role: Role) -> Vec<(&'static str, Route)> {
    let mut items = vec![("Statistics", Route::DashboardHome {})];

    match role {
        Role::Customer => {
            items.push(("My Booked Tickets", Route::MyOrders {}));
        }
        Role::Seller => {
            items.push(("Add Ticket", Route::AddTicket {}));
            items.push(("My Added Tickets", Route::MyInventory {}));
            items.push(("Requested Bookings", Route::ManageOrders {}));
        }
        Role::Admin => {
            items.push(("Manage Tickets", Route::ManageTickets {}));
            items.push(("Manage Users", Route::ManageUsers {}));
            items.push(("Seller Requests", Route::SellerRequests {}));
            items.push(("Advertise Tickets", Route::AdvertiseTickets {}));
        }
    }

    items.push(("Profile", Route::Profile {}));
    items
}

#[component]
pub fn Sidebar() -> Element {
    let session = use_session();
    let role = session.read().role;

    rsx!(
        aside { class: "w-full md:w-64 bg-base-200 md:min-h-[calc(100vh-64px)] p-4",
            if let Some(role) = role {
                p { class: "text-xs uppercase text-base-content/60 mb-2", "{role.label()} Dashboard" }
                ul { class: "menu w-full gap-1",
                    for (label, route) in menu(role) {
                        li {
                            Link { to: route, active_class: "menu-active", "{label}" }
                        }
                    }
                }
            } else {
                div { class: "skeleton h-40 w-full" }
            }
        }
    )
}
