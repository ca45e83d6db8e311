use dioxus::prelude::*;

use crate::client::{
    components::{dashboard::DashboardLayout, Navbar},
    routes::{
        dashboard::{
            AddTicket, AdvertiseTickets, DashboardHome, ManageOrders, ManageTickets, ManageUsers,
            MyInventory, MyOrders, Profile, SellerRequests,
        },
        About, AllTickets, Home, Login, NotFound, PaymentSuccess, Signup, TicketDetails,
    },
};

use crate::client::routes::NotFound as DashboardNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

        #[route("/")]
        Home {},

        #[route("/tickets?:from&:to")]
        AllTickets { from: String, to: String },

        #[route("/tickets/:id")]
        TicketDetails { id: String },

        #[route("/about")]
        About {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[route("/payment-success?:session_id")]
        PaymentSuccess { session_id: String },

        #[nest("/dashboard")]

            #[layout(DashboardLayout)]

            #[route("/")]
            DashboardHome {},

            #[route("/profile")]
            Profile {},

            #[route("/my-orders")]
            MyOrders {},

            #[route("/add-ticket")]
            AddTicket {},

            #[route("/my-inventory")]
            MyInventory {},

            #[route("/manage-orders")]
            ManageOrders {},

            #[route("/manage-tickets")]
            ManageTickets {},

            #[route("/advertise-tickets")]
            AdvertiseTickets {},

            #[route("/manage-users")]
            ManageUsers {},

            #[route("/seller-requests")]
            SellerRequests {},

            #[route("/:..segments")]
            DashboardNotFound { segments: Vec<String> },

            #[end_layout]

        #[end_nest]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// The unfiltered ticket catalog.
    pub fn catalog() -> Self {
        Self::AllTickets {
            from: String::new(),
            to: String::new(),
        }
    }
}
