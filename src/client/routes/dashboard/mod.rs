mod add_ticket;
mod advertise_tickets;
mod manage_orders;
mod manage_tickets;
mod manage_users;
mod my_inventory;
mod my_orders;
mod profile;
mod seller_requests;
mod statistics;

pub use add_ticket::AddTicket;
pub use advertise_tickets::AdvertiseTickets;
pub use manage_orders::ManageOrders;
pub use manage_tickets::ManageTickets;
pub use manage_users::ManageUsers;
pub use my_inventory::MyInventory;
pub use my_orders::MyOrders;
pub use profile::Profile;
pub use seller_requests::SellerRequests;
pub use statistics::DashboardHome;
