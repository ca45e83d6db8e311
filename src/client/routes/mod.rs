mod about;
mod all_tickets;
pub mod dashboard;
mod home;
mod login;
mod not_found;
mod payment_success;
mod signup;
mod ticket_details;

pub use about::About;
pub use all_tickets::AllTickets;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use payment_success::PaymentSuccess;
pub use signup::Signup;
pub use ticket_details::TicketDetails;
